// SPDX-License-Identifier: MPL-2.0
//! Paginated gallery state.
//!
//! [`GalleryPager`] accumulates [`ImageRecord`]s page by page from the listing
//! endpoint. It is a small state machine:
//!
//! ```text
//!            load_next_page()             complete(full page)
//!   Idle ───────────────────────▶ Loading ─────────────────────▶ Idle
//!    ▲                               │  complete(failed) ──────▶ Idle
//!    │ refresh()                     │  complete(short/empty/malformed)
//!    └──────── Exhausted ◀───────────┘
//! ```
//!
//! Triggers received while `Loading` or `Exhausted` are ignored, so at most
//! one listing request is ever outstanding and nothing is requested after the
//! end of the list until an explicit refresh.
//!
//! The pager itself performs no I/O: [`GalleryPager::load_next_page`] hands out
//! a [`PageRequest`], the caller runs [`fetch_page`] and feeds the resulting
//! [`PageOutcome`] back through [`GalleryPager::complete`].

pub mod thumbnails;

use crate::api::endpoints::LISTING_PATH;
use crate::api::{Gateway, Request, RequestBody};
use crate::config::BackendConfig;
use crate::error::Error;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Server-side identifier of a record; the backend sends either form.
///
/// Non-integer numbers are kept as their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

/// One image of the listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    #[serde(default, deserialize_with = "lenient_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Empty when the backend sends `null`; the tile renders a placeholder.
    #[serde(rename = "xt_image", default, deserialize_with = "null_as_empty")]
    pub remote_image_url: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub width: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub height: Option<String>,
}

impl ImageRecord {
    /// Width divided by height, or `1.0` when either is missing or not a
    /// positive number.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        let parse = |value: &Option<String>| {
            value
                .as_deref()
                .and_then(|v| v.trim().parse::<f32>().ok())
                .filter(|v| v.is_finite() && *v > 0.0)
        };
        match (parse(&self.width), parse(&self.height)) {
            (Some(width), Some(height)) => width / height,
            _ => 1.0,
        }
    }
}

/// Accepts `"640"`, `640` or `null`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<RecordId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => Some(match n.as_i64() {
            Some(int) => RecordId::Number(int),
            None => RecordId::Text(n.to_string()),
        }),
        Some(Value::String(s)) => Some(RecordId::Text(s)),
        _ => None,
    })
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Expected listing response body. Records are decoded one by one.
#[derive(Debug, Deserialize)]
struct ListingResponse {
    images: Vec<Value>,
}

/// Fixed parameters of every listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingParams {
    pub user_id: String,
    pub category: String,
    /// Number of records a full page holds; shorter pages end the list.
    pub page_size: usize,
}

impl ListingParams {
    #[must_use]
    pub fn from_config(backend: &BackendConfig) -> Self {
        Self {
            user_id: backend.user_id().to_string(),
            category: backend.category().to_string(),
            page_size: backend.page_size(),
        }
    }
}

impl Default for ListingParams {
    fn default() -> Self {
        Self::from_config(&BackendConfig::default())
    }
}

/// A listing request handed out by the pager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: usize,
    pub user_id: String,
    pub category: String,
    /// Whether the response replaces the accumulated list.
    pub refresh: bool,
}

impl PageRequest {
    /// Builds the gateway request for the listing endpoint.
    #[must_use]
    pub fn to_request(&self) -> Request {
        Request::post(LISTING_PATH).with_body(
            RequestBody::new()
                .text("user_id", self.user_id.as_str())
                .text("offset", self.offset.to_string())
                .text("type", self.category.as_str()),
        )
    }
}

/// Result of one listing request.
#[derive(Debug, Clone)]
pub enum PageOutcome {
    /// The response had the expected shape (possibly with no records).
    Page(Vec<ImageRecord>),
    /// The response could not be read as a listing.
    Malformed,
    /// The request itself failed.
    Failed(Error),
}

/// Pagination phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PagerPhase {
    #[default]
    Idle,
    Loading,
    Exhausted,
}

/// Accumulated gallery state.
#[derive(Debug, Clone)]
pub struct GalleryPager {
    params: ListingParams,
    images: Vec<ImageRecord>,
    offset: usize,
    phase: PagerPhase,
    /// Set by `refresh()`; the next page replaces `images`.
    replace_pending: bool,
}

impl GalleryPager {
    #[must_use]
    pub fn new(params: ListingParams) -> Self {
        Self {
            params,
            images: Vec::new(),
            offset: 0,
            phase: PagerPhase::Idle,
            replace_pending: false,
        }
    }

    /// Starts loading the next page.
    ///
    /// Returns `None` while a load is in flight or once the list is exhausted.
    pub fn load_next_page(&mut self) -> Option<PageRequest> {
        match self.phase {
            PagerPhase::Loading => {
                tracing::trace!("page load already in flight, ignoring trigger");
                None
            }
            PagerPhase::Exhausted => {
                tracing::trace!("gallery exhausted, ignoring trigger");
                None
            }
            PagerPhase::Idle => {
                self.phase = PagerPhase::Loading;
                tracing::debug!(offset = self.offset, refresh = self.replace_pending, "loading page");
                Some(PageRequest {
                    offset: self.offset,
                    user_id: self.params.user_id.clone(),
                    category: self.params.category.clone(),
                    refresh: self.replace_pending,
                })
            }
        }
    }

    /// Restarts pagination from the first page.
    ///
    /// The current images stay visible until the first page arrives and
    /// replaces them. Ignored while a load is in flight.
    pub fn refresh(&mut self) -> Option<PageRequest> {
        if self.phase == PagerPhase::Loading {
            return None;
        }
        self.offset = 0;
        self.phase = PagerPhase::Idle;
        self.replace_pending = true;
        self.load_next_page()
    }

    /// Applies the outcome of the in-flight request.
    ///
    /// Outcomes arriving while nothing is in flight are dropped.
    pub fn complete(&mut self, outcome: PageOutcome) {
        if self.phase != PagerPhase::Loading {
            tracing::warn!("page outcome received with no load in flight, dropping it");
            return;
        }

        match outcome {
            PageOutcome::Page(records) if !records.is_empty() => {
                let received = records.len();
                if self.replace_pending {
                    self.images = records;
                    self.offset = received;
                } else {
                    self.images.extend(records);
                    self.offset += received;
                }
                self.replace_pending = false;

                if received < self.params.page_size {
                    tracing::info!(received, total = self.images.len(), "short page, end of gallery");
                    self.phase = PagerPhase::Exhausted;
                } else {
                    tracing::debug!(received, total = self.images.len(), "page appended");
                    self.phase = PagerPhase::Idle;
                }
            }
            PageOutcome::Page(_) => {
                tracing::info!(total = self.images.len(), "empty page, end of gallery");
                self.replace_pending = false;
                self.phase = PagerPhase::Exhausted;
            }
            PageOutcome::Malformed => {
                tracing::warn!("malformed listing response, stopping pagination");
                self.replace_pending = false;
                self.phase = PagerPhase::Exhausted;
            }
            PageOutcome::Failed(err) => {
                tracing::warn!(error = %err, "page load failed");
                self.phase = PagerPhase::Idle;
            }
        }
    }

    #[must_use]
    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub fn phase(&self) -> PagerPhase {
        self.phase
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == PagerPhase::Loading
    }

    /// Whether the load in flight will replace the current images.
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.phase == PagerPhase::Loading && self.replace_pending
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.phase != PagerPhase::Exhausted
    }

    #[must_use]
    pub fn params(&self) -> &ListingParams {
        &self.params
    }
}

impl Default for GalleryPager {
    fn default() -> Self {
        Self::new(ListingParams::default())
    }
}

/// Reads a listing response body.
///
/// Only a body without an `images` array is malformed; individual records
/// that cannot be read are skipped.
#[must_use]
pub fn decode_page(body: Value) -> PageOutcome {
    match serde_json::from_value::<ListingResponse>(body) {
        Ok(response) => PageOutcome::Page(
            response
                .images
                .into_iter()
                .enumerate()
                .filter_map(|(index, raw)| match serde_json::from_value(raw) {
                    Ok(record) => Some(record),
                    Err(err) => {
                        tracing::warn!(index, error = %err, "skipping unreadable listing record");
                        None
                    }
                })
                .collect(),
        ),
        Err(err) => {
            tracing::debug!(error = %err, "listing response does not match the expected shape");
            PageOutcome::Malformed
        }
    }
}

/// Performs the listing request described by `request`.
pub async fn fetch_page(gateway: &dyn Gateway, request: &PageRequest) -> PageOutcome {
    match gateway.request(request.to_request()).await {
        Ok(body) => decode_page(body),
        Err(err) => PageOutcome::Failed(err),
    }
}
