// SPDX-License-Identifier: MPL-2.0
//! HTTP Request Gateway.
//!
//! Screens never talk to `reqwest` directly: they build a [`Request`] and hand
//! it to a [`Gateway`]. The production implementation is [`HttpGateway`];
//! tests substitute an in-memory one.
//!
//! Request bodies are always multipart form data (text fields plus optional
//! binary attachments), which is what the backend expects for both the
//! listing and the submission endpoints.

pub mod endpoints;
mod http;

pub use http::HttpGateway;

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// HTTP method of a gateway request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A binary part of a multipart body.
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    pub field: String,
    pub filename: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachment")
            .field("field", &self.field)
            .field("filename", &self.filename)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Multipart form body: ordered text fields followed by attachments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestBody {
    pub fields: Vec<(String, String)>,
    pub attachments: Vec<Attachment>,
}

impl RequestBody {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a text field.
    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Appends a binary attachment.
    #[must_use]
    pub fn attach(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Returns the value of the first text field with this name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the first attachment sent under this field name.
    #[must_use]
    pub fn attachment(&self, field: &str) -> Option<&Attachment> {
        self.attachments.iter().find(|a| a.field == field)
    }
}

/// One request against the backend origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    /// Path relative to the gateway's base origin.
    pub path: String,
    pub body: Option<RequestBody>,
    pub query: Vec<(String, String)>,
}

impl Request {
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
            query: Vec::new(),
        }
    }

    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            ..Self::get(path)
        }
    }

    #[must_use]
    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }
}

/// Performs requests against a fixed backend origin.
///
/// Implementations raise an [`Error`](crate::error::Error) on transport failure
/// or non-success status; callers do not distinguish between the two.
#[async_trait]
pub trait Gateway: Send + Sync + fmt::Debug {
    /// Sends `request` and returns the parsed response body.
    ///
    /// Bodies that are not JSON come back as a JSON string value.
    async fn request(&self, request: Request) -> Result<Value>;

    /// Fetches the raw bytes behind an absolute URL.
    async fn download(&self, url: &str) -> Result<Vec<u8>>;
}

/// Gateway handle shared between the update loop and spawned tasks.
pub type SharedGateway = Arc<dyn Gateway>;
