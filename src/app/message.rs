// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::gallery::PageOutcome;
use crate::ui::{detail, gallery, notifications};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. Screen messages are
/// forwarded; the rest are results of background tasks.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Detail(detail::Message),
    Notification(notifications::NotificationMessage),
    PageLoaded(PageOutcome),
    ThumbnailLoaded {
        url: String,
        result: Result<Vec<u8>, Error>,
    },
    SubmissionFinished {
        /// Detail screen visit the submission belongs to.
        session: u64,
        result: Result<(), Error>,
    },
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `GALLERY_SUBMIT_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Optional backend origin, overriding `[backend] base_url`.
    pub base_url: Option<String>,
    /// Optional `tracing` filter directive, overriding `RUST_LOG`.
    pub log_level: Option<String>,
}
