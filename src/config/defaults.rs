// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Backend**: Remote origin and fixed request parameters
//! - **Gallery**: Pagination and scroll-trigger tuning
//! - **Submission**: Attachment naming

// ==========================================================================
// Backend Defaults
// ==========================================================================

/// Default backend origin; endpoint paths are appended to it.
pub const DEFAULT_BASE_URL: &str = "http://dev3.xicomtechnologies.com/xttest";

/// User identifier sent with every listing request.
pub const DEFAULT_USER_ID: &str = "108";

/// Listing category sent as the `type` field.
pub const DEFAULT_CATEGORY: &str = "popular";

/// Request timeout applied by the HTTP gateway (seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Minimum accepted request timeout (seconds).
pub const MIN_TIMEOUT_SECS: u64 = 1;

/// Maximum accepted request timeout (seconds).
pub const MAX_TIMEOUT_SECS: u64 = 300;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Number of records the listing endpoint is expected to return per page.
/// A shorter page marks the end of the list.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Smallest page size worth configuring.
pub const MIN_PAGE_SIZE: usize = 1;

/// Largest page size worth configuring.
pub const MAX_PAGE_SIZE: usize = 200;

/// Fraction of the visible height from the end of the list at which the
/// next page is requested.
pub const END_REACHED_THRESHOLD: f32 = 0.5;

// ==========================================================================
// Submission Defaults
// ==========================================================================

/// Multipart field name of the uploaded image.
pub const ATTACHMENT_FIELD: &str = "user_image";

/// File name announced for the uploaded image.
pub const ATTACHMENT_FILENAME: &str = "profile.jpg";

/// Content type announced for the uploaded image.
pub const ATTACHMENT_MIME: &str = "image/jpeg";
