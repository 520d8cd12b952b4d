// SPDX-License-Identifier: MPL-2.0
//! Backend endpoint paths, relative to the configured origin.

/// Paginated image listing. Fields: `user_id`, `offset`, `type`.
pub const LISTING_PATH: &str = "/getdata.php";

/// Contact submission. Fields: `first_name`, `last_name`, `email`, `phone`,
/// plus the `user_image` attachment.
pub const SUBMISSION_PATH: &str = "/savedata.php";
