// SPDX-License-Identifier: MPL-2.0
//! `gallery_submit` is a desktop client for a small image backend built with
//! the Iced GUI framework.
//!
//! It browses a paginated remote gallery and lets the user send their contact
//! details together with a selected image. The core pieces are usable on
//! their own:
//!
//! - [`gallery`] - pagination state machine and listing decoding
//! - [`submission`] - form validation and multipart submission
//! - [`api`] - the HTTP gateway both of them talk through

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod logging;
pub mod submission;
pub mod ui;
