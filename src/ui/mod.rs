// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Screens follow the Elm-style "state down, messages up" pattern: each one
//! exposes a `Message` enum for its widgets and an `Event` enum for what the
//! application has to act on.
//!
//! # Screens
//!
//! - [`gallery`] - Paginated image grid
//! - [`detail`] - Selected image with the contact form
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod detail;
pub mod gallery;
pub mod notifications;
pub mod theming;
