// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Every failure that can reach the user (network, disk, configuration)
//! ends up here. The UI never distinguishes causes: it only shows the
//! notification key returned by [`Error::i18n_key`].

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The request never completed (DNS, connection refused, timeout...).
    #[error("HTTP Error: {0}")]
    Http(String),

    /// The server answered with a non-success status code.
    #[error("HTTP Status: {0}")]
    Status(u16),

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),
}

impl Error {
    /// Returns the i18n message key used when this error is shown to the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Http(_) | Error::Status(_) => "notification-network-error",
            Error::Io(_) => "notification-io-error",
            Error::Config(_) => "notification-config-load-error",
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Error::Status(status.as_u16()),
            None => Error::Http(err.to_string()),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_status_error() {
        let err = Error::Status(503);
        assert_eq!(format!("{err}"), "HTTP Status: 503");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn transport_and_status_share_one_notification() {
        assert_eq!(
            Error::Http("timeout".into()).i18n_key(),
            Error::Status(500).i18n_key()
        );
        assert_eq!(Error::Status(404).i18n_key(), "notification-network-error");
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{err}"), "Config Error: bad field");
    }
}
