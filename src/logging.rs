// SPDX-License-Identifier: MPL-2.0
//! Structured logging setup.
//!
//! Events go to stderr through a `tracing-subscriber` fmt layer. The filter is
//! taken from, in order: the `--log-level` CLI argument, `RUST_LOG`, then
//! [`DEFAULT_FILTER`].

use tracing_subscriber::EnvFilter;

/// Filter used when neither the CLI nor `RUST_LOG` specify one.
pub const DEFAULT_FILTER: &str = "info,gallery_submit=debug";

/// Builds the filter for the given CLI override.
fn build_filter(cli_level: Option<&str>) -> EnvFilter {
    if let Some(level) = cli_level {
        if let Ok(filter) = EnvFilter::try_new(level) {
            return filter;
        }
    }

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(cli_level: Option<&str>) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(build_filter(cli_level))
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("logging initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_level_takes_precedence() {
        let filter = build_filter(Some("warn"));
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn invalid_cli_level_falls_back() {
        // An unparsable directive must not panic; we get env or default instead.
        let _ = build_filter(Some("gallery_submit=[{"));
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(Some("error"));
        init(Some("error"));
    }
}
