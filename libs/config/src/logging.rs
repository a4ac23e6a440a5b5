//! Tracing subscriber setup
//!
//! The store crates only emit `tracing` events; binaries and tests call
//! [`init_tracing`] once to see them.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::settings::LoggingSettings;

/// Install a global `fmt` subscriber
///
/// `RUST_LOG` takes precedence over the configured level. Returns `false`
/// when a global subscriber was already installed, leaving it in place.
pub fn init_tracing(settings: &LoggingSettings) -> Result<bool> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.level)
            .with_context(|| format!("Invalid log level directive {:?}", settings.level))?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if settings.json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    };

    if installed {
        tracing::debug!(level = %settings.level, json = settings.json, "tracing initialized");
    }
    Ok(installed)
}
