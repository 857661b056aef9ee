//! Diagnostic logging.
//!
//! Records go to stderr so stdout stays reserved for command output. The
//! filter comes from `LISA_LOG` when it holds a valid directive, otherwise
//! from the configured `log_level`.

use std::{env, io};

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{AppConfig, LogFormat};

/// Environment variable holding a `tracing` filter directive override.
pub const FILTER_ENV: &str = "LISA_LOG";

/// Install the global subscriber described by `config`.
///
/// Returns `false` when a subscriber was already installed, in which case
/// the existing one is left in place.
#[must_use]
pub fn init(config: &AppConfig) -> bool {
    let directive = env::var(FILTER_ENV).ok();
    let builder = fmt()
        .with_env_filter(select_filter(directive.as_deref(), &config.log_level))
        .with_writer(io::stderr)
        .with_target(true);
    let installed = match config.log_format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.is_ok()
}

fn select_filter(directive: Option<&str>, fallback: &str) -> EnvFilter {
    directive
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback))
}
