//! Runtime configuration.
//!
//! Settings are layered with `figment`, lowest precedence first: built-in
//! defaults, `$XDG_CONFIG_HOME/lisa/config.toml`, `./.lisa.toml`, then
//! `LISA_`-prefixed environment variables.

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides, e.g. `LISA_LOG_LEVEL`.
pub const ENV_PREFIX: &str = "LISA_";
/// Project-local configuration file, resolved against the working directory.
pub const LOCAL_CONFIG_FILE: &str = ".lisa.toml";
/// File name looked up under the XDG configuration directory.
pub const XDG_CONFIG_FILE: &str = "config.toml";

/// Output format for diagnostic logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Single-line human-readable records.
    #[default]
    Compact,
    /// Multi-line human-readable records.
    Pretty,
    /// Newline-delimited JSON records.
    Json,
}

/// Settings shared by every command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default `tracing` filter directive, e.g. `warn` or `lisa=debug`.
    pub log_level: String,
    /// Log record format.
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_owned(),
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Assemble the provider stack without extracting it.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = xdg_config_file() {
            figment = figment.merge(Toml::file(path));
        }
        figment
            .merge(Toml::file(LOCAL_CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load the layered configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is malformed or a value has
    /// the wrong type.
    pub fn load() -> Result<Self, Box<figment::Error>> {
        Self::figment().extract().map_err(Box::new)
    }
}

fn xdg_config_file() -> Option<PathBuf> {
    xdg::BaseDirectories::with_prefix(cli_defs::BIN_NAME).find_config_file(XDG_CONFIG_FILE)
}
