//! CLI configuration
//!
//! Read from an optional TOML file and `REEL_`-prefixed environment
//! variables, e.g. `REEL_CATALOG_PATH=./videos.txt`.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File read when no explicit config path is given
pub const DEFAULT_CONFIG_FILE: &str = "reel.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReelConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub logging: LoggingSettings,

    #[serde(default)]
    pub prompt: PromptSettings,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// Catalog file; the builtin catalog is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingSettings {
    /// `tracing` filter directive, used when `RUST_LOG` is unset
    #[serde(default = "default_filter")]
    pub filter: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PromptSettings {
    #[serde(default = "default_symbol")]
    pub symbol: String,
}

impl ReelConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `reel.toml` in the working
    /// directory is read if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (prefixed with REEL_)
        settings = settings.add_source(
            config::Environment::with_prefix("REEL")
                .separator("_")
                .try_parsing(true),
        );

        let config = settings.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.catalog.path {
            if !path.is_file() {
                return Err(CliError::Config(format!(
                    "Catalog file not found at {:?}",
                    path
                )));
            }
        }

        if self.logging.filter.trim().is_empty() {
            return Err(CliError::Config(
                "Log filter must not be empty (set REEL_LOGGING_FILTER)".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_filter() -> String {
    "warn".to_string()
}

fn default_symbol() -> String {
    "> ".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
        }
    }
}
