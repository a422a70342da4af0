//! Configuration file
//!
//! ```json
//! { "model_path": "models/heloc_model.json",
//!   "http": { "host": "127.0.0.1", "port": 8501 } }
//! ```
//!
//! A relative `model_path` is resolved against the config file's directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::http_server::HttpServerConfig;

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Classifier artifact path (required)
    pub model_path: String,

    /// HTTP settings (optional)
    #[serde(default)]
    pub http: HttpServerConfig,

    /// Directory of the file this config was loaded from
    #[serde(skip)]
    base_dir: PathBuf,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config '{}': {}", path.display(), e))
        })?;

        let mut config = Self::from_json_str(&content)?;
        config.base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Ok(config)
    }

    /// Parse and validate configuration JSON
    pub fn from_json_str(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.model_path.trim().is_empty() {
            return Err(CliError::config_error("model_path must not be empty"));
        }

        self.http.validate().map_err(CliError::config_error)?;

        Ok(())
    }

    /// Artifact path, resolved against the config file's directory
    pub fn model_path(&self) -> PathBuf {
        let path = Path::new(&self.model_path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}
