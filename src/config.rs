//! Application configuration
//!
//! Defaults for the canvas size and paint character, read from
//! `config.toml` in the platform config directory (or any TOML/JSON file
//! passed explicitly).

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::canvas::DEFAULT_PAINT;
use crate::errors::{GridpaintError, Result};

/// Canvas defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Canvas width in columns
    pub width: usize,

    /// Canvas height in rows
    pub height: usize,

    /// Paint character for shapes that do not set one
    pub paint: char,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 40,
            paint: DEFAULT_PAINT,
        }
    }
}

impl AppConfig {
    /// Configuration directory
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "gridpaint", "gridpaint")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Default config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }
}

/// Load configuration.
///
/// With an explicit path the file must exist. Without one, the default
/// location is tried and a missing file yields the defaults.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let path = match path {
        Some(path) => {
            if !path.exists() {
                return Err(GridpaintError::ConfigurationError(format!(
                    "Config file {} does not exist",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => match AppConfig::config_path() {
            Some(path) if path.exists() => path,
            Some(path) => {
                tracing::debug!("No config at {}, using defaults", path.display());
                return Ok(AppConfig::default());
            }
            None => {
                tracing::warn!("Could not determine config path, using defaults");
                return Ok(AppConfig::default());
            }
        },
    };

    tracing::info!("Loading config from {}", path.display());
    let content = fs::read_to_string(&path)
        .map_err(|e| GridpaintError::ConfigurationError(format!("Failed to read config: {e}")))?;

    let config: AppConfig = if path.extension().is_some_and(|e| e == "json") {
        serde_json::from_str(&content)
            .map_err(|e| GridpaintError::ConfigurationError(format!("Invalid JSON config: {e}")))?
    } else {
        toml::from_str(&content)
            .map_err(|e| GridpaintError::ConfigurationError(format!("Invalid TOML config: {e}")))?
    };

    if config.width == 0 || config.height == 0 {
        return Err(GridpaintError::ConfigurationError(format!(
            "Canvas size {}x{} in {} must be positive",
            config.width,
            config.height,
            path.display()
        )));
    }

    Ok(config)
}
