//! Shell configuration with JSON overrides.
//!
//! Defaults cover everything; a config file is optional and only
//! overrides the fields it names.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::types::errors::ConfigError;

/// Initial window geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            x: 100.0,
            y: 100.0,
        }
    }
}

/// Top-level shell configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Homepage document, resolved relative to the working directory.
    pub homepage_file: PathBuf,
    /// Fixed destination for newly opened non-home tabs.
    pub new_tab_url: String,
    pub window_title: String,
    pub window: WindowConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            homepage_file: PathBuf::from("homepage.html"),
            new_tab_url: "https://duckduckgo.com".to_string(),
            window_title: "TabShell".to_string(),
            window: WindowConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration. `None` or a missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        serde_json::from_str(&raw).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Resolve the homepage document to an absolute file URL.
    ///
    /// The file is not required to exist; a missing document is surfaced
    /// by the engine's own error page.
    pub fn homepage_url(&self) -> Result<String, ConfigError> {
        let abs = std::path::absolute(&self.homepage_file)
            .map_err(|e| ConfigError::HomepagePath(e.to_string()))?;
        Url::from_file_path(&abs)
            .map(String::from)
            .map_err(|_| ConfigError::HomepagePath(abs.display().to_string()))
    }
}
