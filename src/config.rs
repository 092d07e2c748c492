//! Configuration handling for the TUI

use crate::state::{LabelStyle, DEFAULT_OPTION_BINDINGS};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default prediction service address
const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Environment variable overriding the service address
pub const API_URL_ENV: &str = "AUTOVALUATE_API_URL";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Prediction service address
    pub api_base_url: Option<String>,
    /// How option labels are displayed
    pub label_style: Option<LabelStyle>,
    /// Restore the last form values on startup
    pub restore_form_state: Option<bool>,
    /// Confidence shown next to a prediction
    pub confidence_percent: Option<f64>,
    /// HTTP request timeout
    pub request_timeout_secs: Option<u64>,
    /// Option key served by the API to form field name
    pub option_bindings: Option<BTreeMap<String, String>>,
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "autovaluate", "autovaluate-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`; a missing file yields the defaults
    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Service address: environment, then config file, then the default
    pub fn api_base_url(&self) -> String {
        self.resolve_api_base_url(std::env::var(API_URL_ENV).ok())
    }

    fn resolve_api_base_url(&self, from_env: Option<String>) -> String {
        from_env
            .filter(|url| !url.trim().is_empty())
            .or_else(|| self.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    pub fn label_style(&self) -> LabelStyle {
        self.label_style.unwrap_or_default()
    }

    pub fn restore_form_state(&self) -> bool {
        self.restore_form_state.unwrap_or(true)
    }

    pub fn confidence_percent(&self) -> f64 {
        self.confidence_percent.unwrap_or(93.0)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(10))
    }

    /// (option key, field name) pairs used to populate choice fields
    pub fn option_bindings(&self) -> Vec<(String, String)> {
        match &self.option_bindings {
            Some(bindings) => bindings
                .iter()
                .map(|(key, field)| (key.clone(), field.clone()))
                .collect(),
            None => DEFAULT_OPTION_BINDINGS
                .iter()
                .map(|(key, field)| (key.to_string(), field.to_string()))
                .collect(),
        }
    }
}
