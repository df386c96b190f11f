//! Configuration handling for the widget host

use crate::api::API_URL_ENV;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the widget host
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WidgetConfig {
    /// Base URL of the feedback service; the simulated backend is used when unset
    pub api_url: Option<String>,
    /// Directory holding persisted drafts
    pub data_dir: Option<PathBuf>,
    /// Storage key of the draft
    pub draft_key: Option<String>,
    /// Log file location
    pub log_file: Option<PathBuf>,
}

impl WidgetConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "feedback", "feedback-widget")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                serde_json::from_str(&content)?
            }
            _ => Self::default(),
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                config.api_url = Some(url);
            }
        }

        Ok(config)
    }

    /// Where drafts live: explicit setting, else the platform data directory
    pub fn resolved_data_dir(&self) -> Option<PathBuf> {
        self.data_dir
            .clone()
            .or_else(|| Self::project_dirs().map(|dirs| dirs.data_dir().to_path_buf()))
    }

    pub fn resolved_log_file(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            self.resolved_data_dir()
                .map(|dir| dir.join("feedback-widget.log"))
        })
    }
}
