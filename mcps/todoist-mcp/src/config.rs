//! Configuration loading for todoist-mcp
//!
//! Configuration is loaded from:
//! 1. Environment variable TODOIST_API_URL (overrides `api_url`)
//! 2. The file named by TODOIST_MCP_CONFIG_PATH
//! 3. ~/.todoist-mcp/config.toml
//! 4. Default values
//!
//! The API token is never read from a file; it comes from TODOIST_TOKEN
//! when the client is first needed (see [`crate::provider`]).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable holding the Todoist API token
pub const TOKEN_ENV: &str = "TODOIST_TOKEN";

const API_URL_ENV: &str = "TODOIST_API_URL";
const CONFIG_PATH_ENV: &str = "TODOIST_MCP_CONFIG_PATH";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub todoist: TodoistConfig,
}

/// Settings for the Todoist HTTP client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoistConfig {
    /// Base URL of the REST API
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Per-request timeout; unset leaves requests unbounded
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_api_url() -> String {
    "https://api.todoist.com/api/v1".to_string()
}

fn default_user_agent() -> String {
    concat!("todoist-mcp/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for TodoistConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            user_agent: default_user_agent(),
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults, then apply env overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::find_config_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            Some(path) => {
                tracing::info!("Config file {} not found, using defaults", path.display());
                Self::default()
            }
            None => {
                tracing::info!("No config path specified, using defaults");
                Self::default()
            }
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                config.todoist.api_url = url;
            }
        }

        Ok(config)
    }

    /// Parse a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::info!("Loading config from: {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("invalid config in {}", path.display()))
    }

    fn find_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }

        std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".todoist-mcp").join("config.toml"))
    }
}
