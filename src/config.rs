//! Configuration management for Punchcard
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{PunchcardError, Result};

/// Main configuration structure for Punchcard
///
/// Precedence from lowest to highest: built-in defaults, config file,
/// `PUNCHCARD_*` environment variables, CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Remote API settings
    #[serde(default)]
    pub api: ApiConfig,
}

/// Remote API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the task tracker server
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration with environment and CLI overrides
    ///
    /// # Arguments
    ///
    /// * `path` - Explicit config file path; when `None`, the platform
    ///   config directory is consulted
    /// * `cli` - CLI arguments for overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed
    pub fn load(path: Option<&Path>, cli: &crate::cli::Cli) -> Result<Self> {
        let resolved = path.map(PathBuf::from).or_else(Self::default_config_path);

        let mut config = match resolved {
            Some(ref p) if p.exists() => Self::from_file(p)?,
            Some(ref p) => {
                tracing::debug!("Config file not found at {}, using defaults", p.display());
                Self::default()
            }
            None => {
                tracing::warn!("Could not determine config directory, using defaults");
                Self::default()
            }
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    /// Platform config file location, e.g. `~/.config/punchcard/config.yaml`
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "punchcard")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| PunchcardError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| PunchcardError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        if let Ok(base_url) = std::env::var("PUNCHCARD_API_URL") {
            self.api.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("PUNCHCARD_TIMEOUT_SECONDS") {
            if let Ok(value) = timeout.parse() {
                self.api.timeout_seconds = value;
            } else {
                tracing::warn!("Invalid PUNCHCARD_TIMEOUT_SECONDS: {}", timeout);
            }
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if let Some(api_url) = &cli.api_url {
            self.api.base_url = api_url.clone();
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL does not parse or the timeout is
    /// zero
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.api.base_url).map_err(|e| {
            PunchcardError::Config(format!("Invalid API base URL '{}': {}", self.api.base_url, e))
        })?;

        if self.api.timeout_seconds == 0 {
            return Err(
                PunchcardError::Config("timeout_seconds must be greater than zero".to_string())
                    .into(),
            );
        }

        Ok(())
    }
}
