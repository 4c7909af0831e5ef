//! CLI configuration management.
//!
//! Supports loading configuration from environment variables, config files,
//! and CLI arguments with proper precedence.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "CLIQUEVIZ_CONFIG";

/// Application-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of a running `cliqueviz serve` (used by `upload`).
    pub server_url: String,

    /// Solver endpoint that `serve` forwards uploads to.
    pub solver_url: String,

    /// Port `serve` listens on.
    pub port: u16,

    /// Directory with the `wasm-bindgen` output of the web front end.
    pub assets_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8080".to_string(),
            solver_url: "http://127.0.0.1:5000/upload".to_string(),
            port: 8080,
            assets_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from the config file, then environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present (silently ignore if missing)
        let _ = dotenvy::dotenv();

        let mut config = match Self::config_file_path() {
            Some(path) if path.exists() => {
                let contents = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config from {}", path.display()))?;
                serde_json::from_str(&contents).with_context(|| "Failed to parse config file")?
            }
            _ => Self::default(),
        };

        // Environment takes precedence over the file
        if let Ok(url) = std::env::var("CLIQUEVIZ_SERVER_URL") {
            config.server_url = url;
        }
        if let Ok(url) = std::env::var("CLIQUEVIZ_SOLVER_URL") {
            config.solver_url = url;
        }
        if let Ok(port) = std::env::var("CLIQUEVIZ_PORT") {
            config.port = port
                .parse()
                .with_context(|| format!("Invalid CLIQUEVIZ_PORT: {}", port))?;
        }
        if let Ok(dir) = std::env::var("CLIQUEVIZ_ASSETS_DIR") {
            config.assets_dir = Some(PathBuf::from(dir));
        }

        Ok(config)
    }

    /// Save current configuration to the config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(Self::config_file_path().as_deref())
    }

    fn save_to(&self, config_path: Option<&Path>) -> Result<()> {
        let Some(config_path) = config_path else {
            anyhow::bail!("No config file path available; set {}", CONFIG_PATH_ENV);
        };
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
        Ok(())
    }

    /// Get the path to the config file.
    pub fn config_file_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("dev", "clique-viz", "cliqueviz")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }
}
