//! API types and DTOs.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// How the service is wired up.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Full URL of the solver's upload endpoint.
    pub solver_url: String,
    /// Directory holding the `wasm-bindgen` output for `clique-viz-web`.
    pub assets_dir: Option<PathBuf>,
}

impl ApiConfig {
    pub fn new(solver_url: impl Into<String>) -> Self {
        Self {
            solver_url: solver_url.into(),
            assets_dir: None,
        }
    }

    pub fn with_assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = Some(dir.into());
        self
    }
}

/// Shared application state for the API.
pub struct ApiState {
    /// Where uploads are forwarded.
    pub solver_url: String,
    /// HTTP client reused across uploads.
    pub client: reqwest::Client,
}

/// Response wrapper with timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response data.
    pub data: T,
    /// Unix timestamp in milliseconds.
    pub timestamp: u64,
}

impl<T> ApiResponse<T> {
    /// Create a new API response with current timestamp.
    pub fn new(data: T) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Self { data, timestamp }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Configured solver endpoint.
    pub solver: String,
}

/// Error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
