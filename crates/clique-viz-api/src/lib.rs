//! HTTP service for clique-viz.
//!
//! Serves the browser front end and forwards graph uploads to the external
//! k-clique solver. The solver is the only thing that reads the graph file;
//! this service just moves bytes.
//!
//! ## Endpoints
//!
//! - `GET /` - HTML shell with the upload and result panels
//! - `GET /pkg/*` - WASM bundle built from `clique-viz-web`
//! - `POST /upload` - multipart upload, forwarded to the solver
//! - `GET /health` - health check with the configured solver URL
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clique_viz_api::{create_api_router, create_api_state, ApiConfig};
//!
//! let config = ApiConfig::new("http://127.0.0.1:5000/upload");
//! let state = create_api_state(&config);
//! let router = create_api_router(state, &config);
//! ```

mod error;
mod routes;
mod types;

pub use error::ApiError;
pub use routes::create_api_router;
pub use types::{ApiConfig, ApiResponse, ApiState, ErrorBody, HealthResponse};

use std::sync::Arc;

/// Create the shared state for `config`.
pub fn create_api_state(config: &ApiConfig) -> Arc<ApiState> {
    Arc::new(ApiState {
        solver_url: config.solver_url.clone(),
        client: reqwest::Client::new(),
    })
}
