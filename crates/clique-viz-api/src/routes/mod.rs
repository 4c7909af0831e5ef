//! API route handlers.

mod health;
mod shell;
mod upload;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::types::{ApiConfig, ApiState};

/// Create the router with all endpoints.
pub fn create_api_router(state: Arc<ApiState>, config: &ApiConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        // Front end
        .route("/", get(shell::index_handler))
        // Upload proxy. Graph files are passed through whole, whatever their size.
        .route(
            "/upload",
            post(upload::upload_handler).layer(DefaultBodyLimit::disable()),
        )
        // Health
        .route("/health", get(health::health_handler));

    if let Some(dir) = &config.assets_dir {
        router = router.nest_service("/pkg", ServeDir::new(dir));
    }

    router
        // Request tracing (enable with RUST_LOG=tower_http=info or higher)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}
