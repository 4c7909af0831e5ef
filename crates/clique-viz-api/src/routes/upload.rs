//! Upload proxy.
//!
//! The multipart body is forwarded to the solver untouched, so the field
//! name (`graph`) and the file contents are whatever the browser sent.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::types::ApiState;

/// POST /upload - forward the graph file to the solver and relay its answer.
pub async fn upload_handler(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    if !content_type.starts_with("multipart/form-data") {
        let got = if content_type.is_empty() {
            "no content type".to_string()
        } else {
            content_type
        };
        return Err(ApiError::NotMultipart(got));
    }

    info!(bytes = body.len(), solver = %state.solver_url, "forwarding upload");

    let upstream = state
        .client
        .post(&state.solver_url)
        .header(reqwest::header::CONTENT_TYPE, content_type)
        .body(body)
        .send()
        .await?;

    let status =
        StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let upstream_type = upstream
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/json")
        .to_string();
    let answer = upstream.bytes().await?;

    debug!(status = status.as_u16(), bytes = answer.len(), "solver answered");
    Ok((status, [(header::CONTENT_TYPE, upstream_type)], answer).into_response())
}
