//! Upload controller.
//!
//! The controller does no IO. Its driver asks it for an [`UploadRequest`]
//! when the trigger fires, performs the POST however it can (`gloo-net` in
//! the browser, `reqwest` in the CLI) and hands the response body back.
//! Only one request may be in flight at a time.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::VizResult;
use crate::payload::ResultPayload;
use crate::view::ViewState;

/// Endpoint the graph file is POSTed to.
pub const UPLOAD_ENDPOINT: &str = "/upload";

/// Multipart field carrying the graph file.
pub const UPLOAD_FIELD: &str = "graph";

/// A graph file picked by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Read a graph file from disk.
    pub fn read(path: &Path) -> VizResult<Self> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "graph.txt".to_string());
        Ok(Self { name, bytes })
    }
}

/// One upload to issue: `POST {endpoint}` with `file` under `field`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest<F = SelectedFile> {
    pub endpoint: &'static str,
    pub field: &'static str,
    pub file: F,
}

/// Drives the view from trigger to rendered result.
#[derive(Debug, Default)]
pub struct UploadController {
    view: ViewState,
    in_flight: bool,
}

impl UploadController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// The trigger fired with `selected` in the file picker.
    ///
    /// Returns the request to send, or `None` when there is nothing to do:
    /// no file picked, or a previous request still pending.
    pub fn trigger<F>(&mut self, selected: Option<F>) -> Option<UploadRequest<F>> {
        let file = selected?;
        if self.in_flight {
            debug!("upload already in flight, ignoring trigger");
            return None;
        }
        self.in_flight = true;
        Some(UploadRequest {
            endpoint: UPLOAD_ENDPOINT,
            field: UPLOAD_FIELD,
            file,
        })
    }

    /// The pending request answered with `body`.
    ///
    /// On a malformed body the view is left as it was.
    pub fn complete(&mut self, body: &[u8]) -> VizResult<&ViewState> {
        self.in_flight = false;
        let payload = ResultPayload::from_slice(body)?;
        self.show(&payload)
    }

    /// Render an already decoded payload.
    ///
    /// A payload that cannot be drawn leaves the view as it was.
    pub fn show(&mut self, payload: &ResultPayload) -> VizResult<&ViewState> {
        self.in_flight = false;
        if let Some(message) = &payload.message {
            warn!(message = %message, "solver reported a problem");
        }
        self.view = ViewState::show(payload)?;
        info!(sat = payload.sat, edges = payload.edges.len(), "result_shown");
        Ok(&self.view)
    }

    /// The pending request failed before producing a body.
    pub fn fail(&mut self, reason: &str) {
        self.in_flight = false;
        warn!(reason, "upload failed");
    }

    /// Discard everything and go back to the upload form.
    pub fn reset(&mut self) {
        self.in_flight = false;
        self.view.reset();
    }
}
