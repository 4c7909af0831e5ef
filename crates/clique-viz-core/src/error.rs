//! Error types for the core layer.

use thiserror::Error;

/// Result type for core operations.
pub type VizResult<T> = Result<T, VizError>;

/// Errors that can occur while handling an upload round-trip.
#[derive(Debug, Error)]
pub enum VizError {
    /// The server answered with something that is not a result payload.
    #[error("Invalid result payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// The request never produced a response body.
    #[error("Upload failed: {0}")]
    Transport(String),

    /// The largest vertex id is too big to lay out.
    #[error("Vertex id {max_id} exceeds the drawable limit of {limit} vertices")]
    TooManyVertices { max_id: u32, limit: u32 },

    /// IO error while reading the graph file or writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VizError {
    /// Create a transport error from anything printable.
    pub fn transport(reason: impl Into<String>) -> Self {
        Self::Transport(reason.into())
    }
}
