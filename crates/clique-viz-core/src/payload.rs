//! The solver result as it comes back from `POST /upload`.

use serde::{Deserialize, Serialize};

use crate::error::VizResult;

/// Vertex identifier. Valid ids start at 1.
pub type VertexId = u32;

/// An undirected edge, serialized as a two-element array.
pub type Edge = (VertexId, VertexId);

/// JSON body returned by the solver.
///
/// Only `sat` is mandatory; missing lists are treated as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultPayload {
    /// Whether a clique of the requested size exists.
    pub sat: bool,
    /// Edges of the uploaded graph, in file order.
    #[serde(default)]
    pub edges: Vec<Edge>,
    /// Members of the clique found by the solver (empty when UNSAT).
    #[serde(default)]
    pub clique: Vec<VertexId>,
    /// Distinct vertices the server saw in the edge list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub points: Vec<VertexId>,
    /// Solver diagnostic, set when the solver failed or its output was unclear.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ResultPayload {
    /// Parse a response body.
    pub fn from_slice(body: &[u8]) -> VizResult<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// The line shown above the drawing: `Clique: 1 2 3` or `UNSAT`.
    pub fn answer_text(&self) -> String {
        if self.sat {
            let ids: Vec<String> = self.clique.iter().map(|v| v.to_string()).collect();
            format!("Clique: {}", ids.join(" "))
        } else {
            "UNSAT".to_string()
        }
    }

    /// Largest vertex id referenced by any edge, or `None` for an empty graph.
    pub fn max_vertex(&self) -> Option<VertexId> {
        max_vertex(&self.edges)
    }
}

/// Largest vertex id referenced by `edges`.
pub fn max_vertex(edges: &[Edge]) -> Option<VertexId> {
    edges.iter().map(|&(u, v)| u.max(v)).max()
}
