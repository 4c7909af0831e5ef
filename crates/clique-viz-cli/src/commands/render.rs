//! Render command implementation.
//!
//! Draws a saved solver result without talking to any server.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clique_viz_core::{render_svg, ResultPayload};
use tracing::info;

/// Render `payload_path` to SVG, written to `output` or stdout.
pub fn execute(payload_path: &Path, output: Option<PathBuf>) -> Result<()> {
    let body = std::fs::read(payload_path)
        .with_context(|| format!("Failed to read {}", payload_path.display()))?;
    let payload = ResultPayload::from_slice(&body)
        .with_context(|| format!("Failed to parse {}", payload_path.display()))?;

    let svg = render_svg(&payload)
        .with_context(|| format!("Failed to render {}", payload_path.display()))?;
    info!(sat = payload.sat, edges = payload.edges.len(), "rendered");

    match output {
        Some(path) => {
            std::fs::write(&path, svg)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("{}", payload.answer_text());
            eprintln!("💾 Saved to {}", path.display());
        }
        None => print!("{}", svg),
    }
    Ok(())
}
