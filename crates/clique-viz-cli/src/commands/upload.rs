//! Upload command implementation.
//!
//! Sends a graph file to a running front end (or straight to the solver)
//! the same way the browser does, then prints the answer.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clique_viz_core::{SelectedFile, UploadController, UploadRequest};
use reqwest::multipart::{Form, Part};
use tracing::debug;

/// POST `file` to `{server}/upload` and show the result.
pub async fn execute(server: &str, file: &Path, output: Option<PathBuf>) -> Result<()> {
    let selected = SelectedFile::read(file)
        .with_context(|| format!("Failed to read graph file {}", file.display()))?;

    let mut controller = UploadController::new();
    let Some(request) = controller.trigger(Some(selected)) else {
        bail!("Upload could not be started");
    };

    let body = match send(server, request).await {
        Ok(body) => body,
        Err(e) => {
            controller.fail(&e.to_string());
            return Err(e);
        }
    };

    let view = controller
        .complete(&body)
        .with_context(|| format!("Server at {} did not return a result", server))?;

    if let Some(message) = view.message() {
        eprintln!("⚠️  {}", message);
    }
    if let Some(answer) = view.answer() {
        println!("{}", answer);
    }

    if let (Some(path), Some(svg)) = (output, view.to_svg()) {
        std::fs::write(&path, svg)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        eprintln!("💾 Saved to {}", path.display());
    }
    Ok(())
}

async fn send(server: &str, request: UploadRequest) -> Result<Vec<u8>> {
    let url = format!("{}{}", server.trim_end_matches('/'), request.endpoint);
    let part = Part::bytes(request.file.bytes)
        .file_name(request.file.name)
        .mime_str("text/plain")?;
    let form = Form::new().part(request.field, part);

    debug!(%url, "uploading");
    let resp = reqwest::Client::new()
        .post(&url)
        .multipart(form)
        .send()
        .await
        .with_context(|| format!("Failed to reach {}", url))?;

    let status = resp.status();
    if !status.is_success() {
        debug!(status = status.as_u16(), "server answered with an error status");
    }
    Ok(resp.bytes().await?.to_vec())
}
