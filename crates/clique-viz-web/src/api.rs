//! HTTP upload for WASM.
//!
//! Uses gloo-net to POST the picked file as multipart form data.

use clique_viz_core::UploadRequest;
use gloo_net::http::Request;
use web_sys::{File, FormData};

/// Send `request` and return the raw response body.
///
/// Non-2xx answers are still returned as bodies: the solver reports its own
/// failures as JSON and the controller decides whether they parse.
pub async fn upload(request: &UploadRequest<File>) -> Result<Vec<u8>, String> {
    let form = FormData::new().map_err(|e| format!("FormData unavailable: {:?}", e))?;
    form.set_with_blob_and_filename(request.field, &request.file, &request.file.name())
        .map_err(|e| format!("Could not attach file: {:?}", e))?;

    let resp = Request::post(request.endpoint)
        .body(form)
        .map_err(|e| format!("Request error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !resp.ok() {
        web_sys::console::warn_1(
            &format!("HTTP {}: {}", resp.status(), resp.status_text()).into(),
        );
    }

    resp.binary()
        .await
        .map_err(|e| format!("Body read error: {}", e))
}
