//! Browser front end for clique-viz.
//!
//! Loaded by the HTML shell served from `clique-viz-api`. It fills the upload
//! panel, posts the picked graph file to `/upload`, and draws the returned
//! result into the `<svg id="viz">` canvas.
//!
//! Only [`markup`] is available outside `wasm32`.

pub mod markup;

#[cfg(target_arch = "wasm32")]
mod api;
#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use app::App;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Start the front end in WASM context.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    // Better panic messages in the browser console
    console_error_panic_hook::set_once();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    App::mount(document)?;
    Ok(())
}
