//! Core types shared across the clique-viz workspace.
//!
//! Nothing in here touches the network or the DOM:
//!
//! - [`payload`] - the solver's JSON result and the answer line
//! - [`layout`] - circular vertex placement
//! - [`scene`] - drawing primitives and their SVG serialization
//! - [`view`] - the two-state result view
//! - [`upload`] - the sans-IO upload controller that drives the view
//!
//! The browser front end and the CLI both drive the same [`UploadController`],
//! so the behavior is identical whichever way the file reaches the solver.

pub mod error;
pub mod layout;
pub mod payload;
pub mod scene;
pub mod upload;
pub mod view;

pub use error::{VizError, VizResult};
pub use layout::{CircularLayout, LayoutParams, Point};
pub use payload::{Edge, ResultPayload, VertexId};
pub use scene::{render_svg, EdgeLine, Scene, VertexGlyph};
pub use upload::{SelectedFile, UploadController, UploadRequest, UPLOAD_ENDPOINT, UPLOAD_FIELD};
pub use view::ViewState;
