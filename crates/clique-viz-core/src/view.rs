//! The two mutually exclusive states of the result view.

use crate::error::VizResult;
use crate::payload::ResultPayload;
use crate::scene::Scene;

/// What the page currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    /// Upload form visible, result panel hidden.
    #[default]
    Upload,
    /// Result panel visible, upload form hidden.
    Result {
        /// `Clique: ...` or `UNSAT`.
        answer: String,
        /// The drawing.
        scene: Scene,
        /// Solver diagnostic, if the server sent one.
        message: Option<String>,
    },
}

impl ViewState {
    /// Transition to the result view for `payload`.
    pub fn show(payload: &ResultPayload) -> VizResult<Self> {
        Ok(Self::Result {
            answer: payload.answer_text(),
            scene: Scene::from_payload(payload)?,
            message: payload.message.clone(),
        })
    }

    /// Back to the upload form.
    pub fn reset(&mut self) {
        *self = Self::Upload;
    }

    pub fn is_upload(&self) -> bool {
        matches!(self, Self::Upload)
    }

    pub fn is_result(&self) -> bool {
        matches!(self, Self::Result { .. })
    }

    /// Answer line, only set in the result view.
    pub fn answer(&self) -> Option<&str> {
        match self {
            Self::Result { answer, .. } => Some(answer),
            Self::Upload => None,
        }
    }

    /// Solver diagnostic attached to the result, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Result { message, .. } => message.as_deref(),
            Self::Upload => None,
        }
    }

    /// The result view as a standalone SVG document.
    pub fn to_svg(&self) -> Option<String> {
        match self {
            Self::Result { answer, scene, .. } => Some(scene.to_svg_with_answer(answer)),
            Self::Upload => None,
        }
    }

    /// Scene to draw, only set in the result view.
    pub fn scene(&self) -> Option<&Scene> {
        match self {
            Self::Result { scene, .. } => Some(scene),
            Self::Upload => None,
        }
    }
}
