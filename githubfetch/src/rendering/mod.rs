// ABOUTME: Avatar rendering for terminals with and without inline image support
// ABOUTME: Defines the visual slot handed to the layout and the best-effort combinator

use std::future::Future;
use thiserror::Error;

pub mod acquire;
pub mod detection;
pub mod glyph;
pub mod inline;

pub use acquire::{AcquireError, ImageAcquirer};
pub use detection::{TerminalMode, detect_mode};
pub use glyph::{GlyphArtRenderer, GlyphCell, GlyphGrid};
pub use inline::{InlineImageRenderer, StagedImage};

/// Whatever occupies the left column of the layout
#[derive(Debug, Clone, PartialEq)]
pub enum RenderableVisual {
    /// Nothing could be rendered
    Empty,
    /// Character-grid approximation of the avatar
    GlyphArt(GlyphGrid),
    /// The avatar was drawn outside the output buffer by the image helper;
    /// the column is reserved but holds no text
    InlinePlaceholder,
}

impl RenderableVisual {
    pub fn is_empty(&self) -> bool {
        matches!(self, RenderableVisual::Empty)
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Acquire(#[from] AcquireError),

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Image has no pixels")]
    EmptyImage,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image helper exited with status {}", exit_code_label(.0))]
    HelperExit(Option<i32>),

    #[error("Interrupted while the image helper was running")]
    Interrupted,
}

fn exit_code_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        // Terminated by a signal
        None => "unknown".to_string(),
    }
}

/// Run a rendering attempt and turn any failure into an empty visual.
///
/// Avatar rendering never fails the command; the error is only visible with
/// debug logging enabled. A user interrupt is the exception and is handed
/// back so the command can stop.
pub async fn best_effort<F>(label: &str, attempt: F) -> Result<RenderableVisual, RenderError>
where
    F: Future<Output = Result<RenderableVisual, RenderError>>,
{
    match attempt.await {
        Ok(visual) => Ok(visual),
        Err(RenderError::Interrupted) => Err(RenderError::Interrupted),
        Err(e) => {
            log::debug!("{} rendering failed: {}", label, e);
            Ok(RenderableVisual::Empty)
        }
    }
}
