use std::path::PathBuf;

use thiserror::Error;

use crate::core::explanations::errors::ExplanationError;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::palettes::errors::InvalidPaletteError;
use crate::storage::errors::StorageError;

#[derive(Debug, Error)]
pub enum AnimationError {
    #[error(transparent)]
    InvalidPalette(#[from] InvalidPaletteError),

    #[error("no frames to encode: the schedule starts at {start}, above max_iterations {max_iterations}")]
    EmptyAnimation { start: u32, max_iterations: u32 },

    #[error("source animation '{}' has no frames", path.display())]
    SourceAnimationEmpty { path: PathBuf },

    #[error(transparent)]
    Mandelbrot(#[from] MandelbrotError),

    #[error(transparent)]
    Explanation(ExplanationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<ExplanationError> for AnimationError {
    fn from(err: ExplanationError) -> Self {
        match err {
            ExplanationError::SourceAnimationEmpty { path } => Self::SourceAnimationEmpty { path },
            ExplanationError::Storage(err) => Self::Storage(err),
            other => Self::Explanation(other),
        }
    }
}
