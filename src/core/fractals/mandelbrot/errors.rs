use thiserror::Error;

use crate::core::data::intensity_matrix::IntensityMatrixError;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MandelbrotError {
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,

    #[error("frame iteration cap must be greater than zero")]
    ZeroIterations,

    #[error("frame iteration cap {iteration} exceeds maximum {max_iteration}")]
    IterationExceedsMax { iteration: u32, max_iteration: u32 },

    #[error(transparent)]
    PixelToComplexCoords(#[from] PixelToComplexCoordsError),

    #[error(transparent)]
    IntensityMatrix(#[from] IntensityMatrixError),
}
