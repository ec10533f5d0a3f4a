use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::grid_size::GridSize;
use crate::core::data::intensity_matrix::IntensityMatrix;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

pub const MAX_INTENSITY: u32 = 255;

/// Brightness of a pixel that escaped after `escape` steps.
///
/// Normalized against `max_iteration`, not the frame's own cap: a pixel that
/// never escapes in a frame capped below `max_iteration` stays dimmer than
/// full brightness.
#[must_use]
pub fn escape_to_intensity(escape: u32, max_iteration: u32) -> f64 {
    let scaled = u64::from(escape) * u64::from(MAX_INTENSITY) / u64::from(max_iteration);

    (i64::from(MAX_INTENSITY) - scaled as i64) as f64
}

/// Samples `viewport` on `grid` and converts each escape count to an intensity.
///
/// `iteration` caps the escape search for this frame, `max_iteration` is the
/// normalization constant shared by every frame of an animation.
pub fn rasterize_frame(
    grid: GridSize,
    viewport: ComplexRect,
    iteration: u32,
    max_iteration: u32,
) -> Result<IntensityMatrix, MandelbrotError> {
    if max_iteration == 0 {
        return Err(MandelbrotError::ZeroMaxIterations);
    }
    if iteration > max_iteration {
        return Err(MandelbrotError::IterationExceedsMax {
            iteration,
            max_iteration,
        });
    }

    let algorithm = MandelbrotAlgorithm::new(grid, viewport, iteration)?;

    if grid.is_empty() {
        return Ok(IntensityMatrix::empty(grid));
    }

    let escapes = generate_fractal_rayon(grid, &algorithm)?;
    let cells = escapes
        .into_iter()
        .map(|escape| escape_to_intensity(escape, max_iteration))
        .collect();

    Ok(IntensityMatrix::from_data(grid, cells)?)
}
