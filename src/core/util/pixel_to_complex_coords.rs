use thiserror::Error;

use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum PixelToComplexCoordsError {
    #[error(
        "point (x: {}, y: {}) is outside the {}x{} pixel grid",
        point.x, point.y, grid.width, grid.height
    )]
    PointOutsideGrid { point: Point, grid: GridSize },
}

/// Maps a pixel onto the viewport.
///
/// The grid's far edge is exclusive: pixel `width` would land on the
/// viewport's right border, so the last column samples one step short of it.
pub fn pixel_to_complex_coords(
    pixel: Point,
    grid: GridSize,
    viewport: ComplexRect,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !grid.contains_point(pixel) {
        return Err(PixelToComplexCoordsError::PointOutsideGrid { point: pixel, grid });
    }

    let real = viewport.top_left().real
        + viewport.width() * f64::from(pixel.x) / f64::from(grid.width);
    let imag = viewport.top_left().imag
        + viewport.height() * f64::from(pixel.y) / f64::from(grid.height);

    Ok(Complex { real, imag })
}
