use std::time::Duration;

use image::{Rgba, RgbaImage};

use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::frame::Frame;
use crate::core::data::intensity_matrix::IntensityMatrix;

/// Scales intensities onto [0, 1] against the matrix's own range.
///
/// A flat matrix has no range to spread, so every cell lands on the ramp start.
#[derive(Debug, Copy, Clone, PartialEq)]
struct AutoScale {
    min: f64,
    span: f64,
}

impl AutoScale {
    fn for_matrix(matrix: &IntensityMatrix) -> Self {
        let (min, max) = matrix.range().unwrap_or((0.0, 0.0));

        Self {
            min,
            span: max - min,
        }
    }

    fn normalize(&self, value: f64) -> f64 {
        if self.span > 0.0 {
            (value - self.min) / self.span
        } else {
            0.0
        }
    }
}

/// Paints an intensity matrix through `colour_map` onto a transparent canvas.
///
/// The frame has the matrix's pixel dimensions and no display delay yet; the
/// caller decides how long it stays on screen.
pub fn render_frame<CMap: ColourMap + ?Sized>(matrix: &IntensityMatrix, colour_map: &CMap) -> Frame {
    let mut canvas = RgbaImage::from_pixel(matrix.width(), matrix.height(), Rgba([0, 0, 0, 0]));
    let scale = AutoScale::for_matrix(matrix);

    for (y, row) in matrix.rows().enumerate() {
        for (x, &value) in row.iter().enumerate() {
            let colour = colour_map.map(scale.normalize(value));
            canvas.put_pixel(x as u32, y as u32, Rgba(colour.to_rgba()));
        }
    }

    Frame::new(canvas, Duration::ZERO)
}
