use serde::Deserialize;
use thiserror::Error;

use crate::core::data::complex::Complex;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ComplexRectError {
    #[error("complex rect size must be positive: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
}

/// Region of the complex plane sampled by a pixel grid.
///
/// `top_left` holds the minimum real and imaginary parts, so image row 0 maps
/// to the lowest imaginary value.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawComplexRect")]
pub struct ComplexRect {
    top_left: Complex,
    bottom_right: Complex,
}

/// The classic full-set view: re in [-2, 0.5], im in [-1.25, 1.25].
pub const MANDELBROT_VIEWPORT: ComplexRect = ComplexRect {
    top_left: Complex::new(-2.0, -1.25),
    bottom_right: Complex::new(0.5, 1.25),
};

impl ComplexRect {
    pub fn new(top_left: Complex, bottom_right: Complex) -> Result<Self, ComplexRectError> {
        let width = bottom_right.real - top_left.real;
        let height = bottom_right.imag - top_left.imag;

        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.bottom_right.real - self.top_left.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom_right.imag - self.top_left.imag
    }}

impl Default for ComplexRect {
    fn default() -> Self {
        MANDELBROT_VIEWPORT
    }
}

#[derive(Deserialize)]
struct RawComplexRect {
    min_real: f64,
    min_imag: f64,
    max_real: f64,
    max_imag: f64,
}

impl TryFrom<RawComplexRect> for ComplexRect {
    type Error = ComplexRectError;

    fn try_from(raw: RawComplexRect) -> Result<Self, Self::Error> {
        Self::new(
            Complex::new(raw.min_real, raw.min_imag),
            Complex::new(raw.max_real, raw.max_imag),
        )
    }
}
