use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

/// Escape-time count for `c`.
///
/// Iterates `z = z² + c` starting from `z = c` and checks the escape radius
/// before each step, so a point already outside radius 2 returns 0. Points
/// that stay bounded for `max_iteration` steps return `max_iteration`.
#[must_use]
pub fn compute_escape(c: Complex, max_iteration: u32) -> u32 {
    let mut z = c;

    for n in 0..max_iteration {
        if z.magnitude() > 2.0 {
            return n;
        }
        z = z * z + c;
    }

    max_iteration
}

#[derive(Debug)]
pub struct MandelbrotAlgorithm {
    grid: GridSize,
    viewport: ComplexRect,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, self.grid, self.viewport)?;

        Ok(compute_escape(c, self.max_iterations))
    }
}

impl MandelbrotAlgorithm {
    pub fn new(
        grid: GridSize,
        viewport: ComplexRect,
        max_iterations: u32,
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroIterations);
        }

        Ok(Self {
            grid,
            viewport,
            max_iterations,
        })
    }}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex_rect::MANDELBROT_VIEWPORT;

    #[test]
    fn test_known_escape_values() {
        assert_eq!(compute_escape(Complex::ZERO, 100), 100);
        assert_eq!(compute_escape(Complex::new(2.0, 0.0), 100), 1);
        assert_eq!(compute_escape(Complex::new(-1.0, 0.2), 100), 100);
        assert_eq!(compute_escape(Complex::new(-0.1, 0.65), 10), 10);
    }

    #[test]
    fn test_origin_never_escapes() {
        for max_iteration in [1, 2, 7, 50, 1000] {
            assert_eq!(compute_escape(Complex::ZERO, max_iteration), max_iteration);
        }
    }

    #[test]
    fn test_points_outside_radius_escape_immediately() {
        let outside = [
            Complex::new(2.01, 0.0),
            Complex::new(-3.0, 0.0),
            Complex::new(1.5, 1.5),
            Complex::new(0.0, -2.5),
        ];

        for c in outside {
            for max_iteration in [1, 10, 100] {
                assert_eq!(compute_escape(c, max_iteration), 0, "c = {:?}", c);
            }
        }
    }

    #[test]
    fn test_result_is_bounded_by_cap() {
        for step_re in 0..25 {
            for step_im in 0..25 {
                let c = Complex::new(-2.0 + 0.1 * f64::from(step_re), -1.25 + 0.1 * f64::from(step_im));
                let result = compute_escape(c, 20);

                assert!(result <= 20, "c = {:?} gave {}", c, result);
            }
        }
    }

    #[test]
    fn test_zero_cap_returns_zero() {
        assert_eq!(compute_escape(Complex::new(5.0, 5.0), 0), 0);
        assert_eq!(compute_escape(Complex::ZERO, 0), 0);
    }

    #[test]
    fn test_new_rejects_zero_iterations() {
        let result = MandelbrotAlgorithm::new(GridSize::new(4, 4), MANDELBROT_VIEWPORT, 0);

        assert_eq!(result.unwrap_err(), MandelbrotError::ZeroIterations);
    }

    #[test]
    fn test_compute_maps_pixel_before_escaping() {
        let algorithm =
            MandelbrotAlgorithm::new(GridSize::new(10, 10), MANDELBROT_VIEWPORT, 50).unwrap();

        // Pixel (0, 0) is -2 - 1.25i, outside the escape radius.
        assert_eq!(algorithm.compute(Point { x: 0, y: 0 }), Ok(0));
        // Pixel (8, 5) is 0 + 0i.
        assert_eq!(algorithm.compute(Point { x: 8, y: 5 }), Ok(50));
    }

    #[test]
    fn test_compute_rejects_pixel_outside_grid() {
        let algorithm =
            MandelbrotAlgorithm::new(GridSize::new(10, 10), MANDELBROT_VIEWPORT, 50).unwrap();

        assert!(algorithm.compute(Point { x: 10, y: 0 }).is_err());
    }
}
