use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::grid_size::GridSize;

/// Evaluates every pixel on the calling thread, in row-major order.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    grid: GridSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    grid.points().map(|pixel| algorithm.compute(pixel)).collect()
}
