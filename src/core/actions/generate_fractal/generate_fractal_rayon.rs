use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;

/// Evaluates every pixel of `grid` on rayon's pool, one task per row.
///
/// Output is row-major regardless of scheduling. Any failing pixel
/// aborts the collection.
pub fn generate_fractal_rayon<Alg>(
    grid: GridSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let width = grid.width;

    (0..grid.height)
        .into_par_iter()
        .flat_map_iter(|y| (0..width).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
