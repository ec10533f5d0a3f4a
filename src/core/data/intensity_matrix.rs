use thiserror::Error;

use crate::core::data::grid_size::GridSize;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntensityMatrixError {
    #[error("grid {width}x{height} needs {expected} cells, got {actual}")]
    BoundsMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Grayscale intensities for one frame, indexed `[y][x]` and stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityMatrix {
    grid: GridSize,
    cells: Vec<f64>,
}

impl IntensityMatrix {
    pub fn from_data(grid: GridSize, cells: Vec<f64>) -> Result<Self, IntensityMatrixError> {
        if grid.size() != cells.len() {
            return Err(IntensityMatrixError::BoundsMismatch {
                width: grid.width,
                height: grid.height,
                expected: grid.size(),
                actual: cells.len(),
            });
        }

        Ok(Self { grid, cells })
    }

    #[must_use]
    pub fn empty(grid: GridSize) -> Self {
        Self {
            grid,
            cells: Vec::new(),
        }
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.grid.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.grid.height
    }

    /// `(rows, columns)`, matching the `[y][x]` indexing.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.grid.height as usize, self.grid.width as usize)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn get(&self, y: u32, x: u32) -> Option<f64> {
        if y >= self.grid.height || x >= self.grid.width {
            return None;
        }

        self.cells
            .get(y as usize * self.grid.width as usize + x as usize)
            .copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.cells.chunks(self.grid.width.max(1) as usize)
    }

    #[must_use]
    pub fn cells(&self) -> &[f64] {
        &self.cells
    }

    /// Smallest and largest cell, `None` for an empty matrix.
    #[must_use]
    pub fn range(&self) -> Option<(f64, f64)> {
        self.cells.iter().copied().fold(None, |acc, value| match acc {
            None => Some((value, value)),
            Some((min, max)) => Some((min.min(value), max.max(value))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_data_rejects_wrong_length() {
        let result = IntensityMatrix::from_data(GridSize::new(2, 2), vec![0.0; 3]);

        assert_eq!(
            result,
            Err(IntensityMatrixError::BoundsMismatch {
                width: 2,
                height: 2,
                expected: 4,
                actual: 3,
            })
        );
    }

    #[test]
    fn test_get_uses_row_then_column() {
        let matrix =
            IntensityMatrix::from_data(GridSize::new(3, 2), vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0])
                .unwrap();

        assert_eq!(matrix.shape(), (2, 3));
        assert_eq!(matrix.get(0, 2), Some(2.0));
        assert_eq!(matrix.get(1, 0), Some(3.0));
        assert_eq!(matrix.get(2, 0), None);
        assert_eq!(matrix.get(0, 3), None);
    }

    #[test]
    fn test_rows_chunk_by_width() {
        let matrix =
            IntensityMatrix::from_data(GridSize::new(2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let rows: Vec<&[f64]> = matrix.rows().collect();

        assert_eq!(rows, vec![&[1.0, 2.0][..], &[3.0, 4.0][..]]);
    }

    #[test]
    fn test_range() {
        let matrix =
            IntensityMatrix::from_data(GridSize::new(2, 2), vec![10.0, 255.0, 0.5, 30.0]).unwrap();

        assert_eq!(matrix.range(), Some((0.5, 255.0)));
        assert_eq!(IntensityMatrix::empty(GridSize::new(0, 4)).range(), None);
    }
}
