//! HeightGrid: square elevation grid with bounds-checked access.

use serde::{Deserialize, Serialize};

use relief_core::constants::{side_for_degree, MAX_DEGREE};
use relief_core::error::TerrainError;

/// Square grid of signed heights with side `2^degree + 1`.
///
/// Heights are stored row-major (top-to-bottom, left-to-right), addressed
/// `(x, y)` with the origin at the top-left corner. The odd side length
/// guarantees every subdivision midpoint is an exact integer coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeightGrid {
    degree: u32,
    size: u32,
    cells: Vec<i32>,
}

impl HeightGrid {
    /// All-zero grid of side `2^degree + 1`.
    ///
    /// Fails with `InvalidDegree` before allocating anything.
    pub fn blank(degree: u32) -> Result<Self, TerrainError> {
        if degree < 1 || degree > MAX_DEGREE {
            return Err(TerrainError::InvalidDegree { degree });
        }
        let size = side_for_degree(degree);
        Ok(Self {
            degree,
            size,
            cells: vec![0; size as usize * size as usize],
        })
    }

    /// The degree this grid was created with.
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Side length in cells.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Whether `(x, y)` addresses a cell of this grid.
    pub fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.size && y < self.size
    }

    #[inline]
    fn idx(&self, x: u32, y: u32) -> usize {
        y as usize * self.size as usize + x as usize
    }

    fn check(&self, x: u32, y: u32) -> Result<(), TerrainError> {
        if self.in_bounds(x, y) {
            Ok(())
        } else {
            Err(TerrainError::OutOfBounds {
                x,
                y,
                size: self.size,
            })
        }
    }

    /// Height at `(x, y)`.
    pub fn get(&self, x: u32, y: u32) -> Result<i32, TerrainError> {
        self.check(x, y)?;
        Ok(self.cells[self.idx(x, y)])
    }

    /// Overwrite the height at `(x, y)`.
    pub fn set(&mut self, x: u32, y: u32, value: i32) -> Result<(), TerrainError> {
        self.check(x, y)?;
        let i = self.idx(x, y);
        self.cells[i] = value;
        Ok(())
    }

    /// Add `delta` to the height at `(x, y)`.
    /// Equivalent to `set` while the target still holds its initial zero.
    pub fn add_at(&mut self, x: u32, y: u32, delta: i32) -> Result<(), TerrainError> {
        let v = self.get(x, y)?;
        self.set(x, y, v + delta)
    }

    /// Read-only view of the raw cells, row-major.
    pub fn cells(&self) -> &[i32] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [i32] {
        &mut self.cells
    }

    /// Minimum and maximum height over the whole grid.
    pub fn min_max(&self) -> (i32, i32) {
        let min = self.cells.iter().copied().min().unwrap_or(0);
        let max = self.cells.iter().copied().max().unwrap_or(0);
        (min, max)
    }
}
