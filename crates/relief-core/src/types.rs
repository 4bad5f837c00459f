//! Fundamental grid addressing types.

use serde::{Deserialize, Serialize};

/// A cell coordinate on a square grid.
/// Origin is the top-left corner; x grows rightward, y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: u32,
    pub y: u32,
}

impl GridPoint {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// The coordinate shifted by `(dx, dy)`, or `None` if either axis
    /// would leave `[0, size)`.
    pub fn offset_within(&self, dx: i64, dy: i64, size: u32) -> Option<GridPoint> {
        let x = self.x as i64 + dx;
        let y = self.y as i64 + dy;
        if x < 0 || y < 0 || x >= size as i64 || y >= size as i64 {
            return None;
        }
        Some(GridPoint::new(x as u32, y as u32))
    }
}
