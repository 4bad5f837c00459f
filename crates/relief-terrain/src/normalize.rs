//! Linear rescale of raw heights into a bounded index range.
//!
//! The sole output handed to an external renderer, with `steps` chosen to
//! match its palette size.

use crate::grid::HeightGrid;

/// Rescale every height linearly from `[min, max]` onto `[0, steps]`,
/// truncating toward zero: the minimum maps to 0 and the maximum to
/// `steps`.
///
/// A perfectly flat grid has no range to rescale; every cell becomes the
/// constant `steps / 2` instead of propagating a division error.
pub fn normalize(grid: &HeightGrid, steps: u32) -> HeightGrid {
    let (min, max) = grid.min_max();
    let mut out = grid.clone();

    if min == max {
        let mid = (steps / 2) as i32;
        for cell in out.cells_mut() {
            *cell = mid;
        }
        return out;
    }

    let range = max as i64 - min as i64;
    for cell in out.cells_mut() {
        *cell = ((*cell as i64 - min as i64) * steps as i64 / range) as i32;
    }
    out
}
