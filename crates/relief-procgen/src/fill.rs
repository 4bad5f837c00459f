//! Per-cell fill: perturbed average of already-known neighbors.

use relief_core::types::GridPoint;
use relief_terrain::grid::HeightGrid;

use crate::rng::JitterLane;

/// Which neighbor pattern a step reads.
///
/// `Square` averages the four diagonal corners of the enclosing square;
/// `Diamond` averages the four axis-aligned diamond vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Square,
    Diamond,
}

impl Step {
    /// Neighbor offsets at the given distance.
    pub fn offsets(self, distance: i64) -> [(i64, i64); 4] {
        match self {
            Step::Square => [
                (-distance, -distance),
                (distance, -distance),
                (-distance, distance),
                (distance, distance),
            ],
            Step::Diamond => [
                (-distance, 0),
                (distance, 0),
                (0, -distance),
                (0, distance),
            ],
        }
    }
}

/// New height for `point`: the average of its in-bounds neighbors at
/// `interval` distance, truncated toward zero, plus the lane's random
/// offset in `[-interval, interval]`.
///
/// Neighbors outside the grid are excluded from the average, not read as
/// zero; cells on the grid edge simply average fewer values. Every target
/// a pass emits has at least two in-bounds neighbors, so the divisor is
/// never zero.
pub fn fill_value(
    grid: &HeightGrid,
    step: Step,
    interval: u32,
    point: GridPoint,
    lane: &mut JitterLane,
) -> i32 {
    let size = grid.size();
    let mut sum: i64 = 0;
    let mut count: i64 = 0;

    for (dx, dy) in step.offsets(interval as i64) {
        if let Some(n) = point.offset_within(dx, dy, size) {
            sum += grid.cells()[n.y as usize * size as usize + n.x as usize] as i64;
            count += 1;
        }
    }

    // i64 division truncates toward zero, for negative sums too.
    let average = sum / count;
    average as i32 + lane.sample(interval)
}
