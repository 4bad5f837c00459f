//! One full pass: square step, then diamond step.
//!
//! Each step runs as an explicit partition → compute → merge pipeline:
//! the coordinate set is chunked, every chunk's fills are computed in
//! parallel against the frozen grid, and the resulting writes are merged
//! sequentially. Writes within a step target pairwise-distinct cells, so
//! the merge is a plain disjoint union — no locking, no arithmetic
//! combination of partial results.

use rayon::prelude::*;

use relief_core::constants::STEP_CHUNK;
use relief_core::error::TerrainError;
use relief_core::types::GridPoint;
use relief_terrain::grid::HeightGrid;

use crate::coords::{diamond_coords, interval, square_coords};
use crate::fill::{fill_value, Step};
use crate::rng::Jitter;

/// Run one pass over the grid.
///
/// The square step commits fully before the diamond step starts: diamond
/// neighbor reads depend on the square outputs of the same pass.
pub fn run_pass(
    grid: &mut HeightGrid,
    degree: u32,
    pass: u32,
    jitter: &Jitter,
) -> Result<(), TerrainError> {
    let distance = interval(degree, pass);
    apply_step(grid, Step::Square, distance, pass, &square_coords(degree, pass), jitter)?;
    apply_step(grid, Step::Diamond, distance, pass, &diamond_coords(degree, pass), jitter)
}

fn apply_step(
    grid: &mut HeightGrid,
    step: Step,
    distance: u32,
    pass: u32,
    targets: &[GridPoint],
    jitter: &Jitter,
) -> Result<(), TerrainError> {
    debug_assert_targets_distinct(targets);

    let frozen: &HeightGrid = grid;
    let writes: Vec<Vec<(GridPoint, i32)>> = targets
        .par_chunks(STEP_CHUNK)
        .enumerate()
        .map(|(lane, chunk)| {
            let mut rng = jitter.lane(pass, step, lane as u64);
            chunk
                .iter()
                .map(|&p| (p, fill_value(frozen, step, distance, p, &mut rng)))
                .collect()
        })
        .collect();

    for (p, value) in writes.into_iter().flatten() {
        grid.set(p.x, p.y, value)?;
    }
    Ok(())
}

/// A same-step overlap would turn the unsynchronized parallel fills into a
/// silent race; the coordinate generators rule it out by construction.
fn debug_assert_targets_distinct(targets: &[GridPoint]) {
    #[cfg(debug_assertions)]
    {
        let mut seen = std::collections::HashSet::with_capacity(targets.len());
        for p in targets {
            debug_assert!(seen.insert(*p), "step targets ({}, {}) twice", p.x, p.y);
        }
    }
    #[cfg(not(debug_assertions))]
    let _ = targets;
}
