//! Terrain driver: runs the passes over a blank grid.

use serde::{Deserialize, Serialize};
use tracing::debug;

use relief_core::error::TerrainError;
use relief_terrain::grid::HeightGrid;

use crate::pass::run_pass;
use crate::rng::Jitter;

/// Configuration for one terrain generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Grid degree: the side is `2^degree + 1` and generation runs
    /// `degree` passes.
    pub degree: u32,
    /// Random perturbation source. Same seed = same terrain.
    pub jitter: Jitter,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            degree: 6,
            jitter: Jitter::Seeded { seed: 42 },
        }
    }
}

/// Generate a finished terrain grid from the given config.
///
/// Passes run in ascending order, strictly sequentially — each pass reads
/// cells the previous ones wrote. Only the two steps inside a pass fan
/// out over worker threads. Every cell is written exactly once across the
/// whole run; the four corners keep their initial zero.
pub fn generate(config: &GeneratorConfig) -> Result<HeightGrid, TerrainError> {
    let mut grid = HeightGrid::blank(config.degree)?;
    for pass in 1..=config.degree {
        run_pass(&mut grid, config.degree, pass, &config.jitter)?;
        debug!(pass, degree = config.degree, "pass complete");
    }
    Ok(grid)
}

/// Generate a terrain grid of the given degree with a fresh random seed.
pub fn terrain(degree: u32) -> Result<HeightGrid, TerrainError> {
    generate(&GeneratorConfig {
        degree,
        jitter: Jitter::seeded(rand::random()),
    })
}
