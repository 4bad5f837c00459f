//! Diamond-Square terrain generation for RELIEF.
//!
//! Fills a blank `HeightGrid` through `degree` passes of the classic
//! square-then-diamond subdivision: each pass halves the cell spacing,
//! fills the new midpoints from their already-known neighbors, and adds a
//! random perturbation whose magnitude shrinks with the spacing.

pub use relief_core as core;

pub mod coords;
pub mod fill;
pub mod generate;
pub mod pass;
pub mod rng;

// Re-export key items for convenience.
pub use fill::Step;
pub use generate::{generate, terrain, GeneratorConfig};
pub use rng::Jitter;
