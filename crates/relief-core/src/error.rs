//! Error taxonomy for grid construction and access.

use thiserror::Error;

use crate::constants::MAX_DEGREE;

/// Errors raised by grid construction and access.
///
/// Generation itself has no partial-failure mode: either the full grid is
/// produced or the call fails outright on invalid input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TerrainError {
    /// Requested degree outside the supported range.
    #[error("invalid degree {degree} (expected 1..={max})", max = MAX_DEGREE)]
    InvalidDegree { degree: u32 },

    /// A cell access landed outside the grid. Coordinate generation is
    /// in-bounds by construction, so this guards direct grid users only.
    #[error("coordinate ({x}, {y}) out of bounds for grid of size {size}")]
    OutOfBounds { x: u32, y: u32, size: u32 },
}
