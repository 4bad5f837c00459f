//! Generation constants and tuning parameters.

/// Largest accepted grid degree.
///
/// The grid side is `2^degree + 1`, so 30 is the last value whose side
/// still fits in a `u32`; cell count grows as the square of the side, and
/// memory runs out long before the arithmetic does.
pub const MAX_DEGREE: u32 = 30;

/// Grid side length for a given degree: `2^degree + 1`.
///
/// Always odd, so every subdivision midpoint lands on an exact integer
/// coordinate at every pass.
pub const fn side_for_degree(degree: u32) -> u32 {
    (1 << degree) + 1
}

/// Coordinates per parallel partition within one generation step.
///
/// Fixed (rather than derived from the thread count) so that a given seed
/// reproduces the same terrain bit-for-bit at any parallelism level.
pub const STEP_CHUNK: usize = 1024;
