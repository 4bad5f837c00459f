//! Coordinate patterns for one pass of the subdivision.
//!
//! Both generators are pure functions of `(degree, pass)`: for fixed
//! arguments they always produce the same set, in the same order, and the
//! square set of a pass is disjoint from its diamond set and from every
//! cell any earlier pass touched.

use relief_core::constants::side_for_degree;
use relief_core::types::GridPoint;

/// Cell spacing for the given pass: `2^(degree - pass)`.
///
/// The same value bounds the magnitude of that pass's random perturbation.
pub fn interval(degree: u32, pass: u32) -> u32 {
    debug_assert!(pass >= 1 && pass <= degree, "pass {pass} of degree {degree}");
    1 << (degree - pass)
}

/// Midpoints of the squares formed by the previous pass: every cell whose
/// x and y are both odd multiples of the pass interval.
pub fn square_coords(degree: u32, pass: u32) -> Vec<GridPoint> {
    let step = interval(degree, pass);
    // Odd multiples per axis: interval * 1, interval * 3, ...
    let count = 1u32 << (pass - 1);

    let mut points = Vec::with_capacity((count as usize).pow(2));
    for ky in 0..count {
        let y = step * (2 * ky + 1);
        for kx in 0..count {
            points.push(GridPoint::new(step * (2 * kx + 1), y));
        }
    }
    points
}

/// Midpoints of the diamonds formed by the square step of the same pass:
/// the lattice of interval multiples where the row and column indices have
/// opposite parity (even rows take odd-indexed columns and vice versa).
pub fn diamond_coords(degree: u32, pass: u32) -> Vec<GridPoint> {
    let step = interval(degree, pass);
    let side = side_for_degree(degree);
    // Lattice index range along each axis: 0..=lanes covers 0..=side-1.
    let lanes = (side - 1) / step;

    let mut points = Vec::with_capacity(((lanes as usize + 1).pow(2) + 1) / 2);
    for j in 0..=lanes {
        let y = j * step;
        let first = if j % 2 == 0 { 1 } else { 0 };
        let mut i = first;
        while i <= lanes {
            points.push(GridPoint::new(i * step, y));
            i += 2;
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn as_set(points: Vec<GridPoint>) -> HashSet<(u32, u32)> {
        points.into_iter().map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn test_interval_halves_each_pass() {
        assert_eq!(interval(3, 1), 4);
        assert_eq!(interval(3, 2), 2);
        assert_eq!(interval(3, 3), 1);
    }

    /// The canonical 9×9 first pass.
    #[test]
    fn test_first_pass_of_degree_three() {
        assert_eq!(
            as_set(square_coords(3, 1)),
            HashSet::from([(4, 4)]),
        );
        assert_eq!(
            as_set(diamond_coords(3, 1)),
            HashSet::from([(4, 0), (0, 4), (8, 4), (4, 8)]),
        );
    }

    #[test]
    fn test_second_pass_of_degree_two() {
        // 5×5 grid, interval 1: squares are the four odd-odd cells.
        assert_eq!(
            as_set(square_coords(2, 2)),
            HashSet::from([(1, 1), (3, 1), (1, 3), (3, 3)]),
        );
        // Diamonds are every remaining cell of odd coordinate sum.
        let diamonds = as_set(diamond_coords(2, 2));
        assert_eq!(diamonds.len(), 12);
        assert!(diamonds.iter().all(|&(x, y)| (x + y) % 2 == 1));
    }

    #[test]
    fn test_coords_are_deterministic() {
        assert_eq!(square_coords(4, 3), square_coords(4, 3));
        assert_eq!(diamond_coords(4, 3), diamond_coords(4, 3));
    }

    /// Union of all pass sets plus the four corners tiles the grid exactly
    /// once: no overlaps, no gaps. This is the invariant that makes
    /// unsynchronized same-step parallel writes safe.
    #[test]
    fn test_passes_tile_grid_exactly_once() {
        for degree in 1..=4u32 {
            let side = side_for_degree(degree);
            let mut seen: HashSet<(u32, u32)> = HashSet::new();
            let mut emitted = 0usize;

            for pass in 1..=degree {
                for p in square_coords(degree, pass)
                    .into_iter()
                    .chain(diamond_coords(degree, pass))
                {
                    assert!(
                        seen.insert((p.x, p.y)),
                        "degree {degree} pass {pass} revisits ({}, {})",
                        p.x,
                        p.y
                    );
                    emitted += 1;
                }
            }

            // The four corners are never targeted; they keep their seed value.
            let corners = [
                (0, 0),
                (side - 1, 0),
                (0, side - 1),
                (side - 1, side - 1),
            ];
            for c in corners {
                assert!(seen.insert(c), "degree {degree} wrote corner {c:?}");
            }

            assert_eq!(
                emitted + 4,
                (side as usize).pow(2),
                "degree {degree} does not cover the grid"
            );
        }
    }

    /// Within one pass the square and diamond sets never share a cell.
    #[test]
    fn test_square_and_diamond_disjoint() {
        for degree in 1..=4u32 {
            for pass in 1..=degree {
                let squares = as_set(square_coords(degree, pass));
                let diamonds = as_set(diamond_coords(degree, pass));
                assert!(
                    squares.is_disjoint(&diamonds),
                    "degree {degree} pass {pass} overlaps"
                );
            }
        }
    }
}
