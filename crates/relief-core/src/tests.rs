#[cfg(test)]
mod tests {
    use crate::constants::{side_for_degree, MAX_DEGREE};
    use crate::error::TerrainError;
    use crate::types::GridPoint;

    /// Verify GridPoint round-trips through serde_json.
    #[test]
    fn test_grid_point_serde() {
        let points = vec![
            GridPoint::new(0, 0),
            GridPoint::new(4, 4),
            GridPoint::new(u32::MAX, 17),
        ];
        for p in points {
            let json = serde_json::to_string(&p).unwrap();
            let back: GridPoint = serde_json::from_str(&json).unwrap();
            assert_eq!(p, back);
        }
    }

    #[test]
    fn test_grid_point_offset_within() {
        let p = GridPoint::new(4, 4);
        assert_eq!(p.offset_within(-4, -4, 9), Some(GridPoint::new(0, 0)));
        assert_eq!(p.offset_within(4, 0, 9), Some(GridPoint::new(8, 4)));
        assert_eq!(p.offset_within(0, 4, 9), Some(GridPoint::new(4, 8)));
    }

    #[test]
    fn test_grid_point_offset_rejects_out_of_range() {
        let p = GridPoint::new(1, 0);
        // Above the top edge
        assert_eq!(p.offset_within(0, -1, 3), None);
        // Past the right edge (size is exclusive)
        assert_eq!(p.offset_within(2, 0, 3), None);
        // Both axes out
        assert_eq!(p.offset_within(-2, 5, 3), None);
    }

    #[test]
    fn test_side_for_degree() {
        assert_eq!(side_for_degree(1), 3);
        assert_eq!(side_for_degree(3), 9);
        assert_eq!(side_for_degree(10), 1025);
        // The ceiling case still fits a u32.
        assert_eq!(side_for_degree(MAX_DEGREE), (1 << 30) + 1);
    }

    /// Error display text carries the offending values.
    #[test]
    fn test_error_messages() {
        let e = TerrainError::InvalidDegree { degree: 0 };
        let msg = e.to_string();
        assert!(msg.contains("invalid degree 0"), "got: {msg}");
        assert!(msg.contains("1..=30"), "got: {msg}");

        let e = TerrainError::OutOfBounds { x: 9, y: 2, size: 9 };
        let msg = e.to_string();
        assert!(msg.contains("(9, 2)"), "got: {msg}");
        assert!(msg.contains("size 9"), "got: {msg}");
    }
}
