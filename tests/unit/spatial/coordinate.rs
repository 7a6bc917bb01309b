//! Tests for tile coordinates and their 4-neighbourhood

#[cfg(test)]
mod tests {
    use regiongrow::spatial::coordinate::Coordinate;

    // Tests interior neighbours come out left, right, up, down
    // Verified by swapping the up and down entries
    #[test]
    fn test_adjacent_order_interior() {
        let adjacent: Vec<Coordinate> = Coordinate::new(1, 1).adjacent_within(3).collect();

        assert_eq!(
            adjacent,
            vec![
                Coordinate::new(0, 1),
                Coordinate::new(2, 1),
                Coordinate::new(1, 0),
                Coordinate::new(1, 2),
            ]
        );
    }

    // Tests corner coordinates only report in-tile neighbours
    // Verified by dropping the left edge check
    #[test]
    fn test_adjacent_corners() {
        let top_left: Vec<Coordinate> = Coordinate::new(0, 0).adjacent_within(2).collect();
        assert_eq!(top_left, vec![Coordinate::new(1, 0), Coordinate::new(0, 1)]);

        let bottom_right: Vec<Coordinate> = Coordinate::new(1, 1).adjacent_within(2).collect();
        assert_eq!(
            bottom_right,
            vec![Coordinate::new(0, 1), Coordinate::new(1, 0)]
        );
    }

    // Tests a single-pixel tile has no neighbours
    // Verified by allowing coordinates equal to the size
    #[test]
    fn test_adjacent_single_pixel_tile() {
        assert_eq!(Coordinate::new(0, 0).adjacent_within(1).count(), 0);
    }

    // Tests bounds checking on both axes
    // Verified by comparing only the x component
    #[test]
    fn test_is_within() {
        assert!(Coordinate::new(3, 3).is_within(4));
        assert!(!Coordinate::new(4, 0).is_within(4));
        assert!(!Coordinate::new(0, 4).is_within(4));
    }

    // Tests display format used in error messages
    // Verified by swapping x and y in the formatter
    #[test]
    fn test_display() {
        assert_eq!(Coordinate::new(2, 7).to_string(), "(2, 7)");
    }
}
