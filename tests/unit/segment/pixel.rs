//! Tests for pixels and band transposition

#[cfg(test)]
mod tests {
    use regiongrow::AlgorithmError;
    use regiongrow::segment::pixel::{Pixel, transpose_bands};
    use regiongrow::spatial::coordinate::Coordinate;
    use std::collections::HashSet;

    // Tests equality is by coordinate, not by band values
    // Verified by comparing band vectors as well
    #[test]
    fn test_equality_ignores_bands() {
        let a = Pixel::new(Coordinate::new(3, 4), vec![1, 2, 3]).unwrap();
        let b = Pixel::new(Coordinate::new(3, 4), vec![9, 9, 9]).unwrap();

        assert_eq!(a, b);
        let set: HashSet<Pixel> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    // Tests mirrored coordinates are distinct pixels
    // Verified by comparing x against the other pixel's y
    #[test]
    fn test_equality_checks_both_axes() {
        let a = Pixel::new(Coordinate::new(1, 2), vec![0]).unwrap();
        let b = Pixel::new(Coordinate::new(2, 1), vec![0]).unwrap();
        let c = Pixel::new(Coordinate::new(1, 1), vec![0]).unwrap();

        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
    }

    // Tests pixels without band data are rejected
    // Verified by accepting empty band vectors
    #[test]
    fn test_empty_bands_rejected() {
        assert!(matches!(
            Pixel::new(Coordinate::new(0, 0), vec![]),
            Err(AlgorithmError::SegmentConstruction { .. })
        ));
    }

    // Tests transposition yields one row per band, one column per pixel
    // Verified by returning the pixel-major layout
    #[test]
    fn test_transpose_shape() {
        let pixels = vec![
            Pixel::new(Coordinate::new(0, 0), vec![1, 2, 3]).unwrap(),
            Pixel::new(Coordinate::new(1, 0), vec![4, 5, 6]).unwrap(),
        ];

        let bands = transpose_bands(&pixels).unwrap();

        assert_eq!(bands, vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
    }

    // Tests transposition rejects empty and ragged input
    // Verified by truncating to the shortest pixel
    #[test]
    fn test_transpose_invalid() {
        assert!(transpose_bands(&[]).is_err());

        let ragged = vec![
            Pixel::new(Coordinate::new(0, 0), vec![1, 2]).unwrap(),
            Pixel::new(Coordinate::new(1, 0), vec![3]).unwrap(),
        ];
        assert!(transpose_bands(&ragged).is_err());
    }
}
