//! Tests for id-indexed segment storage

#[cfg(test)]
mod tests {
    use regiongrow::AlgorithmError;
    use regiongrow::segment::arena::{SegmentArena, SegmentId};
    use regiongrow::segment::pixel::Pixel;
    use regiongrow::segment::segment::Segment;
    use regiongrow::spatial::coordinate::Coordinate;

    fn leaf(x: usize, y: usize) -> Segment {
        Segment::from_pixel(&Pixel::new(Coordinate::new(x, y), vec![0]).unwrap()).unwrap()
    }

    // Tests ids are issued in insertion order and resolve to their segment
    // Verified by reusing retired slots
    #[test]
    fn test_insert_and_get() {
        let mut arena = SegmentArena::new();
        let a = arena.insert(leaf(0, 0));
        let b = arena.insert(leaf(1, 0));

        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(arena.get(b).unwrap().pixels(), &[Coordinate::new(1, 0)]);
        assert_eq!(arena.live_count(), 2);
        assert_eq!(arena.created_count(), 2);
    }

    // Tests retired ids stop resolving
    // Verified by leaving the live flag set on retire
    #[test]
    fn test_retire() {
        let mut arena = SegmentArena::with_capacity(4);
        let a = arena.insert(leaf(0, 0));
        let b = arena.insert(leaf(1, 0));

        let removed = arena.retire(a).unwrap();

        assert_eq!(removed.pixels(), &[Coordinate::new(0, 0)]);
        assert!(!arena.is_live(a));
        assert!(arena.is_live(b));
        assert_eq!(arena.live_count(), 1);
        assert_eq!(arena.created_count(), 2);
        assert!(matches!(
            arena.get(a),
            Err(AlgorithmError::StaleSegment { id: 0 })
        ));
        assert!(arena.retire(a).is_err());
    }

    // Tests live ids are listed in creation order
    // Verified by listing retired ids too
    #[test]
    fn test_live_ids() {
        let mut arena = SegmentArena::new();
        let ids: Vec<SegmentId> = (0..4).map(|x| arena.insert(leaf(x, 0))).collect();
        arena.retire(ids[1]).unwrap();

        let live: Vec<SegmentId> = arena.live_ids().collect();
        assert_eq!(live, vec![ids[0], ids[2], ids[3]]);
    }

    // Tests structural equality between distinct ids
    // Verified by comparing ids instead of contents
    #[test]
    fn test_structurally_equal() {
        let mut arena = SegmentArena::new();
        let a = arena.insert(leaf(0, 0));
        let twin = arena.insert(leaf(0, 0));
        let other = arena.insert(leaf(1, 0));

        assert!(arena.structurally_equal(a, a).unwrap());
        assert!(arena.structurally_equal(a, twin).unwrap());
        assert!(!arena.structurally_equal(a, other).unwrap());
    }

    // Tests id display used in log messages
    // Verified by printing the debug form
    #[test]
    fn test_id_display() {
        let mut arena = SegmentArena::new();
        arena.insert(leaf(0, 0));
        let id = arena.insert(leaf(1, 0));

        assert_eq!(id.to_string(), "#1");
    }
}
