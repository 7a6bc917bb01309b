//! Tests for threshold filtering and best-neighbour selection

#[cfg(test)]
mod tests {
    use regiongrow::algorithm::executor::{Segmentor, SegmentorConfig};
    use regiongrow::algorithm::selection::{best_neighbors, eligible_neighbors};
    use regiongrow::io::image::BandRaster;
    use regiongrow::spatial::coordinate::Coordinate;

    fn segmentor(values: Vec<u8>) -> Segmentor {
        let raster = BandRaster::from_vec(2, 2, 1, values).unwrap();
        Segmentor::new(&raster, SegmentorConfig::new(1, 0.0)).unwrap()
    }

    // Tests the cheapest neighbour wins
    // Verified by picking the most expensive neighbour
    #[test]
    fn test_single_best() {
        let engine = segmentor(vec![10, 12, 200, 90]);
        let grid = engine.grid();
        let origin = grid.owner(Coordinate::new(0, 0)).unwrap();

        let best = best_neighbors(grid, engine.arena(), origin, 1000.0).unwrap();

        assert_eq!(best, vec![grid.owner(Coordinate::new(1, 0)).unwrap()]);
    }

    // Tests exact ties are all kept in discovery order
    // Verified by keeping only the first minimum
    #[test]
    fn test_ties_kept_in_order() {
        let engine = segmentor(vec![10, 20, 0, 100]);
        let grid = engine.grid();
        let origin = grid.owner(Coordinate::new(0, 0)).unwrap();

        let best = best_neighbors(grid, engine.arena(), origin, 1000.0).unwrap();

        assert_eq!(
            best,
            vec![
                grid.owner(Coordinate::new(1, 0)).unwrap(),
                grid.owner(Coordinate::new(0, 1)).unwrap(),
            ]
        );
    }

    // Tests neighbours above the threshold are excluded
    // Verified by comparing with strict less-than against a larger bound
    #[test]
    fn test_threshold_filter() {
        let engine = segmentor(vec![10, 20, 0, 100]);
        let grid = engine.grid();
        let origin = grid.owner(Coordinate::new(0, 0)).unwrap();

        // Both ties cost exactly 10
        assert_eq!(
            eligible_neighbors(grid, engine.arena(), origin, 10.0)
                .unwrap()
                .len(),
            2
        );
        assert!(
            best_neighbors(grid, engine.arena(), origin, 9.999)
                .unwrap()
                .is_empty()
        );
    }

    // Tests eligible neighbours carry their cost
    // Verified by reporting the subject's own weight as cost
    #[test]
    fn test_eligible_costs() {
        let engine = segmentor(vec![10, 200, 10, 10]);
        let grid = engine.grid();
        let origin = grid.owner(Coordinate::new(0, 0)).unwrap();

        let eligible = eligible_neighbors(grid, engine.arena(), origin, 1000.0).unwrap();

        assert_eq!(eligible.len(), 2);
        assert_eq!(eligible[0].id, grid.owner(Coordinate::new(1, 0)).unwrap());
        assert!((eligible[0].cost - 190.0).abs() < 1e-9);
        assert!(eligible[1].cost.abs() < 1e-12);
    }
}
