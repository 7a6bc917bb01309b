//! Tests for boundary overlays and segment size tables

#[cfg(test)]
mod tests {
    use regiongrow::algorithm::executor::{SegmentorConfig, segment_image};
    use regiongrow::algorithm::segmentation::Segmentation;
    use regiongrow::io::configuration::BOUNDARY_COLOR;
    use regiongrow::io::image::BandRaster;
    use regiongrow::io::visualization::{
        export_overlay, is_boundary, overlay_segmentation, render_size_table,
    };
    use regiongrow::spatial::coordinate::Coordinate;
    use tempfile::TempDir;

    fn segmented(side: usize, values: Vec<u8>, threshold: f64) -> (BandRaster, Segmentation) {
        let raster = BandRaster::from_vec(side, side, 1, values).unwrap();
        let exponent = side.trailing_zeros();
        let segmentation = segment_image(&raster, SegmentorConfig::new(exponent, threshold))
            .unwrap();
        (raster, segmentation)
    }

    // Tests the tile border is always drawn
    // Verified by only drawing segment changes
    #[test]
    fn test_border_is_boundary() {
        let (_, segmentation) = segmented(4, vec![50; 16], 0.0);

        assert!(is_boundary(&segmentation, Coordinate::new(0, 2)).unwrap());
        assert!(is_boundary(&segmentation, Coordinate::new(3, 1)).unwrap());
        assert!(!is_boundary(&segmentation, Coordinate::new(1, 1)).unwrap());
        assert!(!is_boundary(&segmentation, Coordinate::new(2, 2)).unwrap());
    }

    // Tests interior pixels next to another segment are boundaries
    // Verified by comparing with the right neighbour instead of the left
    #[test]
    fn test_segment_change_is_boundary() {
        let values = vec![
            0, 0, 0, 0, //
            0, 0, 0, 0, //
            0, 0, 250, 250, //
            0, 0, 250, 250,
        ];
        let (_, segmentation) = segmented(4, values, 0.0);

        assert!(!is_boundary(&segmentation, Coordinate::new(1, 2)).unwrap());
        assert!(is_boundary(&segmentation, Coordinate::new(2, 2)).unwrap());
        assert!(is_boundary(&segmentation, Coordinate::new(4, 0)).is_err());
    }

    // Tests the overlay keeps source colours away from boundaries
    // Verified by painting every pixel in the boundary colour
    #[test]
    fn test_overlay_colours() {
        let (raster, segmentation) = segmented(4, vec![50; 16], 0.0);

        let overlay = overlay_segmentation(&raster, &segmentation).unwrap();

        assert_eq!(overlay.dimensions(), (4, 4));
        assert_eq!(overlay.get_pixel(0, 0).0, BOUNDARY_COLOR);
        assert_eq!(overlay.get_pixel(1, 2).0, [50, 50, 50]);
    }

    // Tests the overlay is written and can be read back
    // Verified by skipping parent directory creation
    #[test]
    fn test_export_overlay() {
        let (raster, segmentation) = segmented(2, vec![1, 2, 3, 4], 0.0);
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("overlay.png");

        export_overlay(&raster, &segmentation, &path).unwrap();

        let written = image::open(&path).unwrap().to_rgb8();
        assert_eq!(written.dimensions(), (2, 2));
    }

    // Tests the size table lists the owning segment's pixel count per cell
    // Verified by printing segment ids instead of sizes
    #[test]
    fn test_render_size_table() {
        let (_, segmentation) = segmented(2, vec![10, 10, 200, 200], 0.0);

        let table = render_size_table(&segmentation).unwrap();
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "  | 0 1");
        assert_eq!(lines[1], "-------");
        assert_eq!(lines[2], "0 | 2 2");
        assert_eq!(lines[3], "1 | 2 2");
    }

    // Tests cells widen to fit the largest possible segment size
    // Verified by sizing cells from the tile side alone
    #[test]
    fn test_render_size_table_wide_cells() {
        let (_, segmentation) = segmented(4, vec![90; 16], 0.0);

        let table = render_size_table(&segmentation).unwrap();
        let lines: Vec<&str> = table.lines().collect();

        assert!(table.ends_with('\n'));
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "   |  0  1  2  3");
        assert_eq!(lines[1], "-".repeat(16));
        assert_eq!(lines[2], " 0 | 16 16 16 16");
        assert_eq!(lines[5], " 3 | 16 16 16 16");
    }
}
