//! Spatial data structures for the tile being segmented
//!
//! This module contains spatial-related functionality including:
//! - Tile coordinates and their neighbourhoods
//! - The dither visitation order
//! - The coordinate-to-segment ownership grid

/// Tile coordinates
pub mod coordinate;
/// Bit-interleaved traversal order
pub mod dither;
/// Segment ownership grid
pub mod grid;

pub use coordinate::Coordinate;
pub use dither::DitherSequencer;
pub use grid::SegmentationGrid;
