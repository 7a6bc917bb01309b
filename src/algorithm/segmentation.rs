//! Converged segmentation handed to collaborators
//!
//! Read-only view over the final ownership grid and the surviving segments.
//! Collaborators detect region boundaries by comparing the segments owning
//! two coordinates with `==`.

use std::collections::HashMap;

use crate::io::error::{Result, construction_error};
use crate::segment::arena::{SegmentArena, SegmentId};
use crate::segment::segment::Segment;
use crate::spatial::coordinate::Coordinate;
use crate::spatial::grid::SegmentationGrid;

/// Final partition of a tile into segments
#[derive(Debug, Clone)]
pub struct Segmentation {
    grid: SegmentationGrid,
    arena: SegmentArena,
    passes: usize,
    merges: usize,
}

impl Segmentation {
    pub(crate) const fn new(
        grid: SegmentationGrid,
        arena: SegmentArena,
        passes: usize,
        merges: usize,
    ) -> Self {
        Self {
            grid,
            arena,
            passes,
            merges,
        }
    }

    /// Side length of the tile
    pub const fn size(&self) -> usize {
        self.grid.size()
    }

    /// Number of growth passes run, including the final pass without merges
    pub const fn passes(&self) -> usize {
        self.passes
    }

    /// Number of merges performed
    pub const fn merges(&self) -> usize {
        self.merges
    }

    /// Number of distinct segments
    pub fn segment_count(&self) -> usize {
        self.arena.live_count()
    }

    /// Id of the segment owning `coordinate`
    ///
    /// # Errors
    ///
    /// Returns `CoordinateOutOfBounds` if the coordinate is outside the tile
    pub fn segment_id_at(&self, coordinate: Coordinate) -> Result<SegmentId> {
        self.grid.owner(coordinate)
    }

    /// Segment owning `coordinate`
    ///
    /// # Errors
    ///
    /// Returns `CoordinateOutOfBounds` if the coordinate is outside the tile
    pub fn segment_at(&self, coordinate: Coordinate) -> Result<&Segment> {
        self.arena.get(self.grid.owner(coordinate)?)
    }

    /// Check whether two coordinates belong to the same segment
    ///
    /// Compares owner ids only; live segments never share an id.
    ///
    /// # Errors
    ///
    /// Returns `CoordinateOutOfBounds` if either coordinate is outside the tile
    pub fn same_segment(&self, a: Coordinate, b: Coordinate) -> Result<bool> {
        Ok(self.grid.owner(a)? == self.grid.owner(b)?)
    }

    /// Distinct segments in creation order
    pub fn segments(&self) -> impl Iterator<Item = (SegmentId, &Segment)> + '_ {
        self.arena
            .live_ids()
            .filter_map(move |id| self.arena.get(id).ok().map(|segment| (id, segment)))
    }

    /// Verify that the segments partition the tile
    ///
    /// Every grid cell must point to a live segment, every pixel of a live
    /// segment must point back to it, and each segment must own exactly as
    /// many cells as it has pixels.
    ///
    /// # Errors
    ///
    /// Returns a construction error describing the first violation found
    pub fn check_partition(&self) -> Result<()> {
        let mut owned_cells: HashMap<SegmentId, usize> = HashMap::new();
        for (coordinate, owner) in self.grid.cells() {
            if !self.arena.is_live(owner) {
                return Err(construction_error(&format!(
                    "pixel {coordinate} points to retired segment {owner}"
                )));
            }
            *owned_cells.entry(owner).or_default() += 1;
        }

        for (id, segment) in self.segments() {
            for &pixel in segment.pixels() {
                let owner = self.grid.owner(pixel)?;
                if owner != id {
                    return Err(construction_error(&format!(
                        "pixel {pixel} of segment {id} is owned by {owner}"
                    )));
                }
            }

            let cells = owned_cells.get(&id).copied().unwrap_or(0);
            if cells != segment.len() {
                return Err(construction_error(&format!(
                    "segment {id} has {} pixels but owns {cells} cells",
                    segment.len()
                )));
            }
        }

        Ok(())
    }
}
