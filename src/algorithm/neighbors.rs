//! Adjacency between segments through the ownership grid

use crate::io::error::Result;
use crate::segment::arena::{SegmentArena, SegmentId};
use crate::spatial::grid::SegmentationGrid;
use std::collections::HashSet;

/// Distinct segments owning a pixel 4-adjacent to any pixel of `segment`
///
/// Order is discovery order: member pixels in stored order, and for each one
/// its left, right, upper and lower neighbour. The segment's own id is never
/// reported, so the result is empty when the segment covers the whole tile.
///
/// # Errors
///
/// Returns `StaleSegment` if `segment` was already merged away
pub fn neighbors(
    grid: &SegmentationGrid,
    arena: &SegmentArena,
    segment: SegmentId,
) -> Result<Vec<SegmentId>> {
    let size = grid.size();
    let mut seen = HashSet::from([segment]);
    let mut found = Vec::new();

    for &pixel in arena.get(segment)?.pixels() {
        for adjacent in pixel.adjacent_within(size) {
            let owner = grid.owner(adjacent)?;
            if seen.insert(owner) {
                found.push(owner);
            }
        }
    }

    Ok(found)
}
