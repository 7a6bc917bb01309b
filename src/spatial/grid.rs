//! Ownership lookup table from tile coordinates to segment ids
//!
//! Every cell names the segment that currently owns the pixel at that
//! coordinate. The engine keeps it consistent with the segment arena: when two
//! segments merge, every pixel of the result is repointed before the next
//! growth attempt reads the grid.

use ndarray::Array2;

use crate::io::error::{AlgorithmError, Result, construction_error};
use crate::segment::arena::SegmentId;
use crate::spatial::coordinate::Coordinate;

/// Square grid of segment ids indexed by `[y, x]`
#[derive(Debug, Clone)]
pub struct SegmentationGrid {
    owners: Array2<SegmentId>,
    size: usize,
}

impl SegmentationGrid {
    /// Build a grid from owners listed row by row
    ///
    /// # Errors
    ///
    /// Returns a construction error if `owners` does not hold exactly
    /// `size * size` entries
    pub fn from_row_major(size: usize, owners: Vec<SegmentId>) -> Result<Self> {
        let count = owners.len();
        let owners = Array2::from_shape_vec((size, size), owners).map_err(|e| {
            construction_error(&format!("{count} owners cannot fill a {size}x{size} grid: {e}"))
        })?;
        Ok(Self { owners, size })
    }

    /// Side length of the tile
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Segment owning the pixel at `coordinate`
    ///
    /// # Errors
    ///
    /// Returns `CoordinateOutOfBounds` if the coordinate is outside the tile
    pub fn owner(&self, coordinate: Coordinate) -> Result<SegmentId> {
        self.owners
            .get([coordinate.y, coordinate.x])
            .copied()
            .ok_or_else(|| self.out_of_bounds(coordinate))
    }

    /// Point the pixel at `coordinate` to a new owner
    ///
    /// # Errors
    ///
    /// Returns `CoordinateOutOfBounds` if the coordinate is outside the tile
    pub fn assign(&mut self, coordinate: Coordinate, owner: SegmentId) -> Result<()> {
        let error = self.out_of_bounds(coordinate);
        let cell = self
            .owners
            .get_mut([coordinate.y, coordinate.x])
            .ok_or(error)?;
        *cell = owner;
        Ok(())
    }

    /// Iterate `(coordinate, owner)` pairs in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, SegmentId)> + '_ {
        self.owners
            .indexed_iter()
            .map(|((y, x), &owner)| (Coordinate::new(x, y), owner))
    }

    const fn out_of_bounds(&self, coordinate: Coordinate) -> AlgorithmError {
        AlgorithmError::CoordinateOutOfBounds {
            x: coordinate.x,
            y: coordinate.y,
            size: self.size,
        }
    }
}
