//! Id-indexed storage for the live segments of a segmentation
//!
//! The ownership grid stores `SegmentId`s rather than references. Merged-away
//! parents are retired: their slot is emptied and their id stops resolving.

use bitvec::prelude::*;
use std::fmt;

use crate::io::error::{AlgorithmError, Result};
use crate::segment::segment::Segment;

/// Handle of a segment inside a `SegmentArena`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(usize);

impl SegmentId {
    /// Slot index inside the arena
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owner of every segment created during a segmentation run
#[derive(Debug, Clone, Default)]
pub struct SegmentArena {
    slots: Vec<Option<Segment>>,
    live: BitVec,
}

impl SegmentArena {
    /// Create an empty arena
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty arena sized for `capacity` segments
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            live: BitVec::with_capacity(capacity),
        }
    }

    /// Store a segment and return its id
    pub fn insert(&mut self, segment: Segment) -> SegmentId {
        let id = SegmentId(self.slots.len());
        self.slots.push(Some(segment));
        self.live.push(true);
        id
    }

    /// Resolve a live segment
    ///
    /// # Errors
    ///
    /// Returns `StaleSegment` if the id was retired or never issued
    pub fn get(&self, id: SegmentId) -> Result<&Segment> {
        self.slots
            .get(id.0)
            .and_then(Option::as_ref)
            .ok_or(AlgorithmError::StaleSegment { id: id.0 })
    }

    /// Drop a segment that was merged into another one
    ///
    /// # Errors
    ///
    /// Returns `StaleSegment` if the id was already retired or never issued
    pub fn retire(&mut self, id: SegmentId) -> Result<Segment> {
        let segment = self
            .slots
            .get_mut(id.0)
            .and_then(Option::take)
            .ok_or(AlgorithmError::StaleSegment { id: id.0 })?;
        self.live.set(id.0, false);
        Ok(segment)
    }

    /// Check whether an id still resolves
    pub fn is_live(&self, id: SegmentId) -> bool {
        self.live.get(id.0).as_deref() == Some(&true)
    }

    /// Number of live segments
    pub fn live_count(&self) -> usize {
        self.live.count_ones()
    }

    /// Ids of live segments in creation order
    pub fn live_ids(&self) -> impl Iterator<Item = SegmentId> + '_ {
        self.live.iter_ones().map(SegmentId)
    }

    /// Total number of segments ever inserted, live or retired
    pub const fn created_count(&self) -> usize {
        self.slots.len()
    }

    /// Structural equality of two live segments
    ///
    /// # Errors
    ///
    /// Returns `StaleSegment` if either id does not resolve
    pub fn structurally_equal(&self, a: SegmentId, b: SegmentId) -> Result<bool> {
        if a == b {
            return Ok(true);
        }
        Ok(self.get(a)? == self.get(b)?)
    }
}
