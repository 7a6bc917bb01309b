//! Segment data model
//!
//! This module contains:
//! - Pixels and band transposition
//! - Immutable segments with cached statistics
//! - The id-indexed segment arena
//! - The merge-cost metric

/// Id-indexed segment storage
pub mod arena;
/// Merge cost evaluation
pub mod cost;
/// Pixels and their colour bands
pub mod pixel;
/// Immutable pixel groups
#[allow(clippy::module_inception)]
pub mod segment;

pub use arena::{SegmentArena, SegmentId};
pub use cost::merge_cost;
pub use pixel::Pixel;
pub use segment::Segment;
