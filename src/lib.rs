//! Greedy region-growing segmentation of square image tiles
//!
//! The top-left `2^N x 2^N` tile of a multi-band image starts out with one
//! segment per pixel. Pixels are visited in a bit-interleaved dither order and
//! each visit tries to grow the pixel's segment into a 4-adjacent neighbour
//! whose merge cost is lowest and within a threshold. Passes repeat until one
//! finishes without a merge.

#![forbid(unsafe_code)]

/// Growth engine, neighbour selection and the converged result
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Exact per-band statistics
pub mod math;
/// Pixels, segments, their arena and the merge-cost metric
pub mod segment;
/// Coordinates, dither order and the ownership grid
pub mod spatial;

pub use algorithm::executor::{Segmentor, SegmentorConfig, segment_image};
pub use algorithm::segmentation::Segmentation;
pub use io::error::{AlgorithmError, Result};
