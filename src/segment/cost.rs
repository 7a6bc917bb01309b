//! Merge cost: the size-weighted increase in band dispersion caused by
//! combining two segments

use crate::io::error::Result;
use crate::segment::segment::Segment;

/// Sum of the band standard deviations, scaled by the pixel count
pub fn segment_weight(segment: &Segment) -> f64 {
    segment.standard_deviations().iter().sum::<f64>() * segment.len() as f64
}

/// Cost of merging `a` and `b`; smaller means more compatible
///
/// Builds the combined segment without installing it anywhere. The parents'
/// cached statistics are reused. Symmetric in its arguments, bit for bit.
///
/// # Errors
///
/// Returns a construction error if the segments have different band counts
pub fn merge_cost(a: &Segment, b: &Segment) -> Result<f64> {
    let combined = Segment::merged(a, b)?;
    Ok(segment_weight(&combined) - (segment_weight(a) + segment_weight(b)))
}
