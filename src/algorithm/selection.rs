use crate::{
    algorithm::neighbors::neighbors,
    io::error::Result,
    segment::{
        arena::{SegmentArena, SegmentId},
        cost::merge_cost,
    },
    spatial::grid::SegmentationGrid,
};

/// Neighbour paired with its merge cost against the subject segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredNeighbor {
    /// The neighbouring segment
    pub id: SegmentId,
    /// Cost of merging it with the subject
    pub cost: f64,
}

/// Neighbours whose merge cost is within `threshold`, in discovery order
///
/// Neighbours structurally equal to the subject are skipped.
///
/// # Errors
///
/// Returns an error if any involved id is stale or the segments have
/// different band counts
pub fn eligible_neighbors(
    grid: &SegmentationGrid,
    arena: &SegmentArena,
    segment: SegmentId,
    threshold: f64,
) -> Result<Vec<ScoredNeighbor>> {
    let subject = arena.get(segment)?;
    let mut eligible = Vec::new();

    for candidate in neighbors(grid, arena, segment)? {
        if arena.structurally_equal(segment, candidate)? {
            continue;
        }

        let cost = merge_cost(subject, arena.get(candidate)?)?;
        if cost <= threshold {
            eligible.push(ScoredNeighbor {
                id: candidate,
                cost,
            });
        }
    }

    Ok(eligible)
}

/// Eligible neighbours tied at the lowest merge cost
///
/// Ties are exact; the result keeps discovery order, so its first element is
/// the deterministic choice wherever one member has to be picked. Empty when
/// no neighbour is within `threshold`.
///
/// # Errors
///
/// Returns an error if any involved id is stale or the segments have
/// different band counts
pub fn best_neighbors(
    grid: &SegmentationGrid,
    arena: &SegmentArena,
    segment: SegmentId,
    threshold: f64,
) -> Result<Vec<SegmentId>> {
    let eligible = eligible_neighbors(grid, arena, segment, threshold)?;

    let minimum = eligible
        .iter()
        .map(|scored| scored.cost)
        .fold(f64::INFINITY, f64::min);

    // Exact ties only; costs are computed identically from both sides
    #[allow(clippy::float_cmp)]
    let best = eligible
        .into_iter()
        .filter(|scored| scored.cost == minimum)
        .map(|scored| scored.id)
        .collect();

    Ok(best)
}
