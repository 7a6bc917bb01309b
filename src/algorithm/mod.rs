/// Growth engine driving passes to the fixpoint
pub mod executor;
/// 4-adjacent segment lookup
pub mod neighbors;
/// Read-only converged result
pub mod segmentation;
/// Best-neighbour selection by merge cost
pub mod selection;
