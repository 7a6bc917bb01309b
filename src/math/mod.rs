/// Band moments and standard deviations
pub mod statistics;

pub use statistics::BandMoments;
