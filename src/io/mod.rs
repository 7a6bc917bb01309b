//! Input/output surfaces around the segmentation engine
//!
//! Image loading, overlay export, progress display and the command line all
//! live here, together with the crate-wide error type and tuning constants.

/// Command-line interface and batch processing
pub mod cli;
/// Default parameters and display constants
pub mod configuration;
/// Error types used across the crate
pub mod error;
/// Colour sources and image loading
pub mod image;
/// Progress bars for batch runs
pub mod progress;
/// Boundary overlays and size tables
pub mod visualization;
