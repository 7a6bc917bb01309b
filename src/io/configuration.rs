//! Segmentation constants and runtime configuration defaults

// Defaults match the 32x32 tile and threshold the segmenter was tuned on
/// Default tile exponent (tile side is `2^exponent`)
pub const DEFAULT_EXPONENT: u32 = 5;

/// Default merge-cost ceiling
pub const DEFAULT_THRESHOLD: f64 = 800.0;

// Keeps the pixel arena and the u128 moment arithmetic comfortably in range
/// Largest accepted tile exponent
pub const MAX_EXPONENT: u32 = 12;

/// Number of colour bands read from decoded images (red, green, blue)
pub const RGB_BAND_COUNT: usize = 3;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_segmented";
/// Colour used to paint segment boundaries in the overlay
pub const BOUNDARY_COLOR: [u8; 3] = [0, 0, 255];
/// File extensions picked up when the target is a directory
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["png", "tif", "tiff", "bmp"];
