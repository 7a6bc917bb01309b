//! Error types for segmentation and its surrounding file operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all segmentation operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Source data doesn't meet segmentation requirements
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A pixel or segment was built from inconsistent parts
    ///
    /// Never produced by correct engine use:
    /// - a pixel without band data
    /// - segments with different band counts being merged
    SegmentConstruction {
        /// Description of the inconsistency
        reason: String,
    },

    /// Coordinate outside the tile was passed to the grid
    CoordinateOutOfBounds {
        /// Horizontal position
        x: usize,
        /// Vertical position
        y: usize,
        /// Side length of the tile
        size: usize,
    },

    /// Segment id refers to a segment that was already merged away
    StaleSegment {
        /// The retired segment id
        id: usize,
    },

    /// Growth passes kept merging past the configured bound
    NonConvergence {
        /// Number of passes executed
        passes: usize,
        /// Live segment count when the bound was hit
        segments: usize,
    },

    /// Failed to save output image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::SegmentConstruction { reason } => {
                write!(f, "Segment construction failed: {reason}")
            }
            Self::CoordinateOutOfBounds { x, y, size } => {
                write!(f, "Coordinate ({x}, {y}) is outside the {size}x{size} tile")
            }
            Self::StaleSegment { id } => {
                write!(f, "Segment {id} was already merged into another segment")
            }
            Self::NonConvergence { passes, segments } => {
                write!(
                    f,
                    "Segmentation did not converge after {passes} passes ({segments} segments left)"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for segmentation results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

impl From<image::ImageError> for AlgorithmError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for AlgorithmError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a segment construction error
pub fn construction_error(reason: &impl ToString) -> AlgorithmError {
    AlgorithmError::SegmentConstruction {
        reason: reason.to_string(),
    }
}

/// Create a path-related error for the command-line front end
pub fn io_error(msg: &str) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter: "path",
        value: String::new(),
        reason: msg.to_string(),
    }
}
