//! Error types for image analysis and batch reporting

use std::fmt;
use std::path::PathBuf;

/// Main error type for all analysis operations
#[derive(Debug)]
pub enum AnalysisError {
    /// Failed to decode an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying decoder error
        source: image::ImageError,
    },

    /// Image is smaller than the corner sampling window
    ImageTooSmall {
        /// Path to the image file
        path: PathBuf,
        /// Decoded width in pixels
        width: u32,
        /// Decoded height in pixels
        height: u32,
        /// Minimum side length required
        minimum: u32,
    },

    /// Pixel access outside the image buffer
    RegionOutOfBounds {
        /// Left edge of the requested region
        x: u32,
        /// Top edge of the requested region
        y: u32,
        /// Requested region width
        width: u32,
        /// Requested region height
        height: u32,
        /// Dimensions of the image being accessed (width, height)
        image_dimensions: (u32, u32),
    },

    /// Numerical computation produced an invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Operating system refused to start a worker thread
    WorkerSpawn {
        /// Path the worker would have analyzed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Worker thread analyzing a file panicked
    WorkerPanicked {
        /// Path the worker was analyzing
        path: PathBuf,
    },

    /// Writing the report failed
    Output {
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Serializing the result records failed
    Serialization {
        /// Underlying serializer error
        source: serde_json::Error,
    },

    /// One or more files in the batch could not be analyzed
    BatchIncomplete {
        /// Number of files that failed
        failed: usize,
        /// Number of files in the batch
        total: usize,
    },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageTooSmall {
                path,
                width,
                height,
                minimum,
            } => {
                write!(
                    f,
                    "Image '{}' is {width}x{height}, both sides must be at least {minimum} pixels",
                    path.display()
                )
            }
            Self::RegionOutOfBounds {
                x,
                y,
                width,
                height,
                image_dimensions,
            } => {
                write!(
                    f,
                    "Region {width}x{height} at ({x}, {y}) exceeds image bounds {}x{}",
                    image_dimensions.0, image_dimensions.1
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::WorkerSpawn { path, source } => {
                write!(
                    f,
                    "Failed to start worker for '{}': {source}",
                    path.display()
                )
            }
            Self::WorkerPanicked { path } => {
                write!(f, "Worker analyzing '{}' panicked", path.display())
            }
            Self::Output { source } => write!(f, "Failed to write report: {source}"),
            Self::Serialization { source } => {
                write!(f, "Failed to serialize results: {source}")
            }
            Self::BatchIncomplete { failed, total } => {
                write!(f, "{failed} of {total} files could not be analyzed")
            }
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } => Some(source),
            Self::WorkerSpawn { source, .. } | Self::Output { source } => Some(source),
            Self::Serialization { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for analysis results
pub type Result<T> = std::result::Result<T, AnalysisError>;

impl From<std::io::Error> for AnalysisError {
    fn from(err: std::io::Error) -> Self {
        Self::Output { source: err }
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { source: err }
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> AnalysisError {
    AnalysisError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
