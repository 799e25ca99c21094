//! Batch analysis of raster images: black or white background classification and
//! subject coverage estimation
//!
//! Corner pixels decide whether the background is black or white, corner-seeded flood-fills
//! clear the background connected to the frame, and whatever remains opaque is reported as
//! coverage. Batches run one thread per image with a single result aggregator.

#![forbid(unsafe_code)]

/// Per-image classification and coverage pipeline
pub mod analysis;
/// Concurrent and sequential batch execution with reporting
pub mod batch;
/// Command-line interface, configuration, errors and logging
pub mod io;
/// Decoded pixel buffers and the color operations the analysis is built on
pub mod raster;

pub use analysis::{BackgroundColor, ImageAnalyzer, ImageInfo};
pub use io::error::{AnalysisError, Result};
