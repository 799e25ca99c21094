//! Background classification and coverage estimation for a single image

/// Per-image pipeline and the [`analyzer::Analyze`] seam used by the batch runner
pub mod analyzer;
/// Black or white background decision
pub mod classifier;
/// Corner flood-fill and transparent-pixel measurement
pub mod coverage;
/// Result record for one image
pub mod record;
/// Fixed corner region sampling
pub mod sampler;

pub use analyzer::{Analyze, ImageAnalyzer, Stage};
pub use classifier::{BackgroundColor, Classification};
pub use record::ImageInfo;
