//! Single-image pipeline: decode, classify the background, measure coverage

use crate::analysis::classifier::classify;
use crate::analysis::coverage::estimate_coverage;
use crate::analysis::record::ImageInfo;
use crate::analysis::sampler::{ensure_sampleable, sample_corners};
use crate::io::configuration::{CLASSIFICATION_FUZZ, FLOODFILL_FUZZ};
use crate::io::error::Result;
use crate::raster::Raster;
use std::path::Path;

/// Pipeline stages a single image passes through
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Reading and decoding the file
    Decode,
    /// Sampling the corners and picking black or white
    SampleAndClassify,
    /// Clearing corner-connected background and counting what remains
    FloodFillAndMeasure,
    /// Record produced
    Done,
}

/// Anything that turns a file path into an [`ImageInfo`]
///
/// Implementations are shared by reference across worker threads.
pub trait Analyze: Sync {
    /// Analyze the image stored at `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be analyzed
    fn analyze(&self, path: &Path) -> Result<ImageInfo>;
}

/// Background and coverage analyzer with its two similarity tolerances
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageAnalyzer {
    classification_fuzz: f64,
    floodfill_fuzz: f64,
}

impl Default for ImageAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageAnalyzer {
    /// Analyzer using the fixed heuristic tolerances
    pub const fn new() -> Self {
        Self {
            classification_fuzz: CLASSIFICATION_FUZZ,
            floodfill_fuzz: FLOODFILL_FUZZ,
        }
    }

    /// Tolerance used when matching corner pixels to black or white
    pub const fn classification_fuzz(&self) -> f64 {
        self.classification_fuzz
    }

    /// Tolerance used when flood-filling background
    pub const fn floodfill_fuzz(&self) -> f64 {
        self.floodfill_fuzz
    }

    /// Decode the file at `path` and analyze it
    ///
    /// # Errors
    ///
    /// Returns an error if decoding fails or the image is smaller than the corner window
    pub fn analyze_path(&self, path: &Path) -> Result<ImageInfo> {
        tracing::debug!(path = %path.display(), stage = ?Stage::Decode, "analyzing");
        let raster = Raster::open(path)?;
        self.analyze_image(path, raster)
    }

    /// Analyze an already decoded image, reporting it under `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the image is smaller than the corner window
    pub fn analyze_image(&self, path: &Path, mut raster: Raster) -> Result<ImageInfo> {
        let (width, height) = (raster.width(), raster.height());

        tracing::debug!(
            path = %path.display(),
            stage = ?Stage::SampleAndClassify,
            width,
            height
        );
        ensure_sampleable(path, &raster)?;
        let classification = classify(
            sample_corners(&raster)?.into_iter().flatten(),
            self.classification_fuzz,
        );
        tracing::debug!(
            path = %path.display(),
            white = classification.white_count,
            black = classification.black_count,
            color = %classification.color,
            "classified background"
        );

        tracing::debug!(path = %path.display(), stage = ?Stage::FloodFillAndMeasure);
        let coverage = estimate_coverage(&mut raster, classification.color, self.floodfill_fuzz)?;

        tracing::debug!(path = %path.display(), stage = ?Stage::Done, coverage);
        Ok(ImageInfo::new(
            path.to_string_lossy(),
            coverage,
            classification.color,
            width,
            height,
        ))
    }
}

impl Analyze for ImageAnalyzer {
    fn analyze(&self, path: &Path) -> Result<ImageInfo> {
        self.analyze_path(path)
    }
}
