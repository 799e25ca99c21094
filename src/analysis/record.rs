//! Per-image result record

use crate::analysis::classifier::BackgroundColor;
use crate::io::configuration::PERCENT;
use serde::{Deserialize, Serialize};

/// Analysis result for one image, serialized with the field names of the JSON report
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageInfo {
    /// Input path as given on the command line
    pub filename: String,
    /// Percentage of the image not reachable as corner-connected background
    pub coverage: f64,
    /// `100 - coverage`
    pub background: f64,
    /// Classified background color
    pub background_color: BackgroundColor,
    /// Decoded height in pixels
    pub height: u32,
    /// Decoded width in pixels
    pub width: u32,
}

impl ImageInfo {
    /// Build a record, deriving the background share from the coverage
    pub fn new(
        filename: impl Into<String>,
        coverage: f64,
        background_color: BackgroundColor,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            filename: filename.into(),
            coverage,
            background: PERCENT - coverage,
            background_color,
            height,
            width,
        }
    }
}
