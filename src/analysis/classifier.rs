//! Black or white background decision from sampled corner pixels

use crate::raster::{BLACK, WHITE, is_similar};
use image::Rgba;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dominant background color of an image
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundColor {
    /// Predominantly black corners
    Black,
    /// Predominantly white corners, also the fallback when neither color is seen
    White,
}

impl BackgroundColor {
    /// Lowercase name as it appears in reports
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
        }
    }

    /// Opaque reference color used for comparison and flood-fill
    pub const fn reference(self) -> Rgba<u8> {
        match self {
            Self::Black => BLACK,
            Self::White => WHITE,
        }
    }
}

impl fmt::Display for BackgroundColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying a set of sampled pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
    /// Chosen background color
    pub color: BackgroundColor,
    /// Pixels resembling white
    pub white_count: usize,
    /// Pixels resembling black but not white
    pub black_count: usize,
}

/// Pick black only when black pixels strictly outnumber white ones
///
/// A sample with neither color present falls back to white.
pub const fn decide(white_count: usize, black_count: usize) -> BackgroundColor {
    if black_count > white_count && black_count > 0 {
        BackgroundColor::Black
    } else {
        BackgroundColor::White
    }
}

/// Count white-like and black-like pixels and decide the background color
///
/// White is tested first, so a pixel counts toward at most one color.
pub fn classify<I>(pixels: I, fuzz: f64) -> Classification
where
    I: IntoIterator<Item = Rgba<u8>>,
{
    let (mut white_count, mut black_count) = (0, 0);
    for pixel in pixels {
        if is_similar(pixel, WHITE, fuzz) {
            white_count += 1;
        } else if is_similar(pixel, BLACK, fuzz) {
            black_count += 1;
        }
    }

    Classification {
        color: decide(white_count, black_count),
        white_count,
        black_count,
    }
}
