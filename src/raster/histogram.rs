//! Color histogram over a whole raster

use crate::raster::buffer::Raster;
use image::Rgba;
use std::collections::BTreeMap;

/// Pixel count for one distinct RGBA value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistogramEntry {
    /// The counted color
    pub color: Rgba<u8>,
    /// Alpha component of the color
    pub alpha: u8,
    /// Number of pixels with exactly this color
    pub count: u64,
    /// Whether the entry was produced from pixel data
    pub verified: bool,
}

/// Count every distinct color in the raster
///
/// Entries are ordered by RGBA value so repeated calls give identical output.
pub fn histogram(raster: &Raster) -> Vec<HistogramEntry> {
    let mut counts: BTreeMap<[u8; 4], u64> = BTreeMap::new();
    for pixel in raster.pixels() {
        *counts.entry(pixel.0).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(rgba, count)| HistogramEntry {
            color: Rgba(rgba),
            alpha: rgba[3],
            count,
            verified: true,
        })
        .collect()
}
