//! Coverage estimation by corner flood-fill and histogram measurement

use crate::analysis::classifier::BackgroundColor;
use crate::io::configuration::{LEVEL_BLACK_POINT, LEVEL_GAMMA, LEVEL_WHITE_POINT, PERCENT};
use crate::io::error::{Result, computation_error};
use crate::raster::{Channels, FloodFill, HistogramEntry, Level, Raster, TRANSPARENT, histogram};

/// Flood-fill seeds one pixel in from each corner, in fill order
///
/// The first seed is the bottom-right pixel itself.
pub const fn floodfill_seeds(width: u32, height: u32) -> [(u32, u32); 4] {
    let right = width.saturating_sub(1);
    let bottom = height.saturating_sub(1);
    [(right, bottom), (1, 1), (right, 1), (1, bottom)]
}

/// Percentage of verified pixels that are not fully transparent
///
/// # Errors
///
/// Returns an error if the histogram holds no verified pixels
pub fn measure_coverage(entries: &[HistogramEntry]) -> Result<f64> {
    let (transparent, total) = entries
        .iter()
        .filter(|entry| entry.verified)
        .fold((0_u64, 0_u64), |(transparent, total), entry| {
            let clear = if entry.alpha == 0 { entry.count } else { 0 };
            (transparent + clear, total + entry.count)
        });

    if total == 0 {
        return Err(computation_error(
            "coverage",
            &"histogram contains no verified pixels",
        ));
    }

    Ok(PERCENT - (transparent as f64 / total as f64 * PERCENT))
}

/// Clear corner-connected background to transparency and measure what remains
///
/// The raster is modified in place: background reachable from the corners becomes
/// transparent and the level adjustment is applied to the color channels.
///
/// # Errors
///
/// Returns an error if a seed lies outside the image or the histogram is empty
pub fn estimate_coverage(
    raster: &mut Raster,
    background: BackgroundColor,
    fuzz: f64,
) -> Result<f64> {
    let fill = FloodFill {
        channels: Channels::RGB | Channels::ALPHA,
        fill: TRANSPARENT,
        target: background.reference(),
        fuzz,
    };

    for seed in floodfill_seeds(raster.width(), raster.height()) {
        let painted = fill.paint(raster, seed)?;
        tracing::trace!(?seed, painted, "flood-filled corner region");
    }

    Level {
        channels: Channels::RGB,
        black_point: LEVEL_BLACK_POINT,
        white_point: LEVEL_WHITE_POINT,
        gamma: LEVEL_GAMMA,
    }
    .apply(raster)?;

    measure_coverage(&histogram(raster))
}
