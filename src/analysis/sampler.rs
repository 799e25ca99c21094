//! Corner region sampling

use crate::io::configuration::{CORNER_SAMPLE_ROWS, CORNER_WINDOW};
use crate::io::error::{AnalysisError, Result};
use crate::raster::{Raster, Region};
use std::path::Path;

/// One of the four image corners
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Anchored at (0, 0)
    TopLeft,
    /// Anchored at (W - window, 0)
    TopRight,
    /// Anchored at (0, H - window)
    BottomLeft,
    /// Anchored at (W - window, H - window)
    BottomRight,
}

impl Corner {
    /// All corners in sampling order
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Top-left coordinate of a `window`-sized square in this corner
    ///
    /// Saturates at zero for images narrower than the window, which
    /// [`Raster::region`] then rejects as out of bounds.
    pub const fn origin(self, width: u32, height: u32, window: u32) -> (u32, u32) {
        let right = width.saturating_sub(window);
        let bottom = height.saturating_sub(window);
        match self {
            Self::TopLeft => (0, 0),
            Self::TopRight => (right, 0),
            Self::BottomLeft => (0, bottom),
            Self::BottomRight => (right, bottom),
        }
    }
}

/// Check that both sides of the image can hold a corner window
///
/// # Errors
///
/// Returns [`AnalysisError::ImageTooSmall`] when either side is shorter than
/// [`CORNER_WINDOW`]
pub fn ensure_sampleable(path: &Path, raster: &Raster) -> Result<()> {
    if raster.width() < CORNER_WINDOW || raster.height() < CORNER_WINDOW {
        return Err(AnalysisError::ImageTooSmall {
            path: path.to_path_buf(),
            width: raster.width(),
            height: raster.height(),
            minimum: CORNER_WINDOW,
        });
    }
    Ok(())
}

/// Borrow the leading rows of the four `CORNER_WINDOW` squares in [`Corner::ALL`] order
///
/// Each region spans the full window width but only its first [`CORNER_SAMPLE_ROWS`] rows.
///
/// # Errors
///
/// Returns an error if the image is smaller than the window in either dimension
pub fn sample_corners(raster: &Raster) -> Result<Vec<Region<'_>>> {
    Corner::ALL
        .into_iter()
        .map(|corner| {
            let (x, y) = corner.origin(raster.width(), raster.height(), CORNER_WINDOW);
            raster.region(x, y, CORNER_WINDOW, CORNER_SAMPLE_ROWS)
        })
        .collect()
}
