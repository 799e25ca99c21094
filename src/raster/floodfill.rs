//! Seeded flood-fill painting of connected, similarly colored regions

use crate::io::error::{AnalysisError, Result};
use crate::raster::buffer::Raster;
use crate::raster::color::{Channels, is_similar};
use bitvec::prelude::*;
use image::Rgba;

/// Parameters for a single flood-fill paint operation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloodFill {
    /// Channels overwritten with the fill color
    pub channels: Channels,
    /// Color painted over the matching region
    pub fill: Rgba<u8>,
    /// Color a pixel must resemble to be painted
    pub target: Rgba<u8>,
    /// Similarity tolerance on the quantum scale
    pub fuzz: f64,
}

impl FloodFill {
    /// Paint the 4-connected region of pixels similar to the target that contains `seed`
    ///
    /// Nothing is painted when the seed pixel itself does not match. Each pixel is tested
    /// against its color before painting, so a fill color resembling the target cannot
    /// spread past the matching region.
    ///
    /// Returns the number of painted pixels.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed lies outside the image
    pub fn paint(&self, raster: &mut Raster, seed: (u32, u32)) -> Result<usize> {
        let (width, height) = (raster.width(), raster.height());
        let (seed_x, seed_y) = seed;
        if seed_x >= width || seed_y >= height {
            return Err(AnalysisError::RegionOutOfBounds {
                x: seed_x,
                y: seed_y,
                width: 1,
                height: 1,
                image_dimensions: (width, height),
            });
        }

        let index = |x: u32, y: u32| y as usize * width as usize + x as usize;
        let mut visited = bitvec![0; raster.pixel_count()];
        visited.set(index(seed_x, seed_y), true);

        let mut pending = vec![seed];
        let mut painted = 0;

        while let Some((x, y)) = pending.pop() {
            let Some(pixel) = raster.pixel_mut(x, y) else {
                continue;
            };
            if !is_similar(*pixel, self.target, self.fuzz) {
                continue;
            }
            self.channels.apply(pixel, self.fill);
            painted += 1;

            let neighbours = [
                x.checked_sub(1).map(|left| (left, y)),
                (x + 1 < width).then_some((x + 1, y)),
                y.checked_sub(1).map(|up| (x, up)),
                (y + 1 < height).then_some((x, y + 1)),
            ];
            for (nx, ny) in neighbours.into_iter().flatten() {
                if !visited.replace(index(nx, ny), true) {
                    pending.push((nx, ny));
                }
            }
        }

        Ok(painted)
    }
}
