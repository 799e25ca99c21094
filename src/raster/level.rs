//! Per-channel level adjustment

use crate::io::error::{Result, computation_error};
use crate::raster::buffer::Raster;
use crate::raster::color::Channels;

/// Linear stretch of the input range `[black_point, white_point]` onto the full channel range
///
/// Points are fractions of the channel range. Values outside the input range clip to 0 or 255;
/// `gamma` bends the curve between the two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Level {
    /// Channels the adjustment applies to
    pub channels: Channels,
    /// Input value mapped to zero
    pub black_point: f64,
    /// Input value mapped to full intensity
    pub white_point: f64,
    /// Midtone exponent, 1.0 for a linear mapping
    pub gamma: f64,
}

impl Level {
    /// Map a single 8-bit channel value through the curve
    pub fn map_value(&self, value: u8) -> u8 {
        let normalized = f64::from(value) / 255.0;
        let stretched = ((normalized - self.black_point) / (self.white_point - self.black_point))
            .clamp(0.0, 1.0)
            .powf(self.gamma.recip());
        (stretched * 255.0).round() as u8
    }

    /// Apply the adjustment to every pixel of the raster
    ///
    /// # Errors
    ///
    /// Returns an error if the white point does not exceed the black point or gamma is not
    /// strictly positive
    pub fn apply(&self, raster: &mut Raster) -> Result<()> {
        if self.white_point <= self.black_point {
            return Err(computation_error(
                "level",
                &format!(
                    "white point {} must exceed black point {}",
                    self.white_point, self.black_point
                ),
            ));
        }
        if self.gamma <= 0.0 || !self.gamma.is_finite() {
            return Err(computation_error(
                "level",
                &format!("gamma {} must be positive", self.gamma),
            ));
        }

        for pixel in raster.pixels_mut() {
            for (index, channel) in pixel.0.iter_mut().enumerate() {
                if self.channels.contains(index) {
                    *channel = self.map_value(*channel);
                }
            }
        }

        Ok(())
    }
}
