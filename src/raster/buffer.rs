//! Decoded RGBA pixel buffer with bounds-checked region access

use crate::io::error::{AnalysisError, Result};
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Decoded image held as 8-bit RGBA, opaque formats gaining a full alpha channel
#[derive(Clone, Debug)]
pub struct Raster {
    pixels: RgbaImage,
}

impl Raster {
    /// Decode an image file in any format the `image` crate recognizes
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|e| AnalysisError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self::from_rgba(decoded.to_rgba8()))
    }

    /// Wrap an existing RGBA buffer
    pub const fn from_rgba(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    /// Create a raster where every pixel has the same color
    pub fn filled(width: u32, height: u32, color: Rgba<u8>) -> Self {
        Self::from_rgba(RgbaImage::from_pixel(width, height, color))
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Total number of pixels
    pub fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Color at a coordinate, `None` outside the image
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.pixels.get_pixel_checked(x, y).copied()
    }

    pub(crate) fn pixel_mut(&mut self, x: u32, y: u32) -> Option<&mut Rgba<u8>> {
        self.pixels.get_pixel_mut_checked(x, y)
    }

    /// Iterate every pixel in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = Rgba<u8>> + '_ {
        self.pixels.pixels().copied()
    }

    pub(crate) fn pixels_mut(&mut self) -> impl Iterator<Item = &mut Rgba<u8>> + '_ {
        self.pixels.pixels_mut()
    }

    /// Borrow the underlying buffer
    pub const fn as_rgba(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Read-only row-major view over a rectangle of the image
    ///
    /// # Errors
    ///
    /// Returns an error if any part of the rectangle lies outside the image
    pub fn region(&self, x: u32, y: u32, width: u32, height: u32) -> Result<Region<'_>> {
        let fits = |origin: u32, extent: u32, limit: u32| {
            origin
                .checked_add(extent)
                .is_some_and(|end| end <= limit)
        };

        if !fits(x, width, self.width()) || !fits(y, height, self.height()) {
            return Err(AnalysisError::RegionOutOfBounds {
                x,
                y,
                width,
                height,
                image_dimensions: (self.width(), self.height()),
            });
        }

        Ok(Region {
            raster: self,
            x,
            y,
            width,
            height,
            cursor: 0,
        })
    }
}

/// Row-major iterator over a validated rectangle of a [`Raster`]
#[derive(Clone, Debug)]
pub struct Region<'a> {
    raster: &'a Raster,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    cursor: u64,
}

impl Region<'_> {
    /// Region origin (x, y)
    pub const fn origin(&self) -> (u32, u32) {
        (self.x, self.y)
    }

    /// Region size (width, height)
    pub const fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    const fn len_total(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl Iterator for Region<'_> {
    type Item = Rgba<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.len_total() {
            return None;
        }
        let dx = (self.cursor % u64::from(self.width)) as u32;
        let dy = (self.cursor / u64::from(self.width)) as u32;
        self.cursor += 1;
        self.raster.pixel(self.x + dx, self.y + dy)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len_total().saturating_sub(self.cursor) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Region<'_> {}
