//! Unit tests mirroring the `src/` module layout


/// Image builders shared by the unit tests
mod fixtures {
    use image::{Rgba, RgbaImage};
    use std::path::{Path, PathBuf};

    /// Opaque pure red, resembling neither black nor white
    pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    /// Image filled with `background` except for a `block` rectangle at `origin`
    pub fn framed(
        size: (u32, u32),
        background: Rgba<u8>,
        block: Rgba<u8>,
        origin: (u32, u32),
        block_size: (u32, u32),
    ) -> RgbaImage {
        RgbaImage::from_fn(size.0, size.1, |x, y| {
            let inside_x = x >= origin.0 && x < origin.0 + block_size.0;
            let inside_y = y >= origin.1 && y < origin.1 + block_size.1;
            if inside_x && inside_y {
                block
            } else {
                background
            }
        })
    }

    /// Save `image` as a PNG named `name` inside `dir`
    pub fn write_png(dir: &Path, name: &str, image: &RgbaImage) -> PathBuf {
        let path = dir.join(name);
        image.save(&path).unwrap();
        path
    }
}
