/// Decoded pixel buffer and rectangular region views
pub mod buffer;
/// Quantum color scale, channel sets and fuzzy equivalence
pub mod color;
/// Connected-region flood-fill painting
pub mod floodfill;
/// Color histogram extraction
pub mod histogram;
/// Per-channel level adjustment
pub mod level;

pub use buffer::{Raster, Region};
pub use color::{BLACK, Channels, TRANSPARENT, WHITE, is_similar};
pub use floodfill::FloodFill;
pub use histogram::{HistogramEntry, histogram};
pub use level::Level;
