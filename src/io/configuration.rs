//! Heuristic constants and runtime configuration defaults

// Color model
/// Maximum channel value on the quantum scale used for fuzz comparisons
pub const QUANTUM_RANGE: f64 = 65_535.0;
/// Factor mapping an 8-bit channel onto the quantum scale
pub const QUANTUM_PER_BYTE: f64 = 257.0;
/// Lower bound applied to every fuzz tolerance
pub const MINIMUM_FUZZ: f64 = std::f64::consts::FRAC_1_SQRT_2;
/// Alpha scale below which two colors compare as equivalent
pub const ALPHA_EPSILON: f64 = 1.0e-12;

// Corner sampling
/// Side length of each square corner sample region
pub const CORNER_WINDOW: u32 = 10;
/// Rows of each corner window that are classified, counted from the window's top edge
pub const CORNER_SAMPLE_ROWS: u32 = 1;

// Fuzz tolerances, empirically chosen
/// Tolerance for matching corner pixels against pure black or white
pub const CLASSIFICATION_FUZZ: f64 = 200.0;
/// Tolerance for flood-filling corner-connected background
pub const FLOODFILL_FUZZ: f64 = 1500.0;

// Level adjustment applied before measuring
/// Input black point as a fraction of the channel range
pub const LEVEL_BLACK_POINT: f64 = 0.9;
/// Input white point as a fraction of the channel range
pub const LEVEL_WHITE_POINT: f64 = 1.0;
/// Gamma applied between the black and white points
pub const LEVEL_GAMMA: f64 = 1.0;

// Output
/// Percentage scale for coverage and background values
pub const PERCENT: f64 = 100.0;
/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

// Progress bar display settings
/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
