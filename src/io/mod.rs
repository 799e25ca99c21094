/// Command-line parsing and the batch runner
pub mod cli;
/// Fixed heuristic constants and defaults
pub mod configuration;
/// Error type and result alias
pub mod error;
/// Tracing subscriber setup
pub mod logging;
/// Batch progress display
pub mod progress;
