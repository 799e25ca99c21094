/// Process memory statistics
pub mod memory;
/// Concurrent and sequential batch execution
pub mod orchestrator;
/// Report rendering for stdout and stderr
pub mod report;

pub use memory::MemoryStats;
pub use orchestrator::{BatchOptions, BatchOrchestrator, BatchReport, ExecutionMode, FileFailure};
