//! Command-line interface for batch background analysis

use crate::analysis::ImageAnalyzer;
use crate::batch::orchestrator::{
    BatchOptions, BatchOrchestrator, BatchReport, ExecutionMode,
};
use crate::batch::report::{write_failures, write_report};
use crate::io::error::{AnalysisError, Result};
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "eyespye")]
#[command(
    author,
    version,
    about = "Classify image backgrounds as black or white and measure subject coverage"
)]
/// Command-line arguments for the background analysis tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Image files to analyze
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Analyze files one at a time, reporting them in input order
    #[arg(short, long)]
    pub sequential: bool,

    /// Abort the whole batch on the first file that cannot be analyzed
    #[arg(short, long)]
    pub fail_fast: bool,

    /// Omit the memory and runtime statistics after the results
    #[arg(short, long)]
    pub no_stats: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Scheduling strategy selected by the flags
    pub const fn mode(&self) -> ExecutionMode {
        if self.sequential {
            ExecutionMode::Sequential
        } else {
            ExecutionMode::Concurrent
        }
    }

    /// Check if the statistics block should be printed
    pub const fn show_stats(&self) -> bool {
        !self.no_stats
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Batch settings derived from the flags
    pub const fn batch_options(&self) -> BatchOptions {
        BatchOptions {
            mode: self.mode(),
            fail_fast: self.fail_fast,
            collect_memory: self.show_stats(),
        }
    }
}

/// Runs a batch from parsed arguments and prints the report
pub struct BatchRunner {
    cli: Cli,
    analyzer: ImageAnalyzer,
    progress_manager: ProgressManager,
}

impl BatchRunner {
    /// Create a runner for the given arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self {
            cli,
            analyzer: ImageAnalyzer::new(),
            progress_manager,
        }
    }

    /// Run the batch, printing results to stdout and failures to stderr
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be written, if `--fail-fast` aborted the batch,
    /// or after printing the report when any file failed
    pub fn run(&self) -> Result<()> {
        // Progress is drawn to stderr from worker threads, so stderr must stay unlocked
        let report = self.run_with(&mut std::io::stdout(), &mut std::io::stderr())?;

        if report.is_complete() {
            Ok(())
        } else {
            Err(AnalysisError::BatchIncomplete {
                failed: report.failures.len(),
                total: report.total(),
            })
        }
    }

    /// Run the batch, writing the report and failure lines to the given streams
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be written or `--fail-fast` aborted the batch
    pub fn run_with<O: Write, E: Write>(&self, out: &mut O, err: &mut E) -> Result<BatchReport> {
        let report = BatchOrchestrator::new(&self.analyzer, self.cli.batch_options())
            .with_progress(&self.progress_manager)
            .run(&self.cli.files)?;

        write_report(out, &report, self.cli.show_stats())?;
        write_failures(err, &report.failures)?;

        Ok(report)
    }
}
