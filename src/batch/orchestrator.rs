//! Fan-out of per-image analysis over a batch and fan-in of the results

use crate::analysis::{Analyze, ImageInfo};
use crate::batch::memory::MemoryStats;
use crate::io::error::{AnalysisError, Result, computation_error};
use crate::io::progress::ProgressManager;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread;
use std::time::{Duration, Instant};

/// How the files of a batch are scheduled
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExecutionMode {
    /// One thread per file, results in completion order
    #[default]
    Concurrent,
    /// One file at a time, results in input order
    Sequential,
}

/// Batch execution settings
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchOptions {
    /// Scheduling strategy
    pub mode: ExecutionMode,
    /// Abort the batch on the first failing file instead of collecting failures
    pub fail_fast: bool,
    /// Read process memory statistics after the batch completes
    pub collect_memory: bool,
}

/// A file whose analysis did not produce a record
#[derive(Debug)]
pub struct FileFailure {
    /// Path as given in the batch
    pub path: PathBuf,
    /// Reason the analysis failed
    pub error: AnalysisError,
}

/// Everything a finished batch produced
#[derive(Debug)]
pub struct BatchReport {
    /// Successful records, in completion order (concurrent) or input order (sequential)
    pub records: Vec<ImageInfo>,
    /// Files that could not be analyzed
    pub failures: Vec<FileFailure>,
    /// Wall-clock time spent analyzing
    pub elapsed: Duration,
    /// Process memory statistics, when requested and available
    pub memory: Option<MemoryStats>,
}

impl BatchReport {
    /// Number of files the batch covered
    pub fn total(&self) -> usize {
        self.records.len() + self.failures.len()
    }

    /// Whether every file produced a record
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Text carried by a panic payload, if it was raised with a message
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string payload".to_string())
}

// Result of one unit of work, handed from a worker to the aggregator
struct Outcome {
    path: PathBuf,
    result: Result<ImageInfo>,
}

#[derive(Default)]
struct Collected {
    records: Vec<ImageInfo>,
    failures: Vec<FileFailure>,
}

impl Collected {
    fn absorb(&mut self, outcome: Outcome, fail_fast: bool) -> Result<()> {
        match outcome.result {
            Ok(info) => {
                tracing::debug!(path = %outcome.path.display(), coverage = info.coverage, "image analyzed");
                self.records.push(info);
            }
            Err(error) if fail_fast => return Err(error),
            Err(error) => {
                tracing::warn!(path = %outcome.path.display(), %error, "image analysis failed");
                self.failures.push(FileFailure {
                    path: outcome.path,
                    error,
                });
            }
        }
        Ok(())
    }
}

/// Runs an analyzer over every file of a batch
pub struct BatchOrchestrator<'a, A: Analyze> {
    analyzer: &'a A,
    options: BatchOptions,
    progress: Option<&'a ProgressManager>,
}

impl<'a, A: Analyze> BatchOrchestrator<'a, A> {
    /// Create an orchestrator without progress display
    pub const fn new(analyzer: &'a A, options: BatchOptions) -> Self {
        Self {
            analyzer,
            options,
            progress: None,
        }
    }

    /// Advance `progress` as each file completes
    #[must_use]
    pub const fn with_progress(mut self, progress: &'a ProgressManager) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Analyze every file and gather the results
    ///
    /// # Errors
    ///
    /// With `fail_fast`, returns the first analysis error. Otherwise fails only if a worker
    /// thread cannot be started or the aggregator itself panics.
    pub fn run(&self, files: &[PathBuf]) -> Result<BatchReport> {
        tracing::info!(files = files.len(), mode = ?self.options.mode, "starting batch");
        if let Some(progress) = self.progress {
            progress.initialize(files.len());
        }

        let start = Instant::now();
        let collected = match self.options.mode {
            ExecutionMode::Concurrent => self.run_concurrent(files)?,
            ExecutionMode::Sequential => self.run_sequential(files)?,
        };
        let elapsed = start.elapsed();

        if let Some(progress) = self.progress {
            progress.finish();
        }

        let memory = if self.options.collect_memory {
            MemoryStats::current()
        } else {
            None
        };

        tracing::info!(
            records = collected.records.len(),
            failures = collected.failures.len(),
            elapsed_ms = elapsed.as_millis(),
            "batch finished"
        );

        Ok(BatchReport {
            records: collected.records,
            failures: collected.failures,
            elapsed,
            memory,
        })
    }

    fn run_sequential(&self, files: &[PathBuf]) -> Result<Collected> {
        let mut collected = Collected::default();
        for path in files {
            let outcome = self.analyze_isolated(path);
            self.mark_complete(&outcome.path);
            collected.absorb(outcome, self.options.fail_fast)?;
        }
        Ok(collected)
    }

    // Every worker owns a clone of the sender; the aggregator stops once the last one is
    // dropped, so each unit of work signals completion exactly once.
    fn run_concurrent(&self, files: &[PathBuf]) -> Result<Collected> {
        thread::scope(|scope| {
            let (sender, receiver) = mpsc::sync_channel::<Outcome>(0);

            let aggregator = thread::Builder::new()
                .name("eyespye-aggregator".to_string())
                .spawn_scoped(scope, move || self.aggregate(receiver))
                .map_err(|e| computation_error("aggregator", &e))?;

            for (index, path) in files.iter().enumerate() {
                let worker_sender: SyncSender<Outcome> = sender.clone();
                thread::Builder::new()
                    .name(format!("eyespye-worker-{index}"))
                    .spawn_scoped(scope, move || {
                        let outcome = self.analyze_isolated(path);
                        // A closed channel means the aggregator already aborted the batch
                        let _ = worker_sender.send(outcome);
                    })
                    .map_err(|e| AnalysisError::WorkerSpawn {
                        path: path.clone(),
                        source: e,
                    })?;
            }
            drop(sender);

            aggregator
                .join()
                .map_err(|payload| {
                    computation_error(
                        "aggregator",
                        &format!("result aggregator panicked: {}", panic_message(payload.as_ref())),
                    )
                })?
        })
    }

    fn aggregate(&self, receiver: Receiver<Outcome>) -> Result<Collected> {
        let mut collected = Collected::default();
        for outcome in receiver {
            self.mark_complete(&outcome.path);
            collected.absorb(outcome, self.options.fail_fast)?;
        }
        Ok(collected)
    }

    fn analyze_isolated(&self, path: &Path) -> Outcome {
        let result = panic::catch_unwind(AssertUnwindSafe(|| self.analyzer.analyze(path)))
            .unwrap_or_else(|_| {
                Err(AnalysisError::WorkerPanicked {
                    path: path.to_path_buf(),
                })
            });
        Outcome {
            path: path.to_path_buf(),
            result,
        }
    }

    fn mark_complete(&self, path: &Path) {
        if let Some(progress) = self.progress {
            progress.complete_file(path);
        }
    }
}
