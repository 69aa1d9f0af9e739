//! # Batch Runner Module
//!
//! Orchestrates one conversion run over an ordered list of tasks.
//!
//! ## Responsibilities:
//! - Owns the task list and the configuration for the run's lifetime
//! - Deduplicates added paths (adding a duplicate is a no-op)
//! - Enforces the Idle -> Running -> Completed state machine
//! - Processes tasks strictly in selection order, one at a time
//! - Notifies the `ProgressReporter` after every status change and at
//!   batch completion
//!
//! ## Execution model:
//! `run()` is a blocking sequential loop; `run_in_background()` moves the
//! whole runner onto a dedicated blocking worker so the caller's async
//! context stays free. Ownership of the runner travels with the worker and
//! comes back with the summary, so no live task list is ever shared across
//! threads - observers only see immutable event values.
//!
//! ## Failure policy:
//! Precondition failures (empty batch, invalid config) reject the run
//! before any task executes. Per-task failures are recorded on the task
//! and never stop the batch: every task always runs.

use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::ConversionConfig;
use crate::error::ConvertError;
use crate::progress::{ProgressReporter, TaskUpdate};
use crate::task::{BatchSummary, ConversionOutcome, ConversionResult, ConversionTask, TaskStatus};
use crate::worker::ConversionWorker;

/// State machine for one batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Completed,
}

/// Owns the ordered task list and executes the conversion batch.
pub struct BatchRunner {
    tasks: Vec<ConversionTask>,
    config: ConversionConfig,
    state: RunState,
}

impl BatchRunner {
    /// Creates an idle runner for the given configuration.
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            tasks: Vec::new(),
            config,
            state: RunState::Idle,
        }
    }

    /// Adds a source path to the batch, keeping selection order.
    ///
    /// Returns false (a no-op) if the path is already in the batch.
    pub fn add_task(&mut self, source_path: PathBuf) -> bool {
        if self.tasks.iter().any(|t| t.source_path == source_path) {
            debug!("Ignoring duplicate path: {}", source_path.display());
            return false;
        }
        self.tasks.push(ConversionTask::new(source_path));
        true
    }

    /// Adds several paths, returning how many were actually added.
    pub fn add_tasks<I>(&mut self, source_paths: I) -> usize
    where
        I: IntoIterator<Item = PathBuf>,
    {
        source_paths
            .into_iter()
            .filter(|path| self.add_task(path.clone()))
            .count()
    }

    /// Current tasks in selection order. Per-task failure reasons stay
    /// queryable here after a run.
    pub fn tasks(&self) -> &[ConversionTask] {
        &self.tasks
    }

    /// Configuration for this batch.
    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Current run state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Drops all tasks and returns the runner to `Idle`.
    pub fn clear(&mut self) {
        self.tasks.clear();
        self.state = RunState::Idle;
    }

    /// Runs the whole batch sequentially on the calling thread.
    ///
    /// Rejected with `ConvertError::Precondition` before any task executes
    /// if the batch is empty, already running, or the configuration is
    /// invalid. Per-task failures never abort the run: every task is
    /// processed in selection order and ends in a terminal status.
    pub fn run(&mut self, reporter: &dyn ProgressReporter) -> Result<BatchSummary, ConvertError> {
        if self.state == RunState::Running {
            return Err(ConvertError::Precondition("batch is already running".into()));
        }
        if self.tasks.is_empty() {
            return Err(ConvertError::Precondition("no files selected for conversion".into()));
        }
        self.config
            .validate()
            .map_err(|e| ConvertError::Precondition(e.to_string()))?;

        self.state = RunState::Running;
        let total = self.tasks.len();
        info!("Starting conversion of {} files (quality: {})", total, self.config.quality);

        // Reruns start from a clean slate
        for task in &mut self.tasks {
            task.status = TaskStatus::Ready;
        }

        let mut results = Vec::with_capacity(total);

        for index in 0..total {
            self.tasks[index].status = TaskStatus::Converting;
            reporter.task_updated(self.update_for(index, index));

            let outcome = ConversionWorker::run(&self.tasks[index], &self.config);

            self.tasks[index].status = match &outcome {
                ConversionOutcome::Success { .. } => TaskStatus::Converted,
                ConversionOutcome::Failure { message } => {
                    TaskStatus::Failed { reason: message.clone() }
                }
            };
            reporter.task_updated(self.update_for(index, index + 1));

            results.push(ConversionResult {
                task: self.tasks[index].clone(),
                outcome,
            });
        }

        let summary = BatchSummary::from_results(&results, &self.config.output_folder);
        self.state = RunState::Completed;
        info!(
            "Conversion complete: {} converted, {} failed",
            summary.converted_count, summary.failed_count
        );
        reporter.batch_completed(&summary);

        Ok(summary)
    }

    /// Runs the batch on a dedicated blocking worker, leaving the caller's
    /// async context free. The runner travels with the worker and is handed
    /// back together with the summary.
    pub async fn run_in_background(
        mut self,
        reporter: Arc<dyn ProgressReporter>,
    ) -> Result<(Self, BatchSummary), ConvertError> {
        tokio::task::spawn_blocking(move || {
            let summary = self.run(reporter.as_ref())?;
            Ok((self, summary))
        })
        .await
        .map_err(|e| ConvertError::Unexpected(format!("batch worker failed: {}", e)))?
    }

    fn update_for(&self, index: usize, completed: usize) -> TaskUpdate {
        TaskUpdate {
            index,
            total: self.tasks.len(),
            completed,
            display_name: self.tasks[index].display_name.clone(),
            status: self.tasks[index].status.clone(),
        }
    }
}
