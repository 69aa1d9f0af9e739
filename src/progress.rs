//! # Progress Reporting Module
//!
//! This module defines the capability interface the batch runner reports
//! through, plus the console implementation.
//!
//! ## Responsibilities:
//! - `ProgressReporter`: trait the runner calls after every status change
//!   and at batch completion
//! - `TaskUpdate`: immutable event value describing one status change
//! - `ConsoleReporter`: visual progress bar via `indicatif`
//! - `NullReporter`: no-op implementation for embedding and tests
//!
//! The runner only ever hands out immutable event values; a presentation
//! layer is responsible for marshaling them onto its own execution context.
//!
//! ## Visual feedback:
//! ```text
//! ⠋ [00:00:02] [=======================>----------------] 12/20 (60%) [OK] photo.jpg
//! ```

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::task::{BatchSummary, TaskStatus};

/// Immutable snapshot of one task status change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskUpdate {
    /// Zero-based position of the task in selection order
    pub index: usize,
    /// Total number of tasks in the batch
    pub total: usize,
    /// Number of tasks that have reached a terminal status so far
    pub completed: usize,
    /// File name of the task being reported
    pub display_name: String,
    /// Status the task just transitioned to
    pub status: TaskStatus,
}

/// Capability interface for observing a batch run.
///
/// Called by the `BatchRunner` from its background execution context; all
/// payloads are immutable values, safe to forward across threads.
pub trait ProgressReporter: Send + Sync {
    /// Called after every per-task status change.
    fn task_updated(&self, update: TaskUpdate);

    /// Called once after the last task, with the final counts.
    fn batch_completed(&self, summary: &BatchSummary);
}

/// Reporter that ignores every event.
pub struct NullReporter;

impl ProgressReporter for NullReporter {
    fn task_updated(&self, _update: TaskUpdate) {}
    fn batch_completed(&self, _summary: &BatchSummary) {}
}

/// Console progress bar reporter
pub struct ConsoleReporter {
    bar: ProgressBar,
}

impl ConsoleReporter {
    /// Create a console reporter for a batch of `total_tasks` files
    pub fn new(total_tasks: u64) -> Self {
        let bar = ProgressBar::new(total_tasks);

        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
                .unwrap()
                .progress_chars("=>-"),
        );

        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }
}

impl ProgressReporter for ConsoleReporter {
    fn task_updated(&self, update: TaskUpdate) {
        match update.status {
            TaskStatus::Converting => {
                self.bar.set_message(format!("Converting {}...", update.display_name));
            }
            TaskStatus::Converted => {
                self.bar.set_position(update.completed as u64);
                self.bar.set_message(format!("[OK] {}", update.display_name));
            }
            TaskStatus::Failed { ref reason } => {
                self.bar.set_position(update.completed as u64);
                self.bar.set_message(format!("[ERROR] {}: {}", update.display_name, reason));
            }
            TaskStatus::Ready => {}
        }
    }

    fn batch_completed(&self, summary: &BatchSummary) {
        self.bar.finish_with_message(summary.format_summary());
    }
}
