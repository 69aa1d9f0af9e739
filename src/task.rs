//! # Task and Result Types Module
//!
//! This module defines the per-file bookkeeping records of a batch run.
//!
//! ## Responsibilities:
//! - `ConversionTask`: one selected source file plus its lifecycle status
//! - `TaskStatus`: Ready -> Converting -> Converted | Failed(reason)
//! - `ConversionResult`: immutable outcome record, produced once per task
//! - `BatchSummary`: aggregate counts derived by folding all results
//!
//! Tasks are created when a path is added to the batch, mutated only by the
//! `BatchRunner` during execution, and discarded when the batch is cleared.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::file_manager::FileManager;

/// Lifecycle status of a single conversion task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TaskStatus {
    /// Added to the batch, not yet processed
    Ready,
    /// Currently running through the pipeline
    Converting,
    /// Output file written successfully
    Converted,
    /// Pipeline failed; carries a human-readable cause
    Failed { reason: String },
}

impl TaskStatus {
    /// True for `Converted` and `Failed`, the two end states of a run.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Converted | TaskStatus::Failed { .. })
    }
}

/// One source file selected for conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionTask {
    /// Absolute path of the source image
    pub source_path: PathBuf,
    /// File name shown in listings and progress messages
    pub display_name: String,
    /// Size of the source file in bytes (0 if it could not be read)
    pub source_size_bytes: u64,
    /// Current lifecycle status
    pub status: TaskStatus,
}

impl ConversionTask {
    /// Creates a `Ready` task for a source path, capturing its display name
    /// and current size on disk.
    pub fn new(source_path: PathBuf) -> Self {
        let display_name = source_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| source_path.to_string_lossy().into_owned());
        let source_size_bytes = FileManager::file_size(&source_path);

        Self {
            source_path,
            display_name,
            source_size_bytes,
            status: TaskStatus::Ready,
        }
    }

    /// Human-readable source size (e.g. "2.35 MB")
    pub fn format_source_size(&self) -> String {
        FileManager::format_size(self.source_size_bytes)
    }
}

/// Outcome of running one task through the conversion pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ConversionOutcome {
    Success { output_path: PathBuf },
    Failure { message: String },
}

/// Immutable record pairing a task snapshot with its outcome.
///
/// Produced exactly once per task per run; never mutated afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionResult {
    pub task: ConversionTask,
    pub outcome: ConversionOutcome,
}

impl ConversionResult {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, ConversionOutcome::Success { .. })
    }
}

/// Aggregate counts for a completed batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub converted_count: usize,
    pub failed_count: usize,
    pub output_folder: PathBuf,
}

impl BatchSummary {
    /// Folds all results of a run into the final counts.
    pub fn from_results(results: &[ConversionResult], output_folder: &Path) -> Self {
        let converted_count = results.iter().filter(|r| r.is_success()).count();
        Self {
            converted_count,
            failed_count: results.len() - converted_count,
            output_folder: output_folder.to_path_buf(),
        }
    }

    pub fn format_summary(&self) -> String {
        format!(
            "Converted: {} | Failed: {} | Output: {}",
            self.converted_count,
            self.failed_count,
            self.output_folder.display()
        )
    }
}
