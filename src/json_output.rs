//! # JSON Output Module
//!
//! Structured JSON-lines output for programmatic supervisors (Python or
//! Electron front ends driving the CLI).
//!
//! ## Responsibilities:
//! - Emits one structured JSON object per event on stdout
//! - Provides `JsonReporter`, a `ProgressReporter` speaking this protocol
//!
//! ## Message types:
//! - `start`: batch is about to run (task count, output folder, config)
//! - `task_update`: one task changed status
//! - `complete`: batch finished, with final counts
//! - `error`: the batch could not start

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConversionConfig, PresetSize, ResizeMode};
use crate::progress::{ProgressReporter, TaskUpdate};
use crate::task::{BatchSummary, TaskStatus};

/// JSON message type
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum JsonMessage {
    /// Batch is about to start
    #[serde(rename = "start")]
    Start {
        total_tasks: usize,
        output_folder: PathBuf,
        config: JsonConfig,
    },

    /// One task changed status
    #[serde(rename = "task_update")]
    TaskUpdate {
        index: usize,
        total: usize,
        completed: usize,
        display_name: String,
        status: TaskStatus,
    },

    /// Batch completed
    #[serde(rename = "complete")]
    Complete {
        converted_count: usize,
        failed_count: usize,
        output_folder: PathBuf,
    },

    /// Batch could not start
    #[serde(rename = "error")]
    Error { message: String },
}

/// Configuration echo included in the start message
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonConfig {
    pub quality: u8,
    pub resize_mode: ResizeMode,
    pub percentage_reduction: u8,
    pub preset_target: PresetSize,
}

impl From<&ConversionConfig> for JsonConfig {
    fn from(config: &ConversionConfig) -> Self {
        Self {
            quality: config.quality,
            resize_mode: config.resize_mode,
            percentage_reduction: config.percentage_reduction,
            preset_target: config.preset_target,
        }
    }
}

impl JsonMessage {
    /// Emit the JSON message on stdout
    pub fn emit(&self) {
        if let Ok(json) = serde_json::to_string(self) {
            println!("{}", json);
        }
    }

    /// Build a start message
    pub fn start(total_tasks: usize, config: &ConversionConfig) -> Self {
        JsonMessage::Start {
            total_tasks,
            output_folder: config.output_folder.clone(),
            config: JsonConfig::from(config),
        }
    }
}

/// Reporter emitting the JSON-lines protocol on stdout
pub struct JsonReporter;

impl ProgressReporter for JsonReporter {
    fn task_updated(&self, update: TaskUpdate) {
        JsonMessage::TaskUpdate {
            index: update.index,
            total: update.total,
            completed: update.completed,
            display_name: update.display_name,
            status: update.status,
        }
        .emit();
    }

    fn batch_completed(&self, summary: &BatchSummary) {
        JsonMessage::Complete {
            converted_count: summary.converted_count,
            failed_count: summary.failed_count,
            output_folder: summary.output_folder.clone(),
        }
        .emit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_update_serialization() {
        let message = JsonMessage::TaskUpdate {
            index: 2,
            total: 5,
            completed: 3,
            display_name: "photo.jpg".into(),
            status: TaskStatus::Failed { reason: "decode failed".into() },
        };

        let json = serde_json::to_string(&message).unwrap();
        assert!(json.contains("\"type\":\"task_update\""));
        assert!(json.contains("\"state\":\"failed\""));
        assert!(json.contains("decode failed"));
    }

    #[test]
    fn test_error_message_serialization() {
        let message = JsonMessage::Error {
            message: "precondition failed: output folder does not exist".into(),
        };

        let json = serde_json::to_string(&message).unwrap();
        assert!(json.contains("\"type\":\"error\""));
        assert!(json.contains("output folder does not exist"));
    }

    #[test]
    fn test_start_message_echoes_config() {
        let config = ConversionConfig {
            quality: 90,
            ..Default::default()
        };
        let json = serde_json::to_string(&JsonMessage::start(4, &config)).unwrap();
        assert!(json.contains("\"type\":\"start\""));
        assert!(json.contains("\"total_tasks\":4"));
        assert!(json.contains("\"quality\":90"));
    }
}
