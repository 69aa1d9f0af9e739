//! # Error Types Module
//!
//! This module defines the custom error types used across the conversion
//! pipeline.
//!
//! ## Error categories:
//! - `Precondition`: Batch cannot start (empty task list, missing output folder)
//! - `Decode`: Unreadable, corrupt or unsupported source image
//! - `Encode`: WebP encoding failed or destination is unwritable
//! - `Io`: Plain I/O failures outside decode/encode
//! - `Unexpected`: Catch-all for anything else inside a task's pipeline
//!
//! ## Propagation policy:
//! `Precondition` aborts a run before any task executes. All per-task errors
//! are caught at the `ConversionWorker` boundary and recorded on that task's
//! result; they never abort the batch.

use std::path::PathBuf;

/// Custom error types for batch image conversion
#[derive(thiserror::Error, Debug)]
pub enum ConvertError {
    #[error("precondition failed: {0}")]
    Precondition(String),

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode {path}: {reason}")]
    Encode { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected error: {0}")]
    Unexpected(String),
}
