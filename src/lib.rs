//! # WebP Image Converter
//!
//! Batch converter turning raster images (JPEG, PNG, GIF, BMP, TIFF, WebP)
//! into lossy WebP files, with optional resizing and per-file status
//! tracking.
//!
//! ## Architecture:
//! - `config`: conversion parameters, validation, JSON persistence
//! - `task`: per-file lifecycle records and the batch summary
//! - `batch`: sequential batch orchestration with a background entry point
//! - `worker`: per-file pipeline (decode -> flatten -> resize -> encode)
//! - `color`: alpha flattening over a white background
//! - `resize`: percentage and preset-fit target dimension policies
//! - `codec`: image decoding and lossy WebP encoding
//! - `progress`: reporter trait, console bar, and event values
//! - `json_output`: JSON-lines protocol for programmatic supervisors
//! - `file_manager`: extension filtering and size formatting
//! - `error`: failure taxonomy for the pipeline
//!
//! ## Quick start:
//! ```no_run
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use webp_image_converter::{BatchRunner, ConversionConfig, NullReporter, ProgressReporter};
//!
//! # async fn run() -> Result<(), webp_image_converter::ConvertError> {
//! let config = ConversionConfig {
//!     quality: 85,
//!     output_folder: PathBuf::from("/out"),
//!     ..Default::default()
//! };
//!
//! let mut runner = BatchRunner::new(config);
//! runner.add_task(PathBuf::from("/photos/holiday.jpg"));
//!
//! let reporter: Arc<dyn ProgressReporter> = Arc::new(NullReporter);
//! let (runner, summary) = runner.run_in_background(reporter).await?;
//! println!("{}", summary.format_summary());
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod codec;
pub mod color;
pub mod config;
pub mod error;
pub mod file_manager;
pub mod json_output;
pub mod progress;
pub mod resize;
pub mod task;
pub mod worker;

pub use batch::{BatchRunner, RunState};
pub use config::{ConversionConfig, PresetSize, ResizeMode};
pub use error::ConvertError;
pub use json_output::{JsonMessage, JsonReporter};
pub use progress::{ConsoleReporter, NullReporter, ProgressReporter, TaskUpdate};
pub use task::{BatchSummary, ConversionOutcome, ConversionResult, ConversionTask, TaskStatus};
pub use worker::ConversionWorker;
