//! # Conversion Worker Module
//!
//! Per-file pipeline worker, separated from the batch orchestrator.
//!
//! The pipeline is decode -> color normalization -> resize policy -> encode.
//! Any failure short-circuits the remaining stages and is reported as a
//! `Failure` outcome with a human-readable cause; encode is the last stage,
//! so failures before it never touch the filesystem.
//!
//! The worker holds no state across tasks: it receives one task and the
//! batch configuration, and returns an outcome.

use image::imageops::{self, FilterType};
use std::path::PathBuf;
use tracing::debug;

use crate::codec::ImageCodec;
use crate::color;
use crate::config::ConversionConfig;
use crate::error::ConvertError;
use crate::resize::{self, ResizeDecision};
use crate::task::{ConversionOutcome, ConversionTask};

/// Runs single tasks through the conversion pipeline
pub struct ConversionWorker;

impl ConversionWorker {
    /// Runs one task through the full pipeline, catching every per-task
    /// error at this boundary.
    pub fn run(task: &ConversionTask, config: &ConversionConfig) -> ConversionOutcome {
        match Self::convert(task, config) {
            Ok(output_path) => ConversionOutcome::Success { output_path },
            Err(e) => ConversionOutcome::Failure { message: e.to_string() },
        }
    }

    fn convert(task: &ConversionTask, config: &ConversionConfig) -> Result<PathBuf, ConvertError> {
        let decoded = ImageCodec::decode(&task.source_path)?;
        debug!(
            "Decoded {} ({}x{}, {:?})",
            task.display_name,
            decoded.width(),
            decoded.height(),
            decoded.color()
        );

        let mut raster = color::flatten_to_rgb(&decoded);

        let decision = resize::compute_target_dimensions(raster.width(), raster.height(), config);
        if let ResizeDecision::Exact { width, height } = decision {
            debug!(
                "Resizing {} from {}x{} to {}x{}",
                task.display_name,
                raster.width(),
                raster.height(),
                width,
                height
            );
            raster = imageops::resize(&raster, width, height, FilterType::Lanczos3);
        }

        let output_path = ImageCodec::output_path_for(&task.source_path, &config.output_folder);
        ImageCodec::encode(&raster, config.quality, &output_path)?;

        Ok(output_path)
    }
}
