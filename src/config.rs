//! # Configuration Management Module
//!
//! This module owns the conversion configuration shared by a whole batch run.
//!
//! ## Responsibilities:
//! - Defines the `ConversionConfig` struct with all conversion parameters
//! - Provides robust validation of input parameters
//! - Supports loading/saving the configuration from/to a JSON file
//! - Parses preset dimensions from `"<width>x<height>"` strings
//!
//! ## Configuration parameters:
//! - `quality`: WebP quality (10-100, default: 80)
//! - `resize_mode`: `Percentage` or `PresetFit` (default: Percentage)
//! - `percentage_reduction`: Size reduction percent (0-70, default: 0)
//! - `preset_target`: Target dimensions for PresetFit (default: 1200x800)
//! - `output_folder`: Directory receiving the converted files
//!
//! ## Validation:
//! - quality must be 10-100
//! - percentage_reduction must be 0-70
//! - preset_target must have both dimensions > 0
//! - output_folder must be set and be an existing directory
//!
//! ## Example:
//! ```no_run
//! use std::path::PathBuf;
//! use webp_image_converter::config::ConversionConfig;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = ConversionConfig {
//!     quality: 85,
//!     percentage_reduction: 25,
//!     output_folder: PathBuf::from("/out"),
//!     ..Default::default()
//! };
//! config.validate()?;
//! # Ok(())
//! # }
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// How target dimensions are derived from the source dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeMode {
    /// Shrink both axes by a fixed percentage (0 = keep original size).
    Percentage,
    /// Fit within preset dimensions while preserving aspect ratio.
    PresetFit,
}

/// Fixed target dimensions for `ResizeMode::PresetFit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetSize {
    pub width: u32,
    pub height: u32,
}

impl PresetSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl FromStr for PresetSize {
    type Err = anyhow::Error;

    /// Parses the `"<width>x<height>"` form used by the preset dropdown
    /// (e.g. "1200x800").
    fn from_str(s: &str) -> Result<Self> {
        let (w, h) = s
            .split_once('x')
            .ok_or_else(|| anyhow::anyhow!("Invalid preset size (expected <width>x<height>): {}", s))?;
        let width = w.trim().parse::<u32>()
            .map_err(|_| anyhow::anyhow!("Invalid preset width: {}", w))?;
        let height = h.trim().parse::<u32>()
            .map_err(|_| anyhow::anyhow!("Invalid preset height: {}", h))?;
        Ok(Self { width, height })
    }
}

impl fmt::Display for PresetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Configuration for one batch conversion run.
///
/// Immutable for the duration of a run; the `BatchRunner` takes it by value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// WebP quality (10-100, higher = larger/better)
    pub quality: u8,
    /// Active resize policy
    pub resize_mode: ResizeMode,
    /// Percentage reduction (0-70, only used in Percentage mode)
    pub percentage_reduction: u8,
    /// Target dimensions (only used in PresetFit mode)
    pub preset_target: PresetSize,
    /// Directory receiving the converted `.webp` files
    pub output_folder: PathBuf,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            quality: 80,
            resize_mode: ResizeMode::Percentage,
            percentage_reduction: 0,
            preset_target: PresetSize::new(1200, 800),
            output_folder: PathBuf::new(),
        }
    }
}

impl ConversionConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.quality < 10 || self.quality > 100 {
            return Err(anyhow::anyhow!("WebP quality must be between 10 and 100"));
        }

        if self.percentage_reduction > 70 {
            return Err(anyhow::anyhow!("Percentage reduction must be between 0 and 70"));
        }

        if self.preset_target.width == 0 || self.preset_target.height == 0 {
            return Err(anyhow::anyhow!("Preset dimensions must be greater than zero"));
        }

        if self.output_folder.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("Output folder is not set"));
        }

        if !self.output_folder.exists() {
            return Err(anyhow::anyhow!(
                "Output folder does not exist: {}",
                self.output_folder.display()
            ));
        }

        if !self.output_folder.is_dir() {
            return Err(anyhow::anyhow!(
                "Output folder is not a directory: {}",
                self.output_folder.display()
            ));
        }

        Ok(())
    }

    /// Load configuration from file.
    ///
    /// A missing file yields the defaults; a present file is validated after
    /// deserializing, so out-of-range persisted values are rejected at load
    /// time instead of surfacing mid-batch.
    pub async fn from_file(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = tokio::fs::read_to_string(path).await?;
        let config: ConversionConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub async fn save_to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, content).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn valid_config(output: &std::path::Path) -> ConversionConfig {
        ConversionConfig {
            output_folder: output.to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn test_config_validation() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = valid_config(temp_dir.path());
        assert!(config.validate().is_ok());

        config.quality = 9;
        assert!(config.validate().is_err());
        config.quality = 101;
        assert!(config.validate().is_err());

        config.quality = 80;
        config.percentage_reduction = 71;
        assert!(config.validate().is_err());

        config.percentage_reduction = 70;
        assert!(config.validate().is_ok());

        config.preset_target = PresetSize::new(0, 800);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_rejects_missing_output_folder() {
        let config = ConversionConfig::default();
        assert!(config.validate().is_err());

        let config = ConversionConfig {
            output_folder: PathBuf::from("/no/such/folder/exists/here"),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_preset_size_parsing() {
        let size: PresetSize = "1200x800".parse().unwrap();
        assert_eq!(size, PresetSize::new(1200, 800));

        let size: PresetSize = "600x400".parse().unwrap();
        assert_eq!(size.to_string(), "600x400");

        assert!("1200".parse::<PresetSize>().is_err());
        assert!("x800".parse::<PresetSize>().is_err());
        assert!("axb".parse::<PresetSize>().is_err());
    }

    #[tokio::test]
    async fn test_from_file_rejects_out_of_range_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");

        let invalid = ConversionConfig {
            quality: 5,
            output_folder: temp_dir.path().to_path_buf(),
            ..Default::default()
        };
        // save_to_file does not validate, so the bad value lands on disk
        invalid.save_to_file(&config_path).await.unwrap();

        assert!(ConversionConfig::from_file(&config_path).await.is_err());
    }

    #[tokio::test]
    async fn test_from_file_missing_path_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("does-not-exist.json");

        let loaded = ConversionConfig::from_file(&config_path).await.unwrap();
        assert_eq!(loaded.quality, ConversionConfig::default().quality);
    }

    #[tokio::test]
    async fn test_config_save_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");

        let original = ConversionConfig {
            quality: 85,
            resize_mode: ResizeMode::PresetFit,
            percentage_reduction: 30,
            preset_target: PresetSize::new(800, 500),
            output_folder: temp_dir.path().to_path_buf(),
        };

        original.save_to_file(&config_path).await.unwrap();
        let loaded = ConversionConfig::from_file(&config_path).await.unwrap();

        assert_eq!(loaded.quality, 85);
        assert_eq!(loaded.resize_mode, ResizeMode::PresetFit);
        assert_eq!(loaded.percentage_reduction, 30);
        assert_eq!(loaded.preset_target, PresetSize::new(800, 500));
        assert_eq!(loaded.output_folder, temp_dir.path());
    }
}
