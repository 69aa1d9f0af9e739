//! # Resize Policy Module
//!
//! Pure computation of target dimensions for a conversion, given the source
//! dimensions and the active resize configuration. No pixels are touched
//! here; applying the decision is the worker's job.
//!
//! ## Modes:
//! - **Percentage**: shrink both axes by `percentage_reduction` percent.
//!   A reduction of 0 means no resize at all.
//! - **PresetFit**: scale to fit within the preset target while preserving
//!   the aspect ratio exactly. A hysteresis band of [1.0, 1.1] skips resizes
//!   that would be a no-op or a pointless slight upscale.
//!
//! Resampling (in the worker) uses Lanczos, never nearest-neighbor, so that
//! downscales stay free of visible aliasing.

use crate::config::{ConversionConfig, ResizeMode};

/// Scale factors within this band are skipped: the image already fits the
/// preset closely enough that a resize would only degrade it.
const HYSTERESIS_MIN: f64 = 1.0;
const HYSTERESIS_MAX: f64 = 1.1;

/// Decision produced by the resize policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeDecision {
    /// Resample to exactly these dimensions
    Exact { width: u32, height: u32 },
    /// Keep the source dimensions untouched
    NoResize,
}

/// Computes the target dimensions for a source image under the given
/// configuration.
pub fn compute_target_dimensions(
    source_width: u32,
    source_height: u32,
    config: &ConversionConfig,
) -> ResizeDecision {
    match config.resize_mode {
        ResizeMode::Percentage => {
            if config.percentage_reduction == 0 {
                return ResizeDecision::NoResize;
            }
            let factor = 1.0 - f64::from(config.percentage_reduction) / 100.0;
            ResizeDecision::Exact {
                width: scale_dimension(source_width, factor),
                height: scale_dimension(source_height, factor),
            }
        }
        ResizeMode::PresetFit => {
            let width_ratio = f64::from(config.preset_target.width) / f64::from(source_width);
            let height_ratio = f64::from(config.preset_target.height) / f64::from(source_height);
            let scale = width_ratio.min(height_ratio);

            if (HYSTERESIS_MIN..=HYSTERESIS_MAX).contains(&scale) {
                return ResizeDecision::NoResize;
            }

            ResizeDecision::Exact {
                width: scale_dimension(source_width, scale),
                height: scale_dimension(source_height, scale),
            }
        }
    }
}

/// Floors a scaled dimension, clamped to at least 1 pixel so extreme
/// reductions of tiny or very elongated images never produce an
/// unencodable zero-sized raster.
fn scale_dimension(source: u32, factor: f64) -> u32 {
    ((f64::from(source) * factor) as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PresetSize;

    fn percentage_config(reduction: u8) -> ConversionConfig {
        ConversionConfig {
            resize_mode: ResizeMode::Percentage,
            percentage_reduction: reduction,
            ..Default::default()
        }
    }

    fn preset_config(width: u32, height: u32) -> ConversionConfig {
        ConversionConfig {
            resize_mode: ResizeMode::PresetFit,
            preset_target: PresetSize::new(width, height),
            ..Default::default()
        }
    }

    #[test]
    fn test_zero_reduction_never_resizes() {
        let config = percentage_config(0);
        for (w, h) in [(1, 1), (500, 500), (4000, 3000), (10_000, 1)] {
            assert_eq!(compute_target_dimensions(w, h, &config), ResizeDecision::NoResize);
        }
    }

    #[test]
    fn test_percentage_floors_both_axes() {
        let config = percentage_config(30);
        // 1001 * 0.7 = 700.7 -> 700, 333 * 0.7 = 233.1 -> 233
        assert_eq!(
            compute_target_dimensions(1001, 333, &config),
            ResizeDecision::Exact { width: 700, height: 233 }
        );

        let config = percentage_config(50);
        assert_eq!(
            compute_target_dimensions(801, 601, &config),
            ResizeDecision::Exact { width: 400, height: 300 }
        );
    }

    #[test]
    fn test_preset_fit_downscales_to_limiting_axis() {
        // scale = min(600/500, 400/500) = 0.8, outside the band
        let config = preset_config(600, 400);
        assert_eq!(
            compute_target_dimensions(500, 500, &config),
            ResizeDecision::Exact { width: 400, height: 400 }
        );
    }

    #[test]
    fn test_preset_fit_hysteresis_band_skips_resize() {
        // scale = 540/500 = 1.08, inside [1.0, 1.1]
        let config = preset_config(540, 540);
        assert_eq!(compute_target_dimensions(500, 500, &config), ResizeDecision::NoResize);

        // scale exactly 1.0 also skips
        let config = preset_config(500, 500);
        assert_eq!(compute_target_dimensions(500, 500, &config), ResizeDecision::NoResize);
    }

    #[test]
    fn test_preset_fit_upscales_beyond_band() {
        // scale = 1000/500 = 2.0, above the band, so the upscale is applied
        let config = preset_config(1000, 1000);
        assert_eq!(
            compute_target_dimensions(500, 500, &config),
            ResizeDecision::Exact { width: 1000, height: 1000 }
        );
    }

    #[test]
    fn test_preset_fit_preserves_aspect_ratio() {
        // 1600x1200 into 800x500: scale = min(0.5, 0.41666) = 5/12
        let config = preset_config(800, 500);
        match compute_target_dimensions(1600, 1200, &config) {
            ResizeDecision::Exact { width, height } => {
                assert_eq!(width, 666);
                assert_eq!(height, 500);
                let source_ratio = 1600.0 / 1200.0;
                let target_ratio = f64::from(width) / f64::from(height);
                assert!((source_ratio - target_ratio).abs() < 0.01);
            }
            ResizeDecision::NoResize => panic!("expected a resize"),
        }
    }

    #[test]
    fn test_scaled_dimensions_never_reach_zero() {
        // 1 * 0.3 floors to 0 without the clamp
        let config = percentage_config(70);
        assert_eq!(
            compute_target_dimensions(1, 1, &config),
            ResizeDecision::Exact { width: 1, height: 1 }
        );

        // 1 * 0.01 floors to 0 without the clamp
        let config = preset_config(100, 100);
        assert_eq!(
            compute_target_dimensions(10_000, 1, &config),
            ResizeDecision::Exact { width: 100, height: 1 }
        );
    }

    #[test]
    fn test_preset_fit_result_fits_within_target() {
        let config = preset_config(1200, 800);
        for (w, h) in [(4000, 3000), (3000, 4000), (5000, 100), (100, 5000)] {
            if let ResizeDecision::Exact { width, height } = compute_target_dimensions(w, h, &config) {
                assert!(width <= 1200, "{}x{} -> width {}", w, h, width);
                assert!(height <= 800, "{}x{} -> height {}", w, h, height);
            }
        }
    }
}
