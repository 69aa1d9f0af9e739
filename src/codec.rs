//! # Image Codec Module
//!
//! Decoding of source images and lossy WebP encoding.
//!
//! ## Responsibilities:
//! - `decode()`: open and decode a source file into an in-memory raster
//! - `encode()`: write an opaque RGB raster as lossy WebP at a given quality
//! - `output_path_for()`: deterministic output naming (`<stem>.webp` inside
//!   the output folder)
//!
//! Decoding goes through the `image` crate (JPEG/PNG/GIF/BMP/TIFF/WebP
//! inputs); encoding goes through libwebp via the `webp` crate, which is the
//! only quality-parameterized WebP encoder available in-process.
//!
//! Two distinct inputs sharing a base name map to the same output path and
//! silently overwrite each other, matching the original selection semantics.

use image::{DynamicImage, RgbImage};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::ConvertError;

/// Extension appended to every output file
pub const OUTPUT_EXTENSION: &str = "webp";

/// Decodes inputs and encodes lossy WebP output
pub struct ImageCodec;

impl ImageCodec {
    /// Decodes an input file into an in-memory raster.
    ///
    /// Fails with `ConvertError::Decode` on unreadable, corrupt or
    /// unsupported input.
    pub fn decode(path: &Path) -> Result<DynamicImage, ConvertError> {
        image::open(path).map_err(|source| ConvertError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Encodes an opaque RGB raster as lossy WebP at the given quality
    /// (1-100 scale, higher = larger/better) and writes it to `dest_path`.
    pub fn encode(raster: &RgbImage, quality: u8, dest_path: &Path) -> Result<(), ConvertError> {
        let encoder = webp::Encoder::from_rgb(raster.as_raw(), raster.width(), raster.height());
        let encoded = encoder
            .encode_simple(false, f32::from(quality))
            .map_err(|e| ConvertError::Encode {
                path: dest_path.to_path_buf(),
                reason: format!("WebP encoding failed: {:?}", e),
            })?;

        std::fs::write(dest_path, &*encoded).map_err(|e| ConvertError::Encode {
            path: dest_path.to_path_buf(),
            reason: format!("failed to write output: {}", e),
        })?;

        debug!(
            "Encoded {}x{} raster to {} ({} bytes, quality {})",
            raster.width(),
            raster.height(),
            dest_path.display(),
            encoded.len(),
            quality
        );

        Ok(())
    }

    /// Output path for a source file: the input's base name without its
    /// extension, with `.webp` appended, directly inside `output_folder`.
    pub fn output_path_for(source_path: &Path, output_folder: &Path) -> PathBuf {
        let stem = source_path.file_stem().unwrap_or_default();
        output_folder.join(format!("{}.{}", stem.to_string_lossy(), OUTPUT_EXTENSION))
    }
}
