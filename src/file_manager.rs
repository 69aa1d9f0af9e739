//! # File Management Module
//!
//! Small helpers around the batch's input files.
//!
//! ## Responsibilities:
//! - Determining whether a path looks like a supported raster image
//! - Reading source file sizes for task listings
//! - Human-readable size formatting (KB, MB, GB)
//!
//! ## Supported input formats:
//! JPG, JPEG, PNG, BMP, GIF, TIFF, WebP - the set the decoder can open.

use std::path::Path;

/// Manages file inspection helpers
pub struct FileManager;

impl FileManager {
    /// Check if a path carries a supported raster image extension
    pub fn is_supported_image(path: &Path) -> bool {
        if let Some(ext) = path.extension() {
            let ext_lower = ext.to_string_lossy().to_lowercase();
            matches!(
                ext_lower.as_str(),
                "jpg" | "jpeg" | "png" | "bmp" | "gif" | "tiff" | "tif" | "webp"
            )
        } else {
            false
        }
    }

    /// Size of a file in bytes, 0 if it cannot be read
    pub fn file_size(path: &Path) -> u64 {
        std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
    }

    /// Get human-readable file size
    pub fn format_size(size: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = size as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", size as u64, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_supported_extensions() {
        assert!(FileManager::is_supported_image(Path::new("a.jpg")));
        assert!(FileManager::is_supported_image(Path::new("a.JPEG")));
        assert!(FileManager::is_supported_image(Path::new("a.png")));
        assert!(FileManager::is_supported_image(Path::new("a.tiff")));
        assert!(!FileManager::is_supported_image(Path::new("a.mp4")));
        assert!(!FileManager::is_supported_image(Path::new("noext")));
    }

    #[test]
    fn test_format_size() {
        assert_eq!(FileManager::format_size(0), "0 B");
        assert_eq!(FileManager::format_size(512), "512 B");
        assert_eq!(FileManager::format_size(2048), "2.00 KB");
        assert_eq!(FileManager::format_size(5 * 1024 * 1024), "5.00 MB");
    }

    #[test]
    fn test_file_size_missing_file() {
        assert_eq!(FileManager::file_size(&PathBuf::from("/no/such/file")), 0);
    }
}
