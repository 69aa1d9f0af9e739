//! # Color Normalization Module
//!
//! Maps an arbitrary decoded image to a fully opaque three-channel RGB
//! representation suitable for lossy encoding.
//!
//! ## Rules:
//! - Images with an alpha channel (including palette images, which the
//!   decoder already expands to full RGBA) are composited over an opaque
//!   white background using the alpha channel as the blend mask
//! - Any other non-RGB representation (grayscale, 16-bit, etc.) is converted
//!   directly to RGB without compositing
//! - RGB images pass through unchanged
//!
//! This function is total over all decodable inputs: there are no error
//! conditions.

use image::{DynamicImage, RgbImage};

/// Flattens any decoded image into opaque 8-bit RGB.
pub fn flatten_to_rgb(image: &DynamicImage) -> RgbImage {
    if image.color().has_alpha() {
        composite_over_white(image)
    } else {
        image.to_rgb8()
    }
}

/// Composites a translucent image onto an opaque white backdrop of identical
/// dimensions, using its alpha channel as the blend mask.
fn composite_over_white(image: &DynamicImage) -> RgbImage {
    let rgba = image.to_rgba8();
    let mut flattened = RgbImage::new(rgba.width(), rgba.height());

    for (src, dst) in rgba.pixels().zip(flattened.pixels_mut()) {
        let alpha = src[3] as u16;
        let inverse = 255 - alpha;
        for channel in 0..3 {
            // Rounded alpha blend against white: c*a + 255*(1-a)
            let blended = (src[channel] as u16 * alpha + 255 * inverse + 127) / 255;
            dst[channel] = blended as u8;
        }
    }

    flattened
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, Rgba, RgbaImage};

    #[test]
    fn test_rgb_passes_through() {
        let mut rgb = RgbImage::new(4, 4);
        rgb.put_pixel(1, 1, Rgb([10, 20, 30]));
        let normalized = flatten_to_rgb(&DynamicImage::ImageRgb8(rgb.clone()));
        assert_eq!(normalized, rgb);
    }

    #[test]
    fn test_fully_transparent_becomes_white() {
        let rgba = RgbaImage::from_pixel(3, 3, Rgba([200, 50, 50, 0]));
        let normalized = flatten_to_rgb(&DynamicImage::ImageRgba8(rgba));
        for pixel in normalized.pixels() {
            assert_eq!(*pixel, Rgb([255, 255, 255]));
        }
    }

    #[test]
    fn test_opaque_alpha_keeps_color() {
        let rgba = RgbaImage::from_pixel(2, 2, Rgba([200, 50, 50, 255]));
        let normalized = flatten_to_rgb(&DynamicImage::ImageRgba8(rgba));
        for pixel in normalized.pixels() {
            assert_eq!(*pixel, Rgb([200, 50, 50]));
        }
    }

    #[test]
    fn test_half_transparent_blends_toward_white() {
        let rgba = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 128]));
        let normalized = flatten_to_rgb(&DynamicImage::ImageRgba8(rgba));
        let pixel = normalized.get_pixel(0, 0);
        // 0*128/255 + 255*127/255 rounds to 127
        assert_eq!(*pixel, Rgb([127, 127, 127]));
    }

    #[test]
    fn test_grayscale_converts_without_compositing() {
        let gray = image::GrayImage::from_pixel(2, 2, image::Luma([90]));
        let normalized = flatten_to_rgb(&DynamicImage::ImageLuma8(gray));
        for pixel in normalized.pixels() {
            assert_eq!(*pixel, Rgb([90, 90, 90]));
        }
    }
}
