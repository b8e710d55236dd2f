//! Image loading, conversion, and encoding helpers.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbImage};

use crate::core::errors::{DetectError, DetectResult};

/// Loads an image from disk as RGB.
///
/// # Errors
///
/// Returns [`DetectError::ImageLoad`] if the file cannot be read or decoded.
pub fn load_image(path: impl AsRef<Path>) -> DetectResult<RgbImage> {
    let dynamic = image::open(path.as_ref())?;
    Ok(dynamic_to_rgb(dynamic))
}

/// Converts a dynamic image to RGB, discarding any alpha channel.
pub fn dynamic_to_rgb(image: DynamicImage) -> RgbImage {
    match image {
        DynamicImage::ImageRgb8(rgb) => rgb,
        other => other.to_rgb8(),
    }
}

/// Encodes an RGB image as PNG, the raster format handed to the
/// classification service.
///
/// # Errors
///
/// Returns [`DetectError::Encode`] if encoding fails.
pub fn encode_png(image: &RgbImage) -> DetectResult<Vec<u8>> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(DetectError::Encode)?;
    Ok(bytes)
}
