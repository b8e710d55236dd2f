//! Rectangle-based image cropping.

use image::{imageops, RgbImage};

use crate::core::errors::{DetectError, DetectResult};
use crate::processors::geometry::Rect;

/// Crops a rectangle out of an RGB image.
///
/// The crop is an exact pixel copy of the source region; no resampling or
/// color conversion is applied.
///
/// # Errors
///
/// Returns [`DetectError::InvalidInput`] if the rectangle is empty or
/// extends beyond the image.
pub fn crop_rect(image: &RgbImage, rect: Rect) -> DetectResult<RgbImage> {
    let (width, height) = image.dimensions();
    if !rect.fits_within(width, height) {
        return Err(DetectError::invalid_input(format!(
            "crop rectangle ({}, {}, {}, {}) does not fit in {}x{} image",
            rect.x, rect.y, rect.w, rect.h, width, height
        )));
    }

    // Immutable zero-copy view, then materialize.
    Ok(imageops::crop_imm(image, rect.x, rect.y, rect.w, rect.h).to_image())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    fn create_test_image(width: u32, height: u32) -> RgbImage {
        let mut img = ImageBuffer::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let r = (x * 255 / width.max(1)) as u8;
                let g = (y * 255 / height.max(1)) as u8;
                img.put_pixel(x, y, Rgb([r, g, 128]));
            }
        }
        img
    }

    #[test]
    fn crop_copies_exact_pixels() {
        let img = create_test_image(100, 100);
        let cropped = crop_rect(&img, Rect::new(10, 20, 40, 30)).unwrap();

        assert_eq!(cropped.dimensions(), (40, 30));
        assert_eq!(cropped.get_pixel(0, 0), img.get_pixel(10, 20));
        assert_eq!(cropped.get_pixel(39, 29), img.get_pixel(49, 49));
    }

    #[test]
    fn full_image_crop_is_identity() {
        let img = create_test_image(50, 40);
        let cropped = crop_rect(&img, Rect::new(0, 0, 50, 40)).unwrap();
        assert_eq!(cropped.as_raw(), img.as_raw());
    }

    #[test]
    fn out_of_bounds_crop_is_rejected() {
        let img = create_test_image(100, 100);
        let err = crop_rect(&img, Rect::new(80, 80, 30, 30)).unwrap_err();
        assert!(matches!(err, DetectError::InvalidInput { .. }));
    }

    #[test]
    fn empty_crop_is_rejected() {
        let img = create_test_image(100, 100);
        let err = crop_rect(&img, Rect::new(10, 10, 0, 5)).unwrap_err();
        assert!(matches!(err, DetectError::InvalidInput { .. }));
    }
}
