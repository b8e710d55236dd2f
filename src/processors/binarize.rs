//! Page binarization.
//!
//! Converts a rendered page into a two-level mask separating drawn content
//! from blank paper. The threshold is chosen per page from the luminance
//! histogram (Otsu's criterion), which keeps the stage robust to varying
//! scan exposure without any tuning.

use image::{imageops, GrayImage, RgbImage};
use imageproc::contrast::{otsu_level, threshold, ThresholdType};

use crate::core::errors::{DetectError, DetectResult};

/// Binarizes a page image into a foreground/background mask.
///
/// The returned mask has the same dimensions as the input; foreground pixels
/// are 255 and background pixels are 0. Polarity is inverted relative to the
/// threshold so that pixels *darker* than the Otsu level become foreground.
/// This assumes ink and diagram strokes are darker than the page background,
/// which holds for ordinary scans but not for inverted renders.
///
/// A page whose luminance histogram collapses to a single value has no
/// ink/background separation to find; such pages yield an all-background
/// mask rather than relying on the degenerate behavior of the threshold
/// search.
///
/// # Errors
///
/// Returns [`DetectError::InvalidInput`] if the page has zero width or
/// height.
pub fn binarize(page: &RgbImage) -> DetectResult<GrayImage> {
    let (width, height) = page.dimensions();
    if width == 0 || height == 0 {
        return Err(DetectError::invalid_input(format!(
            "zero-area page image ({width}x{height})"
        )));
    }

    let gray = imageops::grayscale(page);

    let mut min_luma = u8::MAX;
    let mut max_luma = u8::MIN;
    for pixel in gray.pixels() {
        min_luma = min_luma.min(pixel.0[0]);
        max_luma = max_luma.max(pixel.0[0]);
    }
    if min_luma == max_luma {
        tracing::debug!(
            "binarize: uniform page (luma {}), emitting empty mask",
            min_luma
        );
        return Ok(GrayImage::new(width, height));
    }

    let level = otsu_level(&gray);
    tracing::debug!("binarize: {}x{} page, otsu level {}", width, height, level);

    // BinaryInverted maps pixels <= level (ink) to 255 and the rest to 0.
    Ok(threshold(&gray, level, ThresholdType::BinaryInverted))
}
