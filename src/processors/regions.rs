//! Region extraction from binarized masks.
//!
//! Finds the foreground blobs of a mask, keeps those whose bounding boxes are
//! large enough to plausibly be diagrams, and crops the matching rectangles
//! from the original page image.

use image::{GrayImage, RgbImage};
use imageproc::contours::{find_contours, BorderType, Contour};

use crate::core::config::DetectionConfig;
use crate::core::errors::{DetectError, DetectResult};
use crate::processors::geometry::Rect;
use crate::utils::crop::crop_rect;

/// A detected diagram candidate: a bounding box and the page content inside it.
///
/// Regions have no identity beyond this pair. The crop is taken from the
/// original page image, not the mask, so full color detail is preserved for
/// downstream classification.
#[derive(Debug, Clone)]
pub struct Region {
    /// Bounding box of the detected blob, in page pixel coordinates.
    pub bbox: Rect,
    /// Exact pixel content of the page within `bbox`.
    pub crop: RgbImage,
}

/// Extracts diagram candidate regions from a binarized mask.
///
/// Foreground blobs are found by tracing outer contours (Suzuki–Abe border
/// following, 8-connectivity); holes inside a blob are not tracked
/// separately. Each top-level blob yields at most one region: its pixel
/// bounding box, kept only when both sides are strictly greater than
/// `config.min_dim`, cropped from `page`.
///
/// Regions are emitted in contour discovery order, the raster-scan order in
/// which each blob's border is first encountered. That order is deterministic
/// but is *not* visual reading order; callers that need reading order should
/// sort by `(bbox.y, bbox.x)` themselves (see
/// [`crate::extractor::sort_reading_order`]).
///
/// Overlapping or nested bounding boxes are not merged: a diagram drawn as
/// several disconnected strokes yields one region per stroke blob.
///
/// # Errors
///
/// Returns [`DetectError::DimensionMismatch`] if `mask` and `page` disagree
/// in size. An all-background mask is not an error and yields an empty
/// vector.
pub fn extract_regions(
    mask: &GrayImage,
    page: &RgbImage,
    config: &DetectionConfig,
) -> DetectResult<Vec<Region>> {
    if mask.dimensions() != page.dimensions() {
        return Err(DetectError::dimension_mismatch(
            mask.dimensions(),
            page.dimensions(),
        ));
    }

    // Border following never starts a trace in the image's first column, so
    // a blob flush with the left page edge would go unreported. Trace on a
    // copy padded with one pixel of background and shift the boxes back.
    let mut padded = GrayImage::new(mask.width() + 2, mask.height() + 2);
    for (x, y, pixel) in mask.enumerate_pixels() {
        padded.put_pixel(x + 1, y + 1, *pixel);
    }

    let contours: Vec<Contour<u32>> = find_contours(&padded);
    let outer_count = contours
        .iter()
        .filter(|c| is_external(c))
        .count();
    tracing::debug!(
        "extract_regions: {} contours ({} external) on {}x{} mask",
        contours.len(),
        outer_count,
        mask.width(),
        mask.height()
    );

    let mut regions = Vec::new();
    for contour in contours.iter().filter(|c| is_external(c)) {
        let Some(bbox) = Rect::from_contour(contour) else {
            continue;
        };
        // Contour points sit on foreground pixels, which start at (1, 1) in
        // the padded image.
        let bbox = Rect::new(bbox.x - 1, bbox.y - 1, bbox.w, bbox.h);
        // Strict comparison: a box of exactly min_dim pixels is rejected.
        if bbox.w <= config.min_dim || bbox.h <= config.min_dim {
            continue;
        }
        let crop = crop_rect(page, bbox)?;
        regions.push(Region { bbox, crop });
    }

    tracing::debug!(
        "extract_regions: {} regions survive min_dim {}",
        regions.len(),
        config.min_dim
    );
    Ok(regions)
}

/// True for top-level outer borders, the equivalent of OpenCV's
/// RETR_EXTERNAL retrieval mode.
fn is_external(contour: &Contour<u32>) -> bool {
    contour.border_type == BorderType::Outer && contour.parent.is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb};

    fn mask_with_blobs(width: u32, height: u32, blobs: &[Rect]) -> GrayImage {
        let mut mask = GrayImage::new(width, height);
        for blob in blobs {
            for y in blob.y..blob.bottom() {
                for x in blob.x..blob.right() {
                    mask.put_pixel(x, y, Luma([255]));
                }
            }
        }
        mask
    }

    fn gradient_page(width: u32, height: u32) -> RgbImage {
        let mut page = RgbImage::new(width, height);
        for y in 0..height {
            for x in 0..width {
                page.put_pixel(x, y, Rgb([(x % 256) as u8, (y % 256) as u8, 128]));
            }
        }
        page
    }

    #[test]
    fn dimension_mismatch_is_rejected() {
        let mask = GrayImage::new(100, 100);
        let page = gradient_page(200, 200);
        let err = extract_regions(&mask, &page, &DetectionConfig::default()).unwrap_err();
        assert!(matches!(err, DetectError::DimensionMismatch { .. }));
    }

    #[test]
    fn empty_mask_yields_no_regions() {
        let mask = GrayImage::new(200, 200);
        let page = gradient_page(200, 200);
        let regions = extract_regions(&mask, &page, &DetectionConfig::default()).unwrap();
        assert!(regions.is_empty());
    }

    #[test]
    fn single_blob_yields_exact_bbox_and_crop() {
        let blob = Rect::new(10, 10, 100, 100);
        let mask = mask_with_blobs(200, 200, &[blob]);
        let page = gradient_page(200, 200);

        let regions = extract_regions(&mask, &page, &DetectionConfig::default()).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].bbox, blob);

        let crop = &regions[0].crop;
        assert_eq!(crop.dimensions(), (100, 100));
        assert_eq!(crop.get_pixel(0, 0), page.get_pixel(10, 10));
        assert_eq!(crop.get_pixel(99, 99), page.get_pixel(109, 109));
    }

    #[test]
    fn two_separated_blobs_yield_two_regions() {
        let a = Rect::new(10, 10, 60, 60);
        let b = Rect::new(120, 100, 60, 60);
        let mask = mask_with_blobs(250, 250, &[a, b]);
        let page = gradient_page(250, 250);

        let mut boxes: Vec<Rect> = extract_regions(&mask, &page, &DetectionConfig::default())
            .unwrap()
            .into_iter()
            .map(|r| r.bbox)
            .collect();
        boxes.sort_by_key(|r| (r.y, r.x));
        assert_eq!(boxes, vec![a, b]);
    }

    #[test]
    fn sub_threshold_blob_is_filtered() {
        let mask = mask_with_blobs(200, 200, &[Rect::new(50, 50, 30, 30)]);
        let page = gradient_page(200, 200);
        let regions = extract_regions(&mask, &page, &DetectionConfig::default()).unwrap();
        assert!(regions.is_empty());
    }

    #[test]
    fn exactly_min_dim_blob_is_filtered() {
        let mask = mask_with_blobs(200, 200, &[Rect::new(50, 50, 50, 50)]);
        let page = gradient_page(200, 200);
        let regions = extract_regions(&mask, &page, &DetectionConfig::default()).unwrap();
        assert!(regions.is_empty());
    }

    #[test]
    fn min_dim_override_keeps_smaller_blobs() {
        let blob = Rect::new(50, 50, 30, 30);
        let mask = mask_with_blobs(200, 200, &[blob]);
        let page = gradient_page(200, 200);

        let config = DetectionConfig::new().with_min_dim(20);
        let regions = extract_regions(&mask, &page, &config).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].bbox, blob);
    }

    #[test]
    fn hole_inside_blob_is_not_a_separate_region() {
        // A 100x100 blob with a 20x20 hole punched out: only the outer
        // border counts, and the bbox still spans the full blob.
        let mut mask = mask_with_blobs(200, 200, &[Rect::new(10, 10, 100, 100)]);
        for y in 40..60 {
            for x in 40..60 {
                mask.put_pixel(x, y, Luma([0]));
            }
        }
        let page = gradient_page(200, 200);

        let regions = extract_regions(&mask, &page, &DetectionConfig::default()).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].bbox, Rect::new(10, 10, 100, 100));
    }

    #[test]
    fn blob_touching_image_border_is_detected() {
        let blob = Rect::new(0, 0, 60, 60);
        let mask = mask_with_blobs(200, 200, &[blob]);
        let page = gradient_page(200, 200);

        let regions = extract_regions(&mask, &page, &DetectionConfig::default()).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].bbox, blob);
    }

    #[test]
    fn blob_flush_with_left_edge_is_detected() {
        let blob = Rect::new(0, 50, 100, 100);
        let mask = mask_with_blobs(300, 300, &[blob]);
        let page = gradient_page(300, 300);

        let regions = extract_regions(&mask, &page, &DetectionConfig::default()).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].bbox, blob);
    }

    #[test]
    fn edge_and_interior_blobs_are_all_detected() {
        let left = Rect::new(0, 50, 100, 100);
        let top = Rect::new(150, 0, 100, 100);
        let interior = Rect::new(120, 180, 100, 80);
        let mask = mask_with_blobs(300, 300, &[left, top, interior]);
        let page = gradient_page(300, 300);

        let mut boxes: Vec<Rect> = extract_regions(&mask, &page, &DetectionConfig::default())
            .unwrap()
            .into_iter()
            .map(|r| r.bbox)
            .collect();
        boxes.sort_by_key(|r| (r.y, r.x));
        assert_eq!(boxes, vec![top, left, interior]);
    }

    #[test]
    fn blob_spanning_the_full_mask_is_detected() {
        let blob = Rect::new(0, 0, 200, 200);
        let mask = mask_with_blobs(200, 200, &[blob]);
        let page = gradient_page(200, 200);

        let regions = extract_regions(&mask, &page, &DetectionConfig::default()).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].bbox, blob);
        assert_eq!(regions[0].crop.dimensions(), (200, 200));
    }

    #[test]
    fn every_region_lies_within_the_page() {
        let mask = mask_with_blobs(
            300,
            300,
            &[Rect::new(0, 0, 80, 80), Rect::new(200, 220, 100, 80)],
        );
        let page = gradient_page(300, 300);

        let regions = extract_regions(&mask, &page, &DetectionConfig::default()).unwrap();
        assert_eq!(regions.len(), 2);
        for region in &regions {
            assert!(region.bbox.fits_within(300, 300));
            assert_eq!(
                region.crop.dimensions(),
                (region.bbox.w, region.bbox.h)
            );
        }
    }
}
