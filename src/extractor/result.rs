//! Result types for the extraction pipeline.

use crate::processors::{Rect, Region};

/// A detected region paired with its classification outcome.
///
/// This is the record handed to the presentation layer: one entry per
/// detected diagram, carrying the page it came from, its per-page ordinal,
/// and either a description or the stringified classifier error. A failed
/// classification never discards the region itself.
#[derive(Debug, Clone)]
pub struct ClassifiedDiagram {
    /// Zero-based index of the page the region was detected on.
    pub page_index: usize,
    /// Zero-based ordinal of the region within its page, in emission order.
    pub diagram_index: usize,
    /// Bounding box of the region in page pixel coordinates.
    pub bbox: Rect,
    /// The cropped page content that was classified.
    pub crop: image::RgbImage,
    /// Description returned by the classifier, or its error rendered as a
    /// string.
    pub description: Result<String, String>,
}

/// Sorts regions into visual reading order: top-to-bottom, then
/// left-to-right.
///
/// Detection emits regions in contour discovery order, which is
/// deterministic but not guaranteed to match reading order. Callers that
/// present regions to a reader should sort first.
pub fn sort_reading_order(regions: &mut [Region]) {
    regions.sort_by_key(|r| (r.bbox.y, r.bbox.x));
}
