//! Diagram region detection for rendered document pages.
//!
//! This crate converts a rendered page image into a set of cropped,
//! figure-like regions: it binarizes the page with an automatically chosen
//! threshold, groups foreground pixels by tracing outer contours, filters
//! out boxes too small to be a diagram, and crops each survivor from the
//! original page. What a region *depicts* is deliberately out of scope;
//! crops are handed to an external classification service through the
//! [`domain::RegionClassifier`] boundary.
//!
//! # Pipeline
//!
//! ```text
//! page image -> binarize -> mask -> extract_regions -> [(bbox, crop), ...]
//! ```
//!
//! The composed entry point is [`extractor::DiagramExtractor::detect`]; the
//! stage functions [`processors::binarize`] and
//! [`processors::extract_regions`] are exposed separately for testability.
//!
//! # Example
//!
//! ```
//! use diagram_extract::DiagramExtractor;
//! use image::{Rgb, RgbImage};
//!
//! // A white page with a 100x100 black block at (10, 10).
//! let mut page = RgbImage::from_pixel(200, 200, Rgb([255, 255, 255]));
//! for y in 10..110 {
//!     for x in 10..110 {
//!         page.put_pixel(x, y, Rgb([0, 0, 0]));
//!     }
//! }
//!
//! let extractor = DiagramExtractor::new();
//! let regions = extractor.detect(&page).unwrap();
//! assert_eq!(regions.len(), 1);
//! assert_eq!((regions[0].bbox.w, regions[0].bbox.h), (100, 100));
//! ```

pub mod core;
pub mod domain;
pub mod extractor;
pub mod processors;
pub mod utils;

pub use crate::core::{DetectError, DetectResult, DetectionConfig, ParallelPolicy, DEFAULT_MIN_DIM};
pub use crate::extractor::{
    sort_reading_order, ClassifiedDiagram, DiagramExtractor, DiagramExtractorBuilder,
};
pub use crate::processors::{binarize, extract_regions, Rect, Region};
