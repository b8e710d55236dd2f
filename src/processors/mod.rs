//! The algorithmic stages of the detection pipeline.
//!
//! Detection is a two-stage image-to-regions pipeline:
//!
//! 1. [`binarize`]: page image to foreground/background mask
//!    (Otsu threshold, inverted polarity).
//! 2. [`extract_regions`]: mask to ordered diagram candidate regions
//!    (outer contours, size filter, crop).
//!
//! Both stages are pure functions and are exposed separately for
//! testability; [`crate::extractor::DiagramExtractor::detect`] composes them.

pub mod binarize;
pub mod geometry;
pub mod regions;

pub use binarize::binarize;
pub use geometry::Rect;
pub use regions::{extract_regions, Region};
