//! High-level extraction pipeline.
//!
//! This module provides the builder API for constructing a
//! [`DiagramExtractor`], the composed page-to-regions entry point. The
//! extractor runs the two processor stages in sequence (binarize, then
//! extract regions) and optionally fans detection out across pages.
//!
//! # Example
//!
//! ```
//! use diagram_extract::extractor::DiagramExtractorBuilder;
//! use image::RgbImage;
//!
//! let extractor = DiagramExtractorBuilder::new()
//!     .min_dim(50)
//!     .build();
//!
//! let page = RgbImage::from_pixel(200, 200, image::Rgb([255, 255, 255]));
//! let regions = extractor.detect(&page).unwrap();
//! assert!(regions.is_empty());
//! ```

pub mod result;

pub use result::{sort_reading_order, ClassifiedDiagram};

use image::RgbImage;
use rayon::prelude::*;

use crate::core::config::{DetectionConfig, ParallelPolicy};
use crate::core::errors::DetectResult;
use crate::domain::RegionClassifier;
use crate::processors::{binarize, extract_regions, Region};
use crate::utils::encode_png;

/// Builder for constructing a [`DiagramExtractor`].
#[derive(Debug, Default)]
pub struct DiagramExtractorBuilder {
    detection_config: Option<DetectionConfig>,
    parallel_policy: Option<ParallelPolicy>,
    min_dim: Option<u32>,
}

impl DiagramExtractorBuilder {
    /// Creates a builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the full detection configuration.
    pub fn detection_config(mut self, config: DetectionConfig) -> Self {
        self.detection_config = Some(config);
        self
    }

    /// Sets the minimum bounding-box side length, overriding the value in
    /// any configuration set via [`Self::detection_config`].
    pub fn min_dim(mut self, min_dim: u32) -> Self {
        self.min_dim = Some(min_dim);
        self
    }

    /// Sets the page-level parallelism policy.
    pub fn parallel_policy(mut self, policy: ParallelPolicy) -> Self {
        self.parallel_policy = Some(policy);
        self
    }

    /// Builds the extractor.
    pub fn build(self) -> DiagramExtractor {
        let mut config = self.detection_config.unwrap_or_default();
        if let Some(min_dim) = self.min_dim {
            config.min_dim = min_dim;
        }
        DiagramExtractor {
            config,
            parallel: self.parallel_policy.unwrap_or_default(),
        }
    }
}

/// The composed detection pipeline: page image in, diagram regions out.
///
/// Detection is deterministic and side-effect free; the same page always
/// yields the same region sequence. Regions are emitted in contour discovery
/// order, not reading order (see [`sort_reading_order`]).
#[derive(Debug, Clone)]
pub struct DiagramExtractor {
    config: DetectionConfig,
    parallel: ParallelPolicy,
}

impl DiagramExtractor {
    /// Creates an extractor with default configuration.
    pub fn new() -> Self {
        DiagramExtractorBuilder::new().build()
    }

    /// Returns a builder for customized construction.
    pub fn builder() -> DiagramExtractorBuilder {
        DiagramExtractorBuilder::new()
    }

    /// The detection configuration in effect.
    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Detects diagram candidate regions on a single page.
    ///
    /// Composition of [`binarize`] and [`extract_regions`]; see those for
    /// the stage contracts.
    ///
    /// # Errors
    ///
    /// Returns [`crate::core::DetectError::InvalidInput`] for a zero-area
    /// page.
    pub fn detect(&self, page: &RgbImage) -> DetectResult<Vec<Region>> {
        let mask = binarize(page)?;
        let regions = extract_regions(&mask, page, &self.config)?;
        tracing::debug!(
            "detect: {} regions on {}x{} page",
            regions.len(),
            page.width(),
            page.height()
        );
        Ok(regions)
    }

    /// Detects diagram candidate regions on a batch of pages.
    ///
    /// Each page is processed independently; the outer vector matches the
    /// input page order. Batches larger than the parallel policy's page
    /// threshold are fanned out across the rayon thread pool, which is safe
    /// because pages are read-only and their outputs disjoint.
    ///
    /// # Errors
    ///
    /// Fails on the first page-level error encountered.
    pub fn detect_pages(&self, pages: &[RgbImage]) -> DetectResult<Vec<Vec<Region>>> {
        if pages.len() <= self.parallel.page_threshold {
            pages.iter().map(|page| self.detect(page)).collect()
        } else {
            tracing::debug!("detect_pages: parallel fan-out over {} pages", pages.len());
            pages.par_iter().map(|page| self.detect(page)).collect()
        }
    }

    /// Runs a classifier over detected regions, pairing each with its
    /// description.
    ///
    /// Crops are handed to the classifier PNG-encoded and otherwise
    /// unchanged. A classifier failure is recorded in the corresponding
    /// entry rather than aborting the remaining regions.
    ///
    /// # Errors
    ///
    /// Returns [`crate::core::DetectError::Encode`] if a crop cannot be
    /// PNG-encoded. Classifier errors do not surface here.
    pub fn describe_regions<C: RegionClassifier>(
        &self,
        classifier: &C,
        page_index: usize,
        regions: &[Region],
    ) -> DetectResult<Vec<ClassifiedDiagram>> {
        let mut described = Vec::with_capacity(regions.len());
        for (diagram_index, region) in regions.iter().enumerate() {
            let png = encode_png(&region.crop)?;
            let description = classifier
                .classify(&png)
                .map_err(|e| e.to_string());
            if let Err(ref message) = description {
                tracing::warn!(
                    "classification failed for page {} diagram {}: {}",
                    page_index,
                    diagram_index,
                    message
                );
            }
            described.push(ClassifiedDiagram {
                page_index,
                diagram_index,
                bbox: region.bbox,
                crop: region.crop.clone(),
                description,
            });
        }
        Ok(described)
    }
}

impl Default for DiagramExtractor {
    fn default() -> Self {
        Self::new()
    }
}
