//! Core error types for the detection pipeline.
//!
//! This module defines the error taxonomy shared by every stage of the
//! diagram detection core. The core is a pure computation: no variant here
//! is retriable, and transient-failure handling (for example around the
//! downstream classification service) belongs to the caller.

use thiserror::Error;

/// Errors that can occur inside the detection core.
#[derive(Debug, Error)]
pub enum DetectError {
    /// The input page image is not usable (zero width or height).
    #[error("invalid input: {message}")]
    InvalidInput {
        /// A message describing the invalid input.
        message: String,
    },

    /// Mask and page image dimensions disagree.
    ///
    /// This can only happen when the stage functions are driven directly;
    /// [`crate::extractor::DiagramExtractor::detect`] always hands a mask to
    /// region extraction that was derived from the same page.
    #[error(
        "dimension mismatch: mask is {mask_width}x{mask_height}, page image is {image_width}x{image_height}",
        mask_width = mask.0,
        mask_height = mask.1,
        image_width = image.0,
        image_height = image.1
    )]
    DimensionMismatch {
        /// Mask dimensions as (width, height).
        mask: (u32, u32),
        /// Page image dimensions as (width, height).
        image: (u32, u32),
    },

    /// Error occurred while loading an image from disk.
    #[error("image load")]
    ImageLoad(#[source] image::ImageError),

    /// Error occurred while encoding a crop for the classifier handoff.
    #[error("crop encode")]
    Encode(#[source] image::ImageError),
}

impl From<image::ImageError> for DetectError {
    /// Converts an `image::ImageError` to `DetectError::ImageLoad`.
    fn from(error: image::ImageError) -> Self {
        Self::ImageLoad(error)
    }
}

impl DetectError {
    /// Creates an `InvalidInput` error with the given message.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates a `DimensionMismatch` error from two (width, height) pairs.
    pub fn dimension_mismatch(mask: (u32, u32), image: (u32, u32)) -> Self {
        Self::DimensionMismatch { mask, image }
    }
}

/// Convenience alias used throughout the crate.
pub type DetectResult<T> = Result<T, DetectError>;
