//! Utility functions for the detection pipeline.
//!
//! This module provides image loading and conversion helpers, rectangle
//! cropping, PNG encoding for the classifier handoff, and logging setup.

pub mod crop;
pub mod image;

pub use crop::crop_rect;
pub use image::{dynamic_to_rgb, encode_png, load_image};

use tracing_subscriber::EnvFilter;

/// Initializes a tracing subscriber reading its filter from `RUST_LOG`.
///
/// Intended for binaries and examples embedding the crate; libraries should
/// leave subscriber installation to their host application. Calling this
/// twice is a no-op (the second installation attempt is ignored).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
