//! The core module of the detection pipeline.
//!
//! This module contains the fundamental components shared by every stage:
//! - Configuration management
//! - Error handling
//!
//! It also re-exports commonly used types for convenience.

pub mod config;
pub mod errors;

pub use config::{DetectionConfig, ParallelPolicy, DEFAULT_MIN_DIM};
pub use errors::{DetectError, DetectResult};
