//! Configuration management for the detection pipeline.
//!
//! Two concerns live here: the detection parameters themselves
//! ([`DetectionConfig`]) and the policy governing page-level parallelism
//! ([`ParallelPolicy`]).

pub mod detection;
pub mod parallel;

pub use detection::{DetectionConfig, DEFAULT_MIN_DIM};
pub use parallel::ParallelPolicy;
