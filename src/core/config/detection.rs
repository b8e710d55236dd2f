//! Configuration for the region detection stages.

use serde::{Deserialize, Serialize};

/// Default minimum bounding-box side length in pixels.
///
/// Boxes must be strictly larger than this in both dimensions to survive
/// filtering. The value rejects isolated glyphs and scan specks at the cost
/// of also rejecting genuinely small diagrams; callers working with
/// low-resolution renders should lower it.
pub const DEFAULT_MIN_DIM: u32 = 50;

/// Configuration for diagram region detection.
///
/// Collects the tunable parameters of the binarize/extract pipeline. All
/// fields have serde defaults so the struct can be deserialized from partial
/// documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Minimum side length for detected bounding boxes (default: 50).
    ///
    /// A box is kept only if both its width and height are strictly greater
    /// than this value.
    #[serde(default = "DetectionConfig::default_min_dim")]
    pub min_dim: u32,
}

impl DetectionConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum bounding-box side length.
    pub fn with_min_dim(mut self, min_dim: u32) -> Self {
        self.min_dim = min_dim;
        self
    }

    fn default_min_dim() -> u32 {
        DEFAULT_MIN_DIM
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_dim: Self::default_min_dim(),
        }
    }
}
