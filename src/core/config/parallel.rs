//! Shared parallel processing configuration types.

use serde::{Deserialize, Serialize};

/// Configuration for parallel processing behavior across the detection pipeline.
///
/// Detection is independent per page (read-only inputs, disjoint outputs), so
/// the only parallelism the crate applies is a page-level fan-out. This struct
/// controls when that fan-out kicks in and how wide it may go.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParallelPolicy {
    /// Maximum number of threads to use for parallel processing.
    /// If None, rayon will use the default thread pool size (typically number of CPU cores).
    /// Default: None (use rayon's default)
    #[serde(default)]
    pub max_threads: Option<usize>,

    /// Page-count threshold below which detection runs sequentially
    /// (<= this uses sequential). Default: 2
    #[serde(default = "ParallelPolicy::default_page_threshold")]
    pub page_threshold: usize,
}

impl ParallelPolicy {
    /// Create a new ParallelPolicy with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of threads.
    pub fn with_max_threads(mut self, max_threads: Option<usize>) -> Self {
        self.max_threads = max_threads;
        self
    }

    /// Set the sequential/parallel page-count threshold.
    pub fn with_page_threshold(mut self, threshold: usize) -> Self {
        self.page_threshold = threshold;
        self
    }

    /// Install the global rayon thread pool with the configured number of threads.
    ///
    /// This should be called once at application startup before any parallel
    /// processing occurs. If `max_threads` is None, this method does nothing and
    /// rayon will use its default thread pool size.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the thread pool was successfully configured
    /// - `Ok(false)` if `max_threads` is None (no configuration needed)
    /// - `Err` if the thread pool has already been initialized
    pub fn install_global_thread_pool(&self) -> Result<bool, rayon::ThreadPoolBuildError> {
        if let Some(num_threads) = self.max_threads {
            rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build_global()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn default_page_threshold() -> usize {
        2
    }
}

impl Default for ParallelPolicy {
    fn default() -> Self {
        Self {
            max_threads: None,
            page_threshold: Self::default_page_threshold(),
        }
    }
}
