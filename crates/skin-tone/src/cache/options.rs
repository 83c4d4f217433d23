//! Similarity cache configuration.

use crate::hash::DEFAULT_TOLERANCE;

/// Default similarity a cached hash must reach to count as a hit.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.95;

/// Configuration for a [`SimilarityCache`](super::SimilarityCache).
///
/// # Defaults
///
/// - Similarity threshold: 0.95 (at least 61 of 64 cells must match)
/// - Tolerance: 10 luminance units per cell (strict)
/// - Max entries: unbounded
///
/// # Example
///
/// ```
/// use skin_tone::CacheOptions;
///
/// let options = CacheOptions::new()
///     .similarity_threshold(0.9)
///     .max_entries(Some(256));
/// assert_eq!(options.tolerance, 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CacheOptions {
    /// Minimum fraction of similar cells for a hit, `0.0..=1.0`.
    pub similarity_threshold: f64,

    /// A cell pair is similar when its absolute difference is below this.
    pub tolerance: u8,

    /// Optional capacity. `None` keeps every entry for the life of the
    /// cache; `Some(n)` evicts the oldest insertion once `n` is reached.
    pub max_entries: Option<usize>,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            tolerance: DEFAULT_TOLERANCE,
            max_entries: None,
        }
    }
}

impl CacheOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    #[inline]
    pub fn tolerance(mut self, tolerance: u8) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the capacity. `Some(0)` is treated as `Some(1)`.
    #[inline]
    pub fn max_entries(mut self, max_entries: Option<usize>) -> Self {
        self.max_entries = max_entries.map(|n| n.max(1));
        self
    }
}
