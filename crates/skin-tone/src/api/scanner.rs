//! SkinScanner -- one scan session with its own result cache.

use super::result::{analyze, ScanOutcome, ScanResult};
use crate::buffer::PixelBuffer;
use crate::cache::{CacheOptions, CacheStats, SimilarityCache};

/// A scan session: the analysis pipeline in front of a [`SimilarityCache`].
///
/// Create one per session and drop it (or [`clear`](Self::clear) it) when
/// the session ends. There is no process-wide cache.
///
/// # Example
///
/// ```
/// use skin_tone::{PixelBuffer, SkinScanner};
///
/// let mut scanner = SkinScanner::new();
/// let frame = PixelBuffer::uniform(32, 32, [210, 170, 140, 255]).unwrap();
///
/// let first = scanner.lookup_or_compute(&frame);
/// let again = scanner.lookup_or_compute(&frame);
///
/// assert!(!first.cache_hit);
/// assert!(again.cache_hit);
/// assert_eq!(first.result, again.result);
/// assert_eq!(scanner.stats().computations, 1);
/// ```
pub struct SkinScanner {
    cache: SimilarityCache<ScanResult>,
}

impl SkinScanner {
    /// Scanner with default cache options (unbounded, 0.95 / 10).
    pub fn new() -> Self {
        Self::with_options(CacheOptions::default())
    }

    pub fn with_options(options: CacheOptions) -> Self {
        Self {
            cache: SimilarityCache::new(options),
        }
    }

    /// Return the cached result of a similar earlier image, or analyze
    /// `buffer` and remember the result.
    pub fn lookup_or_compute(&mut self, buffer: &PixelBuffer) -> ScanOutcome {
        let lookup = self
            .cache
            .lookup_or_insert_with(buffer, |b| Ok::<_, std::convert::Infallible>(analyze(b)));
        match lookup {
            Ok(lookup) => ScanOutcome {
                result: *lookup.value(),
                cache_hit: lookup.is_hit(),
            },
            Err(never) => match never {},
        }
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn options(&self) -> &CacheOptions {
        self.cache.options()
    }

    /// End the session: forget every cached result.
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

impl Default for SkinScanner {
    fn default() -> Self {
        Self::new()
    }
}
