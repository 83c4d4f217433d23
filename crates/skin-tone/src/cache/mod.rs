//! Near-duplicate result cache.
//!
//! [`SimilarityCache`] maps image hashes to previously computed values and
//! answers lookups by perceptual similarity rather than exact equality.

mod options;
mod similarity_cache;

pub use options::{CacheOptions, DEFAULT_SIMILARITY_THRESHOLD};
pub use similarity_cache::{CacheStats, Lookup, SimilarityCache};
