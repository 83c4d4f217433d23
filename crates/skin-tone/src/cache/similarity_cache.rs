//! Linear-scan cache keyed by perceptual similarity.
//!
//! Entries are kept in insertion order and scanned front to back. The first
//! entry whose similarity reaches the threshold is returned, even if a later
//! entry would match more closely. With the default unbounded options the
//! cache only ever grows.

use std::collections::VecDeque;

use super::options::CacheOptions;
use crate::buffer::PixelBuffer;
use crate::hash::ImageHash;

struct Entry<V> {
    hash: ImageHash,
    value: V,
}

/// Counters describing cache activity since creation or the last clear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Entries currently held
    pub entries: usize,
    /// Lookups answered from an existing entry
    pub hits: u64,
    /// Lookups that ran the compute function and inserted its result
    pub computations: u64,
    /// Entries dropped to respect `max_entries`
    pub evictions: u64,
}

/// Outcome of [`SimilarityCache::lookup_or_insert_with`].
#[derive(Debug, PartialEq)]
pub enum Lookup<'a, V> {
    /// A cached entry was similar enough; nothing was computed.
    Hit(&'a V),
    /// No entry matched; the value was computed and inserted.
    Computed(&'a V),
}

impl<'a, V> Lookup<'a, V> {
    #[inline]
    pub fn value(&self) -> &'a V {
        match *self {
            Lookup::Hit(v) | Lookup::Computed(v) => v,
        }
    }

    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, Lookup::Hit(_))
    }
}

/// Cache from [`ImageHash`] to a previously computed value.
///
/// # Example
///
/// ```
/// use skin_tone::{CacheOptions, PixelBuffer, SimilarityCache};
///
/// let mut cache = SimilarityCache::new(CacheOptions::default());
/// let frame = PixelBuffer::uniform(8, 8, [120, 100, 90, 255]).unwrap();
///
/// let first = cache
///     .lookup_or_insert_with(&frame, |_| Ok::<_, ()>("computed"))
///     .unwrap();
/// assert!(!first.is_hit());
///
/// let second = cache
///     .lookup_or_insert_with(&frame, |_| Ok::<_, ()>("never called"))
///     .unwrap();
/// assert_eq!(second.value(), &"computed");
/// ```
pub struct SimilarityCache<V> {
    entries: VecDeque<Entry<V>>,
    options: CacheOptions,
    hits: u64,
    computations: u64,
    evictions: u64,
}

impl<V> SimilarityCache<V> {
    /// Create an empty cache. A capacity of zero is raised to one.
    pub fn new(mut options: CacheOptions) -> Self {
        options.max_entries = options.max_entries.map(|n| n.max(1));
        Self {
            entries: VecDeque::new(),
            options,
            hits: 0,
            computations: 0,
            evictions: 0,
        }
    }

    #[inline]
    pub fn options(&self) -> &CacheOptions {
        &self.options
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the first entry similar to `hash`, without touching counters.
    pub fn find(&self, hash: &ImageHash) -> Option<&V> {
        self.position(hash).map(|i| &self.entries[i].value)
    }

    /// Append an entry, evicting the oldest one first if at capacity.
    pub fn insert(&mut self, hash: ImageHash, value: V) {
        self.push(hash, value);
    }

    /// Hash `buffer`, return a similar cached value, or compute and insert one.
    ///
    /// `compute` runs only on a miss. If it fails, the cache is unchanged and
    /// the error is returned.
    pub fn lookup_or_insert_with<E, F>(
        &mut self,
        buffer: &PixelBuffer,
        compute: F,
    ) -> Result<Lookup<'_, V>, E>
    where
        F: FnOnce(&PixelBuffer) -> Result<V, E>,
    {
        let hash = ImageHash::of(buffer);

        if let Some(index) = self.position(&hash) {
            self.hits += 1;
            return Ok(Lookup::Hit(&self.entries[index].value));
        }

        let value = compute(buffer)?;
        self.computations += 1;
        let index = self.push(hash, value);
        Ok(Lookup::Computed(&self.entries[index].value))
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits,
            computations: self.computations,
            evictions: self.evictions,
        }
    }

    /// Drop every entry and reset the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.computations = 0;
        self.evictions = 0;
    }

    fn position(&self, hash: &ImageHash) -> Option<usize> {
        self.entries.iter().position(|entry| {
            entry.hash.similarity(hash, self.options.tolerance) >= self.options.similarity_threshold
        })
    }

    /// Returns the index of the inserted entry.
    fn push(&mut self, hash: ImageHash, value: V) -> usize {
        if let Some(max) = self.options.max_entries {
            while self.entries.len() >= max {
                if self.entries.pop_front().is_none() {
                    break;
                }
                self.evictions += 1;
            }
        }
        self.entries.push_back(Entry { hash, value });
        self.entries.len() - 1
    }
}

impl<V> Default for SimilarityCache<V> {
    fn default() -> Self {
        Self::new(CacheOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::HASH_CELLS;

    fn gray(level: u8) -> PixelBuffer {
        PixelBuffer::uniform(8, 8, [level, level, level, 255]).unwrap()
    }

    fn hash_with_outliers(base: u8, outliers: usize) -> ImageHash {
        let mut cells = [base; HASH_CELLS];
        for c in cells.iter_mut().take(outliers) {
            *c = base.wrapping_add(100);
        }
        ImageHash::from_cells(cells)
    }

    #[test]
    fn test_miss_then_hit() {
        let mut cache = SimilarityCache::default();
        let mut calls = 0;

        let first = cache
            .lookup_or_insert_with(&gray(100), |_| {
                calls += 1;
                Ok::<_, ()>(1)
            })
            .unwrap();
        assert_eq!(first, Lookup::Computed(&1));

        let second = cache
            .lookup_or_insert_with(&gray(100), |_| {
                calls += 1;
                Ok::<_, ()>(2)
            })
            .unwrap();
        assert_eq!(second, Lookup::Hit(&1));
        assert_eq!(calls, 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_distant_image_misses_and_appends() {
        let mut cache = SimilarityCache::default();
        cache
            .lookup_or_insert_with(&gray(50), |_| Ok::<_, ()>("dark"))
            .unwrap();
        let result = cache
            .lookup_or_insert_with(&gray(200), |_| Ok::<_, ()>("light"))
            .unwrap();
        assert_eq!(result, Lookup::Computed(&"light"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_threshold_boundary_on_cell_count() {
        let mut cache = SimilarityCache::default();
        cache.insert(ImageHash::from_cells([100; HASH_CELLS]), ());

        // 3 of 64 cells off: 61/64 = 0.953 -> hit
        assert!(cache.find(&hash_with_outliers(100, 3)).is_some());
        // 4 of 64 cells off: 60/64 = 0.9375 -> miss
        assert!(cache.find(&hash_with_outliers(100, 4)).is_none());
    }

    #[test]
    fn test_first_match_wins_over_closer_match() {
        let mut cache = SimilarityCache::default();
        // Both entries are within tolerance of a 100-gray frame; the first
        // one is further away but inserted earlier.
        cache.insert(ImageHash::from_cells([108; HASH_CELLS]), "first");
        cache.insert(ImageHash::from_cells([100; HASH_CELLS]), "exact");
        assert_eq!(
            cache.find(&ImageHash::from_cells([100; HASH_CELLS])),
            Some(&"first")
        );
    }

    #[test]
    fn test_failed_compute_leaves_cache_unchanged() {
        let mut cache: SimilarityCache<u32> = SimilarityCache::default();
        let result = cache.lookup_or_insert_with(&gray(10), |_| Err("boom"));
        assert_eq!(result, Err("boom"));
        assert!(cache.is_empty());
        assert_eq!(cache.stats().computations, 0);
    }

    #[test]
    fn test_bounded_cache_evicts_oldest() {
        let mut cache = SimilarityCache::new(CacheOptions::new().max_entries(Some(2)));
        cache
            .lookup_or_insert_with(&gray(0), |_| Ok::<_, ()>(0))
            .unwrap();
        cache
            .lookup_or_insert_with(&gray(100), |_| Ok::<_, ()>(100))
            .unwrap();
        cache
            .lookup_or_insert_with(&gray(200), |_| Ok::<_, ()>(200))
            .unwrap();

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.stats().evictions, 1);
        assert!(cache.find(&ImageHash::of(&gray(0))).is_none());
        assert_eq!(cache.find(&ImageHash::of(&gray(200))), Some(&200));
    }

    #[test]
    fn test_unbounded_cache_only_grows() {
        let mut cache = SimilarityCache::default();
        for level in (0..=250u8).step_by(25) {
            cache
                .lookup_or_insert_with(&gray(level), |_| Ok::<_, ()>(level))
                .unwrap();
        }
        assert_eq!(cache.len(), 11);
        assert_eq!(cache.stats().evictions, 0);
    }

    #[test]
    fn test_stats_and_clear() {
        let mut cache = SimilarityCache::default();
        cache
            .lookup_or_insert_with(&gray(80), |_| Ok::<_, ()>(()))
            .unwrap();
        cache
            .lookup_or_insert_with(&gray(80), |_| Ok::<_, ()>(()))
            .unwrap();
        assert_eq!(
            cache.stats(),
            CacheStats {
                entries: 1,
                hits: 1,
                computations: 1,
                evictions: 0
            }
        );

        cache.clear();
        assert_eq!(cache.stats(), CacheStats::default());
    }

    #[test]
    fn test_custom_tolerance() {
        let mut cache = SimilarityCache::new(CacheOptions::new().tolerance(3));
        cache.insert(ImageHash::from_cells([100; HASH_CELLS]), ());
        assert!(cache.find(&ImageHash::from_cells([102; HASH_CELLS])).is_some());
        assert!(cache.find(&ImageHash::from_cells([103; HASH_CELLS])).is_none());
    }

    #[test]
    fn test_zero_capacity_literal_keeps_one_entry() {
        // Struct literal bypasses the builder's clamp
        let options = CacheOptions {
            max_entries: Some(0),
            ..Default::default()
        };
        let mut cache = SimilarityCache::new(options);
        assert_eq!(cache.options().max_entries, Some(1));

        cache
            .lookup_or_insert_with(&gray(40), |_| Ok::<_, ()>("dark"))
            .unwrap();
        cache
            .lookup_or_insert_with(&gray(200), |_| Ok::<_, ()>("light"))
            .unwrap();

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.stats().evictions, 1);
        assert_eq!(cache.find(&ImageHash::of(&gray(200))), Some(&"light"));
    }
}
