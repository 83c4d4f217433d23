//! skin-tone: color-profile skin tone bucketing for captured face photos
//!
//! This library reduces an RGBA frame to a handful of averages, maps them
//! through a fixed rule ladder to one of four skin tone categories, and keeps
//! a per-session cache so near-identical frames are not analyzed twice.
//!
//! # Quick Start
//!
//! The [`SkinScanner`] session is the primary entry point:
//!
//! ```
//! use skin_tone::{PixelBuffer, SkinCategory, SkinScanner};
//!
//! let frame = PixelBuffer::uniform(64, 48, [230, 190, 170, 255]).unwrap();
//!
//! let mut scanner = SkinScanner::new();
//! let outcome = scanner.lookup_or_compute(&frame);
//!
//! assert_eq!(outcome.result.category(), SkinCategory::NorthIndianFair);
//! assert!(!outcome.cache_hit);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! RGBA bytes
//!     |
//!     v
//! PixelBuffer              (validated: non-empty, 4-byte aligned)
//!     |
//!     +---> ImageHash       (64 row-major block averages of (r+g+b)/3)
//!     |       |
//!     |     SimilarityCache (first entry with >= 95% cells within 10 units)
//!     |       |
//!     |     hit? ------------------------------> cached ScanResult
//!     |       |
//!     |     miss
//!     v       |
//! ColorProfile  <-----+     (brightness, red, green, blue averages)
//!     |
//!     +---> classify()      (rule ladder -> SkinCategory)
//!     +---> ConditionScores (linear channel heuristics)
//!     |
//! RegionScores              (interior luminance + gradients)
//!     |
//!     v
//! ScanResult  -> inserted into the cache, returned
//! ```
//!
//! # Classification Rules
//!
//! With `melanin = 1 - brightness / 255` and `ratio = red / green`, the
//! rules are tried in order and the first match wins:
//!
//! | # | Condition                                 | Category |
//! |---|-------------------------------------------|----------|
//! | 1 | `melanin < 0.40` and `ratio > 1.05`       | [`SkinCategory::NorthIndianFair`] |
//! | 2 | `0.40 <= melanin < 0.55` and `ratio > 1.02` | [`SkinCategory::CentralIndianWheatish`] |
//! | 3 | `0.55 <= melanin < 0.70`                  | [`SkinCategory::SouthIndianBronze`] |
//! | 4 | otherwise                                 | [`SkinCategory::DeepSouthIndian`] |
//!
//! Every comparison is strict where the table says `<` or `>`. A pure white
//! frame has ratio exactly 1.0, fails rule 1, and lands in rule 4.
//!
//! # Cache Semantics
//!
//! The cache scans entries in insertion order and returns the first one that
//! clears the threshold, not the closest one. By default it never evicts;
//! [`CacheOptions::max_entries`] opts into dropping the oldest entry.

pub mod api;
pub mod buffer;
pub mod cache;
pub mod classify;
pub mod conditions;
pub mod hash;
pub mod profile;


pub use api::{analyze, ScanOutcome, ScanResult, SkinScanner};
pub use buffer::{InvalidInput, PixelBuffer};
pub use cache::{CacheOptions, CacheStats, Lookup, SimilarityCache};
pub use classify::{classify, Classification, ColorRatios, MatchedRule, SkinCategory};
pub use conditions::{ConditionScores, RegionScores, Severity};
pub use hash::{ImageHash, DEFAULT_TOLERANCE, HASH_CELLS};
pub use profile::ColorProfile;
