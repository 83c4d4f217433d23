//! Scan result record and the uncached analysis pipeline.

use crate::buffer::PixelBuffer;
use crate::classify::{classify, Classification, SkinCategory};
use crate::conditions::{ConditionScores, RegionScores};
use crate::profile::ColorProfile;

/// Everything computed for one image.
///
/// This is the value stored in the scan cache: a hit returns the record of
/// the earlier, similar image unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanResult {
    pub profile: ColorProfile,
    pub classification: Classification,
    pub conditions: ConditionScores,
    pub regions: RegionScores,
}

impl ScanResult {
    #[inline]
    pub fn category(&self) -> SkinCategory {
        self.classification.category
    }
}

/// Profile, classify and score a buffer without consulting any cache.
pub fn analyze(buffer: &PixelBuffer) -> ScanResult {
    let profile = ColorProfile::of(buffer);
    ScanResult {
        profile,
        classification: classify(&profile),
        conditions: ConditionScores::from_profile(&profile),
        regions: RegionScores::of(buffer),
    }
}

/// A scan result plus whether it came from the cache.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanOutcome {
    pub result: ScanResult,
    pub cache_hit: bool,
}
