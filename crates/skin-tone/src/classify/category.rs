//! The closed set of skin tone categories.

use std::fmt;

/// One of the four skin tone buckets produced by the classifier.
///
/// Variants are declared in rule priority order, lightest first. Descriptive
/// copy and product lists keyed by category live outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkinCategory {
    /// Low melanin with a warm red-over-green cast (label A)
    NorthIndianFair,
    /// Balanced melanin, slightly warm (label B)
    CentralIndianWheatish,
    /// Higher melanin band (label C)
    SouthIndianBronze,
    /// Catch-all for everything the earlier rules reject (label D)
    DeepSouthIndian,
}

impl SkinCategory {
    /// All categories in rule priority order.
    pub const ALL: [SkinCategory; 4] = [
        SkinCategory::NorthIndianFair,
        SkinCategory::CentralIndianWheatish,
        SkinCategory::SouthIndianBronze,
        SkinCategory::DeepSouthIndian,
    ];

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            SkinCategory::NorthIndianFair => "North Indian Fair",
            SkinCategory::CentralIndianWheatish => "Central Indian Wheatish",
            SkinCategory::SouthIndianBronze => "South Indian Bronze",
            SkinCategory::DeepSouthIndian => "Deep South Indian",
        }
    }

    /// Stable identifier suitable for lookups and serialized output.
    pub fn slug(self) -> &'static str {
        match self {
            SkinCategory::NorthIndianFair => "north_indian_fair",
            SkinCategory::CentralIndianWheatish => "central_indian_wheatish",
            SkinCategory::SouthIndianBronze => "south_indian_bronze",
            SkinCategory::DeepSouthIndian => "deep_south_indian",
        }
    }

    /// Short label, `'A'` through `'D'`.
    pub fn letter(self) -> char {
        match self {
            SkinCategory::NorthIndianFair => 'A',
            SkinCategory::CentralIndianWheatish => 'B',
            SkinCategory::SouthIndianBronze => 'C',
            SkinCategory::DeepSouthIndian => 'D',
        }
    }
}

impl fmt::Display for SkinCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
