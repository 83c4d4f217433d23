//! Ordered threshold rules mapping a color profile to a category.
//!
//! The rules are evaluated top to bottom and the first match wins. The
//! order encodes priority: the bands overlap on the ratio axis, so moving a
//! rule changes which category owns the boundary values.
//!
//! ```text
//! 1. melanin <  0.40                  && red/green > 1.05  -> A
//! 2. melanin in [0.40, 0.55)          && red/green > 1.02  -> B
//! 3. melanin in [0.55, 0.70)                               -> C
//! 4. otherwise                                             -> D
//! ```

use super::category::SkinCategory;
use crate::profile::ColorProfile;

/// Upper melanin bound (exclusive) for rule 1.
pub const FAIR_MELANIN_MAX: f64 = 0.40;
/// Red/green ratio that rule 1 must exceed.
pub const FAIR_RED_GREEN_MIN: f64 = 1.05;
/// Upper melanin bound (exclusive) for rule 2.
pub const WHEATISH_MELANIN_MAX: f64 = 0.55;
/// Red/green ratio that rule 2 must exceed.
pub const WHEATISH_RED_GREEN_MIN: f64 = 1.02;
/// Upper melanin bound (exclusive) for rule 3.
pub const BRONZE_MELANIN_MAX: f64 = 0.70;

/// Ratios derived from a profile before rule evaluation.
///
/// Division by a zero channel yields `inf` or `NaN`; the rules compare
/// these like any other float, so a `NaN` ratio simply fails every ratio
/// test and the input falls through to the catch-all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRatios {
    pub red_to_green: f64,
    /// Reported for display only; no rule reads it.
    pub blue_to_red: f64,
    pub melanin: f64,
}

impl ColorRatios {
    pub fn of(profile: &ColorProfile) -> Self {
        Self {
            red_to_green: profile.average_red / profile.average_green,
            blue_to_red: profile.average_blue / profile.average_red,
            melanin: profile.melanin_proxy(),
        }
    }
}

/// Which rule claimed the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchedRule {
    /// Rule 1: low melanin, warm ratio
    LowMelaninWarm,
    /// Rule 2: mid melanin, mildly warm ratio
    MidMelaninWarm,
    /// Rule 3: higher melanin band, ratio ignored
    HighMelaninBand,
    /// Rule 4: nothing above matched
    Fallback,
}

impl MatchedRule {
    /// 1-based position in the evaluation order.
    pub fn position(self) -> u8 {
        match self {
            MatchedRule::LowMelaninWarm => 1,
            MatchedRule::MidMelaninWarm => 2,
            MatchedRule::HighMelaninBand => 3,
            MatchedRule::Fallback => 4,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            MatchedRule::LowMelaninWarm => "low_melanin_warm",
            MatchedRule::MidMelaninWarm => "mid_melanin_warm",
            MatchedRule::HighMelaninBand => "high_melanin_band",
            MatchedRule::Fallback => "fallback",
        }
    }

    pub fn category(self) -> SkinCategory {
        match self {
            MatchedRule::LowMelaninWarm => SkinCategory::NorthIndianFair,
            MatchedRule::MidMelaninWarm => SkinCategory::CentralIndianWheatish,
            MatchedRule::HighMelaninBand => SkinCategory::SouthIndianBronze,
            MatchedRule::Fallback => SkinCategory::DeepSouthIndian,
        }
    }
}

/// Result of classifying one profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub category: SkinCategory,
    pub rule: MatchedRule,
    pub ratios: ColorRatios,
}

/// Classify a color profile.
///
/// Pure and total: the same profile always yields the same category, and
/// every input (including non-finite ratios) lands in exactly one rule.
///
/// # Example
///
/// ```
/// use skin_tone::{classify, ColorProfile, SkinCategory};
///
/// // brightness 200 -> melanin ~0.22, red/green 1.1
/// let profile = ColorProfile::new(200.0, 220.0, 200.0, 180.0);
/// assert_eq!(classify(&profile).category, SkinCategory::NorthIndianFair);
/// ```
pub fn classify(profile: &ColorProfile) -> Classification {
    let ratios = ColorRatios::of(profile);
    let rule = match_rule(&ratios);
    Classification {
        category: rule.category(),
        rule,
        ratios,
    }
}

/// Evaluate the rule ladder against precomputed ratios.
pub fn match_rule(ratios: &ColorRatios) -> MatchedRule {
    let melanin = ratios.melanin;
    let red_green = ratios.red_to_green;

    if melanin < FAIR_MELANIN_MAX && red_green > FAIR_RED_GREEN_MIN {
        MatchedRule::LowMelaninWarm
    } else if melanin >= FAIR_MELANIN_MAX
        && melanin < WHEATISH_MELANIN_MAX
        && red_green > WHEATISH_RED_GREEN_MIN
    {
        MatchedRule::MidMelaninWarm
    } else if melanin >= WHEATISH_MELANIN_MAX && melanin < BRONZE_MELANIN_MAX {
        MatchedRule::HighMelaninBand
    } else {
        MatchedRule::Fallback
    }
}
