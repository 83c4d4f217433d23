//! Category classification from a color profile.

mod category;
mod rules;

pub use category::SkinCategory;
pub use rules::{
    classify, match_rule, Classification, ColorRatios, MatchedRule, BRONZE_MELANIN_MAX,
    FAIR_MELANIN_MAX, FAIR_RED_GREEN_MIN, WHEATISH_MELANIN_MAX, WHEATISH_RED_GREEN_MIN,
};
