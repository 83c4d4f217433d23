//! Heuristic condition scores shown next to the category.
//!
//! [`ConditionScores`] are derived from the color profile alone;
//! [`RegionScores`] need the pixel grid. [`Severity`] buckets any score
//! for display.

mod region;
mod scores;
mod severity;

pub use region::{RegionScores, DARK_LUMINANCE};
pub use scores::ConditionScores;
pub use severity::Severity;
