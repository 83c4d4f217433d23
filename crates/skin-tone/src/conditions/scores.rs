//! Whole-image condition percentages derived from channel averages.
//!
//! Each score is a linear function of one channel difference or of the
//! brightness, rounded and clamped to `0..=100`:
//!
//! | Score          | Formula                      |
//! |----------------|------------------------------|
//! | acne           | `(R - G) * 0.8`              |
//! | pores          | `(100 - brightness) * 0.4`   |
//! | oiliness       | `(G - B) * 0.6`              |
//! | pigmentation   | `(B - G) * 0.7`              |
//! | dark_circles   | `(255 - brightness) * 0.25`  |
//! | wrinkles       | `(255 - R) * 0.15`           |

use crate::profile::ColorProfile;

/// Condition percentages, each in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionScores {
    pub acne: u8,
    pub pores: u8,
    pub oiliness: u8,
    pub pigmentation: u8,
    pub dark_circles: u8,
    pub wrinkles: u8,
}

impl ConditionScores {
    pub fn from_profile(profile: &ColorProfile) -> Self {
        let r = profile.average_red;
        let g = profile.average_green;
        let b = profile.average_blue;
        let brightness = profile.average_brightness;

        Self {
            acne: percent((r - g) * 0.8),
            pores: percent((100.0 - brightness) * 0.4),
            oiliness: percent((g - b) * 0.6),
            pigmentation: percent((b - g) * 0.7),
            dark_circles: percent((255.0 - brightness) * 0.25),
            wrinkles: percent((255.0 - r) * 0.15),
        }
    }

    /// Scores paired with their names, in declaration order.
    pub fn named(&self) -> [(&'static str, u8); 6] {
        [
            ("acne", self.acne),
            ("pores", self.pores),
            ("oiliness", self.oiliness),
            ("pigmentation", self.pigmentation),
            ("dark_circles", self.dark_circles),
            ("wrinkles", self.wrinkles),
        ]
    }
}

/// Round and clamp to a 0-100 percentage. NaN maps to 0.
pub(crate) fn percent(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}
