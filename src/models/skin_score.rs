use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// AQI index from which pollution costs points.
pub const POLLUTED_AQI: u8 = 3;
const POLLUTION_PENALTY: i32 = 10;

/// A skin concern that lowers the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Concern {
    Acne,
    EnlargedPores,
    Shine,
    Hyperpigmentation,
    DarkCircles,
    FineLines,
    UnevenTexture,
    ProductSensitivity,
}

impl Concern {
    /// Points deducted from 100.
    pub fn deduction(self) -> i32 {
        match self {
            Concern::Acne => 15,
            Concern::Hyperpigmentation | Concern::ProductSensitivity => 12,
            Concern::EnlargedPores | Concern::DarkCircles | Concern::UnevenTexture => 10,
            Concern::Shine | Concern::FineLines => 8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Poor,
    Fair,
    Good,
}

impl ScoreBand {
    pub fn of(score: u8) -> Self {
        match score {
            0..=40 => ScoreBand::Poor,
            41..=70 => ScoreBand::Fair,
            _ => ScoreBand::Good,
        }
    }
}

/// Overall skin health out of 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkinScore {
    pub score: u8,
    pub band: ScoreBand,
}

impl SkinScore {
    /// Deduct each listed concern (repeats count again) and the pollution
    /// penalty when `aqi` is at or above [`POLLUTED_AQI`].
    pub fn compute(concerns: &[Concern], aqi: Option<u8>) -> Self {
        let mut score: i32 = 100;
        score -= concerns.iter().map(|c| c.deduction()).sum::<i32>();
        if aqi.is_some_and(|index| index >= POLLUTED_AQI) {
            score -= POLLUTION_PENALTY;
        }

        let score = score.clamp(0, 100) as u8;
        Self {
            score,
            band: ScoreBand::of(score),
        }
    }
}
