//! Pollution impact score for skin.
//!
//! Each pollutant is scored against its WHO guideline value, the scores are
//! weighted, and the weighted sum is scaled by skin-tone sensitivity and by
//! seasonal, humidity and temperature factors.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_HUMIDITY: f64 = 50.0;
pub const DEFAULT_TEMPERATURE: f64 = 20.0;

/// Pollutant concentrations in μg/m³, as reported by AQI providers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PollutantLevels {
    pub pm2_5: f64,
    pub pm10: f64,
    pub no2: f64,
    pub so2: f64,
    pub o3: f64,
    pub co: f64,
}

impl PollutantLevels {
    /// Score each pollutant 0-100 as a share of its guideline value.
    pub fn scores(&self) -> PollutantLevels {
        let score = |value: f64, guideline: f64| (value / guideline * 100.0).clamp(0.0, 100.0);
        PollutantLevels {
            pm2_5: score(self.pm2_5, 25.0),
            pm10: score(self.pm10, 50.0),
            no2: score(self.no2, 200.0),
            so2: score(self.so2, 20.0),
            o3: score(self.o3, 100.0),
            co: score(self.co, 4000.0),
        }
    }

    /// Weighted sum of per-pollutant scores. Fine particulates weigh most.
    fn weighted(&self) -> f64 {
        self.pm2_5 * 0.25
            + self.pm10 * 0.15
            + self.no2 * 0.15
            + self.so2 * 0.15
            + self.o3 * 0.15
            + self.co * 0.15
    }
}

/// How strongly a skin tone reacts to pollution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ToneSensitivity {
    Light,
    Medium,
    Dark,
}

impl ToneSensitivity {
    pub fn factor(self) -> f64 {
        match self {
            ToneSensitivity::Light => 1.3,
            ToneSensitivity::Medium => 1.0,
            ToneSensitivity::Dark => 0.7,
        }
    }
}

/// Summer and winter are harshest. Out-of-range months are neutral.
pub fn seasonal_factor(month: u32) -> f64 {
    match month {
        12 | 1 | 2 => 1.2,
        6..=8 => 1.3,
        3..=5 => 1.1,
        _ => 1.0,
    }
}

/// Relative humidity in percent.
pub fn humidity_factor(humidity: f64) -> f64 {
    if humidity < 30.0 {
        1.3
    } else if humidity < 50.0 || humidity > 80.0 {
        1.2
    } else {
        1.0
    }
}

/// Air temperature in °C.
pub fn temperature_factor(temperature: f64) -> f64 {
    if temperature < 5.0 {
        1.3
    } else if temperature < 15.0 || temperature > 30.0 {
        1.2
    } else {
        1.0
    }
}

/// Conditions a pollution reading is taken under.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conditions {
    pub humidity: f64,
    pub temperature: f64,
    pub month: u32,
    pub skin_tone: Option<ToneSensitivity>,
}

impl Conditions {
    /// Default humidity and temperature for the given month.
    pub fn for_month(month: u32) -> Self {
        Self {
            humidity: DEFAULT_HUMIDITY,
            temperature: DEFAULT_TEMPERATURE,
            month,
            skin_tone: None,
        }
    }
}

/// Multipliers applied to the weighted pollutant score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct ImpactFactors {
    pub sensitivity: f64,
    pub seasonal: f64,
    pub humidity: f64,
    pub temperature: f64,
}

impl ImpactFactors {
    pub fn of(conditions: &Conditions) -> Self {
        Self {
            sensitivity: conditions.skin_tone.map_or(1.0, ToneSensitivity::factor),
            seasonal: seasonal_factor(conditions.month),
            humidity: humidity_factor(conditions.humidity),
            temperature: temperature_factor(conditions.temperature),
        }
    }

    fn product(&self) -> f64 {
        self.sensitivity * self.seasonal * self.humidity * self.temperature
    }
}

/// Overall pollution impact on skin, 0-100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollutionScore {
    pub score: u8,
    pub pollutants: PollutantLevels,
    pub factors: ImpactFactors,
}

impl PollutionScore {
    /// Score a reading. The scaled score is truncated, then capped at 100.
    pub fn compute(levels: &PollutantLevels, conditions: &Conditions) -> Self {
        let pollutants = levels.scores();
        let factors = ImpactFactors::of(conditions);
        let scaled = pollutants.weighted() * factors.product();

        Self {
            score: scaled.trunc().clamp(0.0, 100.0) as u8,
            pollutants,
            factors,
        }
    }
}
