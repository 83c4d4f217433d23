use serde::Serialize;
use utoipa::ToSchema;

/// Air quality band as reported by 1-5 AQI providers, read for skin impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AqiLevel {
    Good,
    Moderate,
    Unhealthy,
    Severe,
}

impl AqiLevel {
    /// Map a provider index to a band. Anything outside 1-4 is severe.
    pub fn from_index(index: u8) -> Self {
        match index {
            1 => AqiLevel::Good,
            2 => AqiLevel::Moderate,
            3 | 4 => AqiLevel::Unhealthy,
            _ => AqiLevel::Severe,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AqiLevel::Good => "good",
            AqiLevel::Moderate => "moderate",
            AqiLevel::Unhealthy => "unhealthy",
            AqiLevel::Severe => "severe",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AqiLevel::Good => "Clean air; pollution has little effect on skin.",
            AqiLevel::Moderate => {
                "Moderate pollution; sensitive skin may show mild irritation."
            }
            AqiLevel::Unhealthy => {
                "Unhealthy pollution; expect oxidative stress, dehydration and faster aging."
            }
            AqiLevel::Severe => {
                "Severe pollution; the skin barrier is damaged, with inflammation and faster aging."
            }
        }
    }
}

impl std::fmt::Display for AqiLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
