pub mod aqi;
pub mod config;
pub mod pollution;
pub mod skin_score;

pub use aqi::AqiLevel;
pub use config::{AppConfig, CacheConfig, LimitsConfig};
pub use pollution::{Conditions, ImpactFactors, PollutantLevels, PollutionScore, ToneSensitivity};
pub use skin_score::{Concern, ScoreBand, SkinScore};
