pub mod analyze;
pub mod aqi;
pub mod cache;
pub mod pollution;

pub use analyze::{handle_analyze, AnalysisResponse, __path_handle_analyze};
pub use aqi::{handle_aqi, AqiResponse, __path_handle_aqi};
pub use cache::{
    handle_cache_clear, handle_cache_stats, CacheStatsResponse, __path_handle_cache_clear,
    __path_handle_cache_stats,
};
pub use pollution::{
    handle_pollution_score, handle_skin_score, PollutionScoreRequest, PollutionScoreResponse,
    SkinScoreRequest, SkinScoreResponse, __path_handle_pollution_score, __path_handle_skin_score,
};
