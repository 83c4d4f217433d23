use axum::response::Json;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::pollution::{DEFAULT_HUMIDITY, DEFAULT_TEMPERATURE};
use crate::models::{
    Concern, Conditions, ImpactFactors, PollutantLevels, PollutionScore, ScoreBand, SkinScore,
    ToneSensitivity,
};

/// Pollutant reading and the conditions it was taken under
#[derive(Debug, Deserialize, ToSchema)]
pub struct PollutionScoreRequest {
    pub components: PollutantLevels,
    /// Relative humidity in percent (default 50)
    pub humidity: Option<f64>,
    /// Temperature in °C (default 20)
    pub temperature: Option<f64>,
    /// Month 1-12 (default: current UTC month)
    pub month: Option<u32>,
    pub skin_tone: Option<ToneSensitivity>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PollutionScoreResponse {
    /// Overall impact on skin, 0-100
    pub score: u8,
    /// Per-pollutant scores, 0-100
    pub pollutants: PollutantLevels,
    pub factors: ImpactFactors,
}

/// Score pollution impact on skin
#[utoipa::path(
    post,
    path = "/api/pollution/score",
    request_body = PollutionScoreRequest,
    responses(
        (status = 200, description = "Pollution impact score", body = PollutionScoreResponse),
        (status = 400, description = "Malformed JSON body"),
        (status = 422, description = "Body does not match the request schema"),
    ),
    tag = "Environment"
)]
pub async fn handle_pollution_score(
    Json(request): Json<PollutionScoreRequest>,
) -> Json<PollutionScoreResponse> {
    let conditions = Conditions {
        humidity: request.humidity.unwrap_or(DEFAULT_HUMIDITY),
        temperature: request.temperature.unwrap_or(DEFAULT_TEMPERATURE),
        month: request.month.unwrap_or_else(|| chrono::Utc::now().month()),
        skin_tone: request.skin_tone,
    };
    let result = PollutionScore::compute(&request.components, &conditions);

    tracing::debug!(score = result.score, month = conditions.month, "Pollution scored");

    Json(PollutionScoreResponse {
        score: result.score,
        pollutants: result.pollutants,
        factors: result.factors,
    })
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SkinScoreRequest {
    #[serde(default)]
    pub concerns: Vec<Concern>,
    /// Air quality index (1 = good, 5 = very poor)
    pub aqi: Option<u8>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SkinScoreResponse {
    pub score: u8,
    pub band: ScoreBand,
}

/// Overall skin score from reported concerns
#[utoipa::path(
    post,
    path = "/api/skin-score",
    request_body = SkinScoreRequest,
    responses(
        (status = 200, description = "Skin score out of 100", body = SkinScoreResponse),
        (status = 422, description = "Unknown concern"),
    ),
    tag = "Analysis"
)]
pub async fn handle_skin_score(Json(request): Json<SkinScoreRequest>) -> Json<SkinScoreResponse> {
    let result = SkinScore::compute(&request.concerns, request.aqi);
    Json(SkinScoreResponse {
        score: result.score,
        band: result.band,
    })
}
