use axum::{extract::Path, response::Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::AqiLevel;

/// Skin impact of an air quality index
#[derive(Debug, Serialize, ToSchema)]
pub struct AqiResponse {
    pub index: u8,
    pub level: AqiLevel,
    pub description: String,
}

/// Interpret an air quality index
///
/// Takes the 1-5 index reported by common AQI providers.
#[utoipa::path(
    get,
    path = "/api/aqi/{index}",
    responses(
        (status = 200, description = "Interpreted index", body = AqiResponse),
        (status = 400, description = "Index is not a number in 0-255"),
    ),
    params(
        ("index" = u8, Path, description = "Air quality index (1 = good, 5 = very poor)"),
    ),
    tag = "Environment"
)]
pub async fn handle_aqi(Path(index): Path<u8>) -> Json<AqiResponse> {
    let level = AqiLevel::from_index(index);
    Json(AqiResponse {
        index,
        level,
        description: level.description().to_string(),
    })
}
