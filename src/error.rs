use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use skin_tone::InvalidInput;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Empty image body")]
    Empty,

    #[error("Image too large: {size} bytes (max {max})")]
    TooLarge { size: usize, max: usize },

    #[error("Unsupported dimensions: {width}x{height} (max {max})")]
    UnsupportedDimensions { width: u32, height: u32, max: u32 },

    #[error("Unrecognized image format")]
    UnknownFormat,

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Pixel data rejected: {0}")]
    Pixels(#[from] InvalidInput),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DecodeError {
    /// Whether the upload was refused for its size rather than its content.
    pub fn is_oversize(&self) -> bool {
        matches!(
            self,
            DecodeError::TooLarge { .. }
                | DecodeError::UnsupportedDimensions { .. }
                | DecodeError::Image(image::ImageError::Limits(_))
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Decode(e) if e.is_oversize() => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Decode(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
