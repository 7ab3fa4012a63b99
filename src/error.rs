//! Errors surfaced to HTTP clients.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("lat and lon must both be present and numeric")]
    InvalidCoordinates,

    #[error("forecast provider request failed: {0:#}")]
    Upstream(#[from] anyhow::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCoordinates => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            Self::InvalidCoordinates => serde_json::json!({}),
            Self::Upstream(_) => serde_json::json!({ "error": "forecast provider unavailable" }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
