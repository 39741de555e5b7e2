use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::services::InvalidAmount;

pub const QUOTE_FAILURE: &str = "Could not fetch quote data.";
pub const WEATHER_FAILURE: &str = "Could not fetch weather data. Please check the city name.";
pub const CURRENCY_FAILURE: &str = "Could not fetch currency conversion data.";

/// Ошибки API. Причина сбоя upstream клиенту не отдается, только в лог.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Upstream(&'static str),

    #[error("{0}")]
    Internal(&'static str),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<InvalidAmount> for ApiError {
    fn from(err: InvalidAmount) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
