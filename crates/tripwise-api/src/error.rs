//! HTTP error responses
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tripwise_core::TripError;
use tripwise_flights::FlightSearchError;

#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status: StatusCode,
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: message.into(),
            code: "internal".to_string(),
        }
    }
}

impl ApiError {
    /// A request body axum could not decode, reported under `code`
    pub fn rejected(rejection: JsonRejection, code: &str) -> Self {
        Self {
            status: rejection.status(),
            error: rejection.body_text(),
            code: code.to_string(),
        }
    }
}

impl From<TripError> for ApiError {
    fn from(err: TripError) -> Self {
        let status = match err {
            TripError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        };
        Self {
            status,
            code: err.code().to_string(),
            error: err.to_string(),
        }
    }
}

impl From<FlightSearchError> for ApiError {
    fn from(err: FlightSearchError) -> Self {
        let (status, code) = match err {
            FlightSearchError::InvalidQuery(_) => (StatusCode::UNPROCESSABLE_ENTITY, "invalid_query"),
            FlightSearchError::Timeout(_) => (StatusCode::GATEWAY_TIMEOUT, "timeout"),
            FlightSearchError::Provider(_) => (StatusCode::BAD_GATEWAY, "provider"),
        };
        Self {
            status,
            code: code.to_string(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
