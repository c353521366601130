use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // Startup errors
    #[error("failed to connect to the payload store: {0}")]
    Connection(#[source] mongodb::error::Error),

    #[error("invalid store address `{0}`")]
    InvalidAddress(String),

    // Store errors
    #[error("failed to write payload: {0}")]
    Write(#[source] mongodb::error::Error),

    #[error("failed to read payload: {0}")]
    Read(#[source] mongodb::error::Error),

    #[error("malformed payload record: {0}")]
    MalformedRecord(String),

    #[error("{0} not found")]
    NotFound(String),

    // Request errors
    #[error("failed to read request body: {0}")]
    Body(#[from] axum::Error),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Body(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Generating response for AppError: {:?}", self);

        let status_code = self.status_code();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status_code, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = AppError::NotFound("payload".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "payload not found");
    }

    #[test]
    fn test_store_errors_map_to_500() {
        let err = AppError::MalformedRecord("no data".to_string());
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
