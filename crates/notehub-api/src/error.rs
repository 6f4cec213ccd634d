//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use notehub_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Newtype over [`AppError`] so the HTTP mapping can live in this crate.
///
/// Handlers return `Result<_, ApiError>`; the `From` impl lets `?`
/// propagate domain errors from the service layer unchanged.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// Returns the HTTP status and stable error code for an error kind.
pub fn status_for(kind: ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        ErrorKind::Expired => (StatusCode::GONE, "EXPIRED"),
        ErrorKind::Authentication => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
        ErrorKind::Session => (StatusCode::UNAUTHORIZED, "SESSION"),
        ErrorKind::Database
        | ErrorKind::Serialization
        | ErrorKind::Configuration
        | ErrorKind::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = status_for(self.0.kind);

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self.0, "Internal server error");
        }

        // Server-side failures keep their detail in the logs only.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            "Internal server error".to_string()
        } else {
            self.0.message
        };

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expired_maps_to_gone() {
        assert_eq!(status_for(ErrorKind::Expired).0, StatusCode::GONE);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(status_for(ErrorKind::NotFound).0, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_authentication_maps_to_401() {
        assert_eq!(
            status_for(ErrorKind::Authentication).0,
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_validation_maps_to_400() {
        assert_eq!(status_for(ErrorKind::Validation).0, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_database_maps_to_500_and_hides_detail() {
        let (status, code) = status_for(ErrorKind::Database);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, "INTERNAL_ERROR");
    }
}
