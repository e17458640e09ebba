//! API error types with IntoResponse
//!
//! Handlers return `ApiError`; its response carries the status plus an
//! `ErrorDetails` extension. The `error_envelope` middleware, which sees the request
//! path, turns that into the final JSON body.

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed id or request field (400)
    Validation(ValidationError),

    /// Semantically invalid request, e.g. a duplicate enrollment (400)
    InvalidInput { message: String },

    /// Entity or route not found (404)
    NotFound { message: String },

    /// Anything else (500). The message is passed through as-is.
    Internal { message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::InvalidInput { message } | Self::NotFound { message } => message.clone(),
            Self::Internal { message } => format!("Internal server error: {}", message),
        }
    }
}

/// Error payload returned for every failed request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub timestamp: String,
    pub status: String,
    pub error: String,
    pub message: String,
    pub path: String,
}

impl ErrorBody {
    pub fn new(status: StatusCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now().format("%Y-%m-%dT%H:%M:%S%.3f").to_string(),
            status: status.as_u16().to_string(),
            error: status.canonical_reason().unwrap_or("Unknown").to_owned(),
            message: message.into(),
            path: path.into(),
        }
    }
}

/// Marker left on error responses for `error_envelope` to pick up.
#[derive(Debug, Clone)]
struct ErrorDetails(String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        if let Self::Internal { .. } = &self {
            tracing::error!(%message, "request failed");
        } else {
            tracing::debug!(status = status.as_u16(), %message, "request rejected");
        }

        let mut response = (status, Json(ErrorBody::new(status, message.clone(), ""))).into_response();
        response.extensions_mut().insert(ErrorDetails(message));
        response
    }
}

/// Middleware that fills in the request path on error bodies.
pub async fn error_envelope(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let mut response = next.run(request).await;

    match response.extensions_mut().remove::<ErrorDetails>() {
        Some(ErrorDetails(message)) => {
            let status = response.status();
            (status, Json(ErrorBody::new(status, message, path))).into_response()
        }
        None => response,
    }
}

/// Fallback for unmatched routes, so they share the error envelope.
pub async fn route_not_found() -> ApiError {
    ApiError::NotFound {
        message: "Route not found".to_owned(),
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { .. } => Self::NotFound {
                message: e.to_string(),
            },
            DbError::AlreadyEnrolled { .. } => Self::InvalidInput {
                message: e.to_string(),
            },
            DbError::Sqlx(_) => Self::Internal {
                message: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityKind;
    use axum::body::to_bytes;

    async fn body_of(response: Response) -> ErrorBody {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::Empty { field: "name" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_of(response).await;
        assert_eq!(body.status, "400");
        assert_eq!(body.error, "Bad Request");
        assert_eq!(body.message, "name cannot be empty");
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let err = ApiError::from(DbError::not_found(EntityKind::Student, 9));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_of(response).await;
        assert_eq!(body.error, "Not Found");
        assert_eq!(body.message, "Student with id 9 not found");
    }

    #[tokio::test]
    async fn duplicate_enrollment_is_400() {
        let err = ApiError::from(DbError::AlreadyEnrolled {
            student_id: 1,
            course_id: 2,
        });
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Student is already enrolled in this course");
    }

    #[tokio::test]
    async fn database_error_is_500_with_cause() {
        let err = ApiError::from(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_of(response).await;
        assert_eq!(body.error, "Internal Server Error");
        assert!(body.message.starts_with("Internal server error: "));
        assert!(body.message.contains(&sqlx::Error::PoolTimedOut.to_string()));
    }

    #[test]
    fn timestamp_is_local_iso_datetime() {
        let body = ErrorBody::new(StatusCode::NOT_FOUND, "x", "/p");
        // e.g. 2026-10-16T12:00:00.123
        assert_eq!(body.timestamp.len(), 23);
        assert_eq!(&body.timestamp[10..11], "T");
    }
}
