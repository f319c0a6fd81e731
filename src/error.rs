use axum::Json;
use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Failure of a core operation, independent of the transport.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Username already exists. Please choose a different one.")]
    DuplicateUsername,
    #[error("Email already registered. Please use a different email.")]
    DuplicateEmail,
    #[error("Invalid username or password.")]
    InvalidCredentials,
    #[error("Please log in to continue.")]
    Unauthorized,
    #[error("Admin privileges required.")]
    Forbidden,
    #[error("{0} not found.")]
    NotFound(&'static str),
    #[error("{0}")]
    Validation(String),
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Unified application error type that maps to JSON HTTP responses.
///
/// Error format: `{ "error": { "code": "...", "message": "..." } }`.
#[derive(Debug)]
pub enum AppError {
    /// 400 Bad Request
    BadRequest(String),
    /// 401 Unauthorized
    Unauthorized(String),
    /// 403 Forbidden
    Forbidden(String),
    /// 404 Not Found
    NotFound(String),
    /// 409 Conflict
    Conflict(String),
    /// 500 Internal Server Error (wraps any error, logs details, returns generic message)
    Internal(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg),
            Self::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg),
            Self::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            Self::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg),
            Self::Internal(err) => {
                tracing::error!("Internal server error: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        (
            status,
            Json(json!({
                "error": {
                    "code": code,
                    "message": message,
                }
            })),
        )
            .into_response()
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        let message = err.to_string();
        match err {
            ServiceError::DuplicateUsername | ServiceError::DuplicateEmail => {
                Self::Conflict(message)
            }
            ServiceError::InvalidCredentials | ServiceError::Unauthorized => {
                Self::Unauthorized(message)
            }
            ServiceError::Forbidden => Self::Forbidden(message),
            ServiceError::NotFound(_) => Self::NotFound(message),
            ServiceError::Validation(msg) => Self::BadRequest(msg),
            ServiceError::Database(db_err) => Self::Internal(db_err.into()),
            ServiceError::Internal(inner) => Self::Internal(inner),
        }
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Internal(err.into())
    }
}

/// Undecodable form bodies share the JSON error shape.
impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_map_to_conflict() {
        assert!(matches!(
            AppError::from(ServiceError::DuplicateUsername),
            AppError::Conflict(msg) if msg.contains("Username")
        ));
        assert!(matches!(
            AppError::from(ServiceError::DuplicateEmail),
            AppError::Conflict(msg) if msg.contains("Email")
        ));
    }

    #[test]
    fn auth_failures_map_to_unauthorized() {
        assert!(matches!(
            AppError::from(ServiceError::InvalidCredentials),
            AppError::Unauthorized(_)
        ));
        assert!(matches!(
            AppError::from(ServiceError::Unauthorized),
            AppError::Unauthorized(_)
        ));
    }

    #[test]
    fn validation_keeps_message() {
        assert!(matches!(
            AppError::from(ServiceError::Validation("Duration is required.".to_string())),
            AppError::BadRequest(msg) if msg == "Duration is required."
        ));
    }

    #[test]
    fn not_found_names_the_resource() {
        assert!(matches!(
            AppError::from(ServiceError::NotFound("Exercise")),
            AppError::NotFound(msg) if msg == "Exercise not found."
        ));
    }

    #[test]
    fn status_codes() {
        let cases = [
            (AppError::BadRequest(String::new()), StatusCode::BAD_REQUEST),
            (AppError::Unauthorized(String::new()), StatusCode::UNAUTHORIZED),
            (AppError::Forbidden(String::new()), StatusCode::FORBIDDEN),
            (AppError::NotFound(String::new()), StatusCode::NOT_FOUND),
            (AppError::Conflict(String::new()), StatusCode::CONFLICT),
            (
                AppError::Internal(anyhow::anyhow!("boom")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
