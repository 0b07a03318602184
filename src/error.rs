use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde::Serialize;
use serde_json::json;
use tracing::error;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Every request-level failure. Handlers return `Result<HttpResponse, ApiError>`
/// and actix renders the error through `ResponseError`.
#[derive(Debug, Display)]
pub enum ApiError {
    #[display(fmt = "{}", _0)]
    NotFound(String),

    #[display(fmt = "{}", _0)]
    Conflict(String),

    #[display(fmt = "{}", message)]
    ValidationFailed {
        message: String,
        errors: Vec<FieldError>,
    },

    /// Bad credentials. The message must not say which part was wrong.
    #[display(fmt = "{}", _0)]
    AuthFailed(String),

    /// Raw driver error; logged, never shown to the client.
    #[display(fmt = "Internal server error")]
    DatabaseFault(sqlx::Error),

    #[display(fmt = "Internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn not_found(entity: &str) -> Self {
        ApiError::NotFound(format!("{} not found", entity))
    }

    pub fn validation(errors: Vec<FieldError>) -> Self {
        ApiError::ValidationFailed {
            message: "Validation failed".to_string(),
            errors,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::ValidationFailed {
            message: message.into(),
            errors: Vec::new(),
        }
    }

    pub fn invalid_credentials() -> Self {
        ApiError::AuthFailed("Invalid username or password".to_string())
    }

    /// Maps a driver error, turning unique-key violations into Conflict.
    pub fn from_db(err: sqlx::Error, conflict_message: &str) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return ApiError::Conflict(conflict_message.to_string());
            }
        }
        ApiError::DatabaseFault(err)
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::from_db(err, "Duplicate entry")
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            ApiError::AuthFailed(_) => StatusCode::UNAUTHORIZED,
            ApiError::DatabaseFault(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::DatabaseFault(e) => error!(error = %e, "Database error"),
            ApiError::Internal(e) => error!(error = %e, "Internal error"),
            _ => {}
        }

        let status = self.status_code();
        let mut body = json!({
            "error": status.canonical_reason().unwrap_or("Error"),
            "message": self.to_string(),
        });
        if let ApiError::ValidationFailed { errors, .. } = self {
            if !errors.is_empty() {
                body["errors"] = json!(errors);
            }
        }

        HttpResponse::build(status).json(body)
    }
}
