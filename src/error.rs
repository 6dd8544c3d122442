//! Application error type shared by the engine, the repositories and the HTTP layer.
//!
//! Every variant carries a human-readable `message` and a JSON `details` payload.
//! [`IntoResponse`] renders them as:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "Short URL not found", "details": { "code": "abc" } } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// Name of the unique constraint guarding `urls.short_code`.
pub const SHORT_CODE_CONSTRAINT: &str = "urls_short_code_key";

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Input is not an absolute `http`/`https` URL.
    #[error("{message}")]
    InvalidUrl { message: String, details: Value },

    /// No mapping exists for the requested short code.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// The store rejected an insert because the short code is taken.
    #[error("{message}")]
    DuplicateCode { message: String, details: Value },

    /// Every generated short code collided.
    #[error("{message}")]
    CodeGenerationExhausted { message: String, details: Value },

    /// The database could not be reached or the query failed.
    #[error("{message}")]
    StoreUnavailable { message: String, details: Value },

    /// Unexpected failure outside the store, such as the OS random source.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn invalid_url(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidUrl {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn duplicate_code(message: impl Into<String>, details: Value) -> Self {
        Self::DuplicateCode {
            message: message.into(),
            details,
        }
    }
    pub fn code_generation_exhausted(message: impl Into<String>, details: Value) -> Self {
        Self::CodeGenerationExhausted {
            message: message.into(),
            details,
        }
    }
    pub fn store_unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Shorthand for the "unknown short code" case.
    pub fn short_code_not_found(code: &str) -> Self {
        Self::not_found("Short URL not found", json!({ "code": code }))
    }

    /// HTTP status associated with the variant.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::DuplicateCode { .. } => StatusCode::CONFLICT,
            AppError::CodeGenerationExhausted { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::StoreUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::InvalidUrl { .. } => "invalid_url",
            AppError::NotFound { .. } => "not_found",
            AppError::DuplicateCode { .. } => "duplicate_code",
            AppError::CodeGenerationExhausted { .. } => "code_generation_exhausted",
            AppError::StoreUnavailable { .. } => "store_unavailable",
            AppError::Internal { .. } => "internal_error",
        }
    }

    /// Converts the error into its serializable payload.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (message, details) = match self {
            AppError::InvalidUrl { message, details }
            | AppError::NotFound { message, details }
            | AppError::DuplicateCode { message, details }
            | AppError::CodeGenerationExhausted { message, details }
            | AppError::StoreUnavailable { message, details }
            | AppError::Internal { message, details } => (message.clone(), details.clone()),
        };

        ErrorInfo {
            code: self.code(),
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if is_unique_violation_on_code(&e) {
            return AppError::duplicate_code(
                "Short code already exists",
                json!({ "constraint": SHORT_CODE_CONSTRAINT }),
            );
        }

        tracing::error!(error = %e, "Database error");
        AppError::store_unavailable("Database error", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        let fields: Vec<&str> = field_errors.keys().map(|k| k.as_ref()).collect();
        AppError::invalid_url("Invalid URL", json!({ "fields": fields }))
    }
}

/// Returns true when `e` is a unique violation on the short code constraint.
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(SHORT_CODE_CONSTRAINT))
}
