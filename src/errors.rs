//! # Error Handling
//!
//! Every layer (repository, operations, handlers) reports failures as [`ApiError`],
//! which maps onto an HTTP status and a sanitized JSON body:
//!
//! | variant        | status |
//! |----------------|--------|
//! | `NotFound`     | 404    |
//! | `BadRequest`   | 400    |
//! | `InvalidPatch` | 422    |
//! | `Conflict`     | 409    |
//! | `Persistence`  | 500    |
//! | `Internal`     | 500    |
//!
//! Database details are logged where they happen and never sent to clients.
//!
//! ```rust,ignore
//! let person = Person::get_one(&db, id).await?; // ApiError::NotFound if missing
//! ```

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use std::fmt;

use crate::patch::PatchError;

/// API error type with sanitized responses
#[derive(Debug)]
pub enum ApiError {
    /// 404 Not Found - no row with this id
    NotFound {
        /// Resource type (e.g., "person", "rol")
        resource: String,
        /// Id that wasn't found
        id: Option<String>,
    },

    /// 400 Bad Request - rejected by a business rule
    BadRequest { message: String },

    /// 422 Unprocessable Entity - a body or patch could not be applied
    InvalidPatch {
        /// Offending field, when known
        field: Option<String>,
        message: String,
    },

    /// 409 Conflict - unique or foreign key constraint violated
    Conflict { message: String },

    /// 500 Internal Server Error - store failure (details logged, not exposed)
    Persistence {
        message: String,
        internal: DbErr,
    },

    /// 500 Internal Server Error - anything else
    Internal {
        message: String,
        internal: Option<String>,
    },
}

impl ApiError {
    pub fn not_found(resource: impl Into<String>, id: Option<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn invalid_patch(field: Option<String>, message: impl Into<String>) -> Self {
        Self::InvalidPatch {
            field,
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Wrap a store error. Constraint violations become `Conflict`, missing rows `NotFound`.
    pub fn persistence(err: DbErr) -> Self {
        if let DbErr::RecordNotFound(msg) = &err {
            let resource = msg.split_whitespace().next().unwrap_or("Resource");
            return Self::not_found(resource, None);
        }
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => return Self::conflict("Duplicate entry"),
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                return Self::conflict("Referenced record is missing or still in use");
            }
            _ => {}
        }
        Self::Persistence {
            message: "A database error occurred".to_string(),
            internal: err,
        }
    }

    pub fn internal(message: impl Into<String>, internal: Option<String>) -> Self {
        Self::Internal {
            message: message.into(),
            internal,
        }
    }

    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::InvalidPatch { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Persistence { .. } | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The user-facing message (sanitized)
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound { resource, id } => match id {
                Some(id) => format!("{resource} with ID '{id}' not found"),
                None => format!("{resource} not found"),
            },
            Self::BadRequest { message }
            | Self::InvalidPatch { message, .. }
            | Self::Conflict { message }
            | Self::Persistence { message, .. }
            | Self::Internal { message, .. } => message.clone(),
        }
    }

    /// Persistence errors are logged by the repository; only `Internal` details are logged here.
    fn log_internal(&self) {
        match self {
            Self::Internal {
                internal: Some(details),
                ..
            } => {
                tracing::error!(details = %details, "Internal error occurred");
            }
            _ => {
                tracing::debug!(
                    error = %self.user_message(),
                    status = %self.status_code(),
                    "API error"
                );
            }
        }
    }
}

/// Error response sent to users
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log_internal();

        let status = self.status_code();
        let field = match &self {
            Self::InvalidPatch { field, .. } => field.clone(),
            _ => None,
        };
        let response = ErrorResponse {
            error: self.user_message(),
            field,
        };

        (status, Json(response)).into_response()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for ApiError {}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        Self::persistence(err)
    }
}

impl From<PatchError> for ApiError {
    fn from(err: PatchError) -> Self {
        let field = match &err {
            PatchError::NullOnRequired { field } => (*field).to_string(),
        };
        Self::invalid_patch(Some(field), err.to_string())
    }
}

/// Body extraction failures: a well-formed body with the wrong shape is 422,
/// anything else (syntax, content type) is 400.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => Self::invalid_patch(None, err.body_text()),
            other => Self::bad_request(other.body_text()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_with_id() {
        let err = ApiError::not_found("person", Some("12".to_string()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.user_message(), "person with ID '12' not found");
    }

    #[test]
    fn test_not_found_without_id() {
        let err = ApiError::not_found("rol", None);
        assert_eq!(err.user_message(), "rol not found");
    }

    #[test]
    fn test_bad_request() {
        let err = ApiError::bad_request("Username cannot be blank");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.user_message(), "Username cannot be blank");
    }

    #[test]
    fn test_patch_error_becomes_unprocessable() {
        let err: ApiError = PatchError::NullOnRequired { field: "name" }.into();
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        match err {
            ApiError::InvalidPatch { field, message } => {
                assert_eq!(field.as_deref(), Some("name"));
                assert!(message.contains("'name'"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_record_not_found_becomes_404() {
        let err: ApiError = DbErr::RecordNotFound("person not found".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.user_message(), "person not found");
    }

    #[test]
    fn test_other_db_errors_are_sanitized() {
        for db_err in [
            DbErr::Custom("disk on fire".to_string()),
            DbErr::Type("Type error".to_string()),
            DbErr::Json("JSON error".to_string()),
        ] {
            let err: ApiError = db_err.into();
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(err.user_message(), "A database error occurred");
        }
    }

    #[test]
    fn test_conflict() {
        let err = ApiError::conflict("Duplicate entry");
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_internal() {
        let err = ApiError::internal("Processing failed", Some("detail".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.user_message(), "Processing failed");
    }

    #[test]
    fn test_display_trait() {
        let err = ApiError::bad_request("Test error");
        assert_eq!(format!("{err}"), "Test error");
        let _: &dyn std::error::Error = &err;
    }
}
