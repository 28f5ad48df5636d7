//! Failure taxonomy for the catalog API surface.
//!
//! Every operation fails with the same structured shape so that callers can
//! branch uniformly: page-level alerts for fetch failures, per-field helper
//! text for validation failures, a dismissible banner for the rest.

use std::collections::BTreeMap;

use thiserror::Error;

/// Field-keyed validation messages, e.g. `{"title": "Title is required"}`.
pub type FieldErrors = BTreeMap<String, String>;

/// Uniform failure shape raised by every API operation.
///
/// There is no retry policy anywhere: callers inspect the variant to decide
/// how to display the failure, never whether to reissue the request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The requested entity id is absent from the backing collection.
    #[error("{message}")]
    NotFound { message: String },

    /// The payload failed validation; messages are keyed by field name.
    #[error("{message}")]
    Validation {
        message: String,
        field_errors: FieldErrors,
    },

    /// The request itself is malformed, e.g. an upload without a file part.
    #[error("{message}")]
    BadRequest { message: String },

    /// Credentials were rejected.
    #[error("{message}")]
    Unauthorized { message: String },

    /// Unclassified failure, the network-equivalent catch-all.
    #[error("{message}")]
    Internal { message: String },
}

impl ApiError {
    /// A `NotFound` error with the conventional "<Entity> not found" message.
    pub fn not_found(entity: &str) -> Self {
        ApiError::NotFound {
            message: format!("{} not found", entity),
        }
    }

    /// A `BadRequest` error with the given message.
    pub fn bad_request(message: &str) -> Self {
        ApiError::BadRequest {
            message: message.to_string(),
        }
    }

    /// A `Validation` error from field-keyed messages.
    pub fn validation(field_errors: FieldErrors) -> Self {
        ApiError::Validation {
            message: "Validation failed".to_string(),
            field_errors,
        }
    }

    /// The human-readable message carried by any variant.
    pub fn message(&self) -> &str {
        match self {
            ApiError::NotFound { message }
            | ApiError::Validation { message, .. }
            | ApiError::BadRequest { message }
            | ApiError::Unauthorized { message }
            | ApiError::Internal { message } => message,
        }
    }

    /// Field-keyed messages, present only on validation failures.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ApiError::Validation { field_errors, .. } => Some(field_errors),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}

/// Result alias used across the API surface.
pub type ApiResult<T> = Result<T, ApiError>;
