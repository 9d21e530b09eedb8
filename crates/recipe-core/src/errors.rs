// ABOUTME: Unified error type, error codes, and HTTP error envelope for Recipe Box
// ABOUTME: Maps validation, not-found, conflict, and store failures onto HTTP statuses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every request handler funnels its failures into [`AppError`]. The error code
//! decides the HTTP status, the message is what the caller sees in the
//! `{ "error": message }` envelope, and the optional source carries the
//! underlying store error for logs only.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input failed a shape or type check
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required field was absent or empty
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,

    // Resource Management (4000-4999)
    /// The addressed record does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,
    /// A record with the same identity already exists, or the record is still referenced
    #[serde(rename = "RESOURCE_ALREADY_EXISTS")]
    ResourceAlreadyExists = 4001,
    /// The backing store cannot be reached
    #[serde(rename = "RESOURCE_UNAVAILABLE")]
    ResourceUnavailable = 4003,
    /// The path exists but does not accept this HTTP method
    #[serde(rename = "METHOD_NOT_ALLOWED")]
    MethodNotAllowed = 4005,

    // Configuration (6000-6999)
    /// Invalid or missing configuration
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,

    // Internal Errors (9000-9999)
    /// Unexpected failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Store query failed
    #[serde(rename = "DATABASE_ERROR")]
    DatabaseError = 9001,
    /// Stored data could not be (de)serialized
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::InvalidInput | Self::MissingRequiredField => 400,
            Self::ResourceNotFound => 404,
            Self::ResourceAlreadyExists => 409,
            Self::MethodNotAllowed => 405,
            Self::ResourceUnavailable => 503,
            Self::InternalError
            | Self::DatabaseError
            | Self::SerializationError
            | Self::ConfigError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ResourceAlreadyExists => "The request conflicts with an existing resource",
            Self::ResourceUnavailable => "The resource is temporarily unavailable",
            Self::MethodNotAllowed => "The HTTP method is not supported for this path",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal server error occurred",
            Self::DatabaseError => "Database operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether this code belongs to the caller-error (4xx) class
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.http_status() < 500
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message returned to the caller
    pub message: String,
    /// Source error for error chaining (logged, never returned)
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Missing required field(s)
    pub fn missing_fields(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingRequiredField, message)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Conflict with existing state (duplicate name, record still referenced)
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceAlreadyExists, message)
    }

    /// Path exists but the HTTP method is not routed
    pub fn method_not_allowed() -> Self {
        Self::new(ErrorCode::MethodNotAllowed, "Method not allowed")
    }

    /// Store unavailable
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceUnavailable, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Database error
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, "Failed to process stored data").with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response format: `{ "error": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Message safe to show to the caller
    pub error: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            error: error.message.clone(),
        }
    }
}

#[cfg(feature = "database-errors")]
mod database {
    use super::{AppError, ErrorCode};

    impl AppError {
        /// Wrap a store error, keeping `message` as the caller-facing text
        ///
        /// Connection loss and pool exhaustion are internal failures here;
        /// only the readiness probe reports the store as unavailable.
        #[must_use]
        pub fn from_sqlx(message: &str, error: sqlx::Error) -> Self {
            let code = match &error {
                sqlx::Error::RowNotFound => ErrorCode::ResourceNotFound,
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    ErrorCode::ResourceAlreadyExists
                }
                _ => ErrorCode::DatabaseError,
            };
            Self::new(code, message).with_source(error)
        }
    }

    impl From<sqlx::Error> for AppError {
        fn from(error: sqlx::Error) -> Self {
            Self::from_sqlx("Internal server error", error)
        }
    }

}

#[cfg(feature = "http-response")]
mod http_response {
    use super::{AppError, ErrorResponse};
    use axum::{
        response::{IntoResponse, Response},
        Json,
    };
    use http::StatusCode;
    use tracing::{error, warn};

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = StatusCode::from_u16(self.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

            if self.code.is_client_error() {
                warn!(code = ?self.code, status = status.as_u16(), "{}", self.message);
            } else {
                let source = self
                    .source
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_default();
                error!(code = ?self.code, status = status.as_u16(), source = %source, "{}", self.message);
            }

            (status, Json(ErrorResponse::from(&self))).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
        assert_eq!(ErrorCode::MissingRequiredField.http_status(), 400);
        assert_eq!(ErrorCode::ResourceNotFound.http_status(), 404);
        assert_eq!(ErrorCode::ResourceAlreadyExists.http_status(), 409);
        assert_eq!(ErrorCode::MethodNotAllowed.http_status(), 405);
        assert!(ErrorCode::MethodNotAllowed.is_client_error());
        assert_eq!(ErrorCode::ResourceUnavailable.http_status(), 503);
        assert_eq!(ErrorCode::DatabaseError.http_status(), 500);
    }

    #[test]
    fn test_not_found_message() {
        let error = AppError::not_found("Recipe");
        assert_eq!(error.code, ErrorCode::ResourceNotFound);
        assert_eq!(error.message, "Recipe not found");
    }

    #[test]
    fn test_error_response_hides_source() {
        let io = std::io::Error::other("disk on fire");
        let error = AppError::database("Failed to fetch recipes").with_source(io);
        let json = serde_json::to_string(&ErrorResponse::from(&error)).unwrap();
        assert_eq!(json, r#"{"error":"Failed to fetch recipes"}"#);
    }

    #[test]
    fn test_serde_error_maps_to_serialization_code() {
        let parse = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let error = AppError::from(parse);
        assert_eq!(error.code, ErrorCode::SerializationError);
        assert!(error.source.is_some());
    }
}
