//! Type-safe error codes for API responses.
//!
//! Each error code has a string form for clients, an integer form for logs
//! and a default human-readable message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::StoreRead;
//! assert_eq!(code.as_str(), "STORE_READ");
//! assert_eq!(code.code(), 3001);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000s)
    /// Requested resource was not found
    NotFound,

    /// HTTP method not supported on this route
    MethodNotAllowed,

    /// JSON extraction from request body failed
    JsonExtraction,

    // Server errors (1000s)
    /// An unexpected internal server error occurred
    InternalError,

    // Store errors (3000s)
    /// The backing document could not be read or decoded
    StoreRead,

    /// The backing document could not be written
    StoreWrite,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier for programmatic handling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::InternalError => "INTERNAL_ERROR",
            Self::StoreRead => "STORE_READ",
            Self::StoreWrite => "STORE_WRITE",
        }
    }

    /// Integer code used in structured logs.
    ///
    /// Ranges: 1000s client/server, 3000s store.
    pub fn code(&self) -> i32 {
        match self {
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::MethodNotAllowed => 1006,

            Self::StoreRead => 3001,
            Self::StoreWrite => 3002,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::NotFound => "Resource not found",
            Self::MethodNotAllowed => "The HTTP method is not allowed for this resource",
            Self::JsonExtraction => "Failed to parse request body",
            Self::InternalError => "An internal server error occurred",
            Self::StoreRead => "Failed to read catalog data",
            Self::StoreWrite => "Failed to write catalog data",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_string_representation() {
        assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
        assert_eq!(ErrorCode::StoreWrite.as_str(), "STORE_WRITE");
    }

    #[test]
    fn test_error_code_integer_codes() {
        assert_eq!(ErrorCode::NotFound.code(), 1004);
        assert_eq!(ErrorCode::StoreRead.code(), 3001);
        assert_eq!(ErrorCode::StoreWrite.code(), 3002);
    }

    #[test]
    fn test_error_code_serialization_matches_as_str() {
        for code in [
            ErrorCode::NotFound,
            ErrorCode::JsonExtraction,
            ErrorCode::StoreRead,
            ErrorCode::MethodNotAllowed,
        ] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }
}
