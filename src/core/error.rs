//! Error types and error handling for the Boruto heroes API.
//!
//! This module defines the error types used throughout the
//! application. HTTP status mapping lives in the http adapter.

use thiserror::Error;

/// Result type alias for Boruto operations
pub type Result<T> = std::result::Result<T, BorutoError>;

/// Main error type for the Boruto service
#[derive(Error, Debug)]
pub enum BorutoError {
    #[error("Invalid page number: {0}")]
    InvalidPageNumber(String),

    #[error("Page {page} out of range (1..={page_count})")]
    PageOutOfRange { page: i32, page_count: usize },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl BorutoError {
    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, BorutoError::PageOutOfRange { .. })
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(self, BorutoError::InvalidPageNumber(_))
    }
}
