//! HTTP mapping for core errors
//!
//! Every failure is rendered as an `ApiResponse` envelope with
//! `success: false` and a fixed message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::core::error::BorutoError;
use crate::core::types::ApiResponse;

/// Message for a `page` parameter that is not an integer
pub const INVALID_PAGE_MESSAGE: &str = "Only numbers allowed.";

/// Message for a page outside the catalog
pub const NOT_FOUND_MESSAGE: &str = "Heroes not found.";

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

impl BorutoError {
    /// Convert error to appropriate HTTP status code
    pub fn status_code(&self) -> StatusCode {
        if self.is_bad_request() {
            StatusCode::BAD_REQUEST
        } else if self.is_not_found() {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    /// Client-facing envelope message
    pub fn public_message(&self) -> &'static str {
        if self.is_bad_request() {
            INVALID_PAGE_MESSAGE
        } else if self.is_not_found() {
            NOT_FOUND_MESSAGE
        } else {
            INTERNAL_ERROR_MESSAGE
        }
    }
}

/// Implement IntoResponse for automatic error conversion in Axum
impl IntoResponse for BorutoError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Rejected request");
        }

        (status, Json(ApiResponse::failure(self.public_message()))).into_response()
    }
}
