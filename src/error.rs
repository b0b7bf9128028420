// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types.
//!
//! `PipelineError` covers the advice pipeline stages and never leaves the
//! orchestrator. `AppError` is what HTTP handlers return.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::time::Duration;

/// Failure of one advice-generation stage.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Upstream transport error: {0}")]
    Transport(String),

    #[error("Upstream call timed out after {0:?}")]
    Timeout(Duration),

    #[error("Envelope error: {0}")]
    Envelope(#[from] EnvelopeError),

    #[error("Failed to parse generated JSON: {0}")]
    Parse(#[source] serde_json::Error),
}

impl PipelineError {
    /// Short name of the stage that failed, for log fields.
    pub fn stage(&self) -> &'static str {
        match self {
            PipelineError::Transport(_) => "transport",
            PipelineError::Timeout(_) => "timeout",
            PipelineError::Envelope(_) => "envelope",
            PipelineError::Parse(_) => "parse",
        }
    }
}

/// The upstream response envelope could not be unwrapped.
#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    #[error("invalid outer JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("missing field: {0}")]
    MissingField(&'static str),
}

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::BadRequest(errors.to_string())
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::BadRequest(msg) => {
                tracing::debug!(error = %msg, "Rejected request");
                (StatusCode::BAD_REQUEST, "bad_request", Some(msg.clone()))
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_names() {
        assert_eq!(PipelineError::Transport("boom".into()).stage(), "transport");
        assert_eq!(
            PipelineError::Timeout(Duration::from_secs(1)).stage(),
            "timeout"
        );
        assert_eq!(
            PipelineError::from(EnvelopeError::MissingField("candidates")).stage(),
            "envelope"
        );

        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(PipelineError::Parse(parse_err).stage(), "parse");
    }

    #[test]
    fn test_bad_request_status() {
        let response = AppError::BadRequest("too long".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
