//! Structured error types for analysis requests.
//!
//! These are designed to be displayable in both CLI and TUI contexts.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The request never produced an HTTP response (refused, reset, DNS...).
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("HTTP {status}: {reason}")]
    HttpStatus { status: u16, reason: String },

    /// Success status, but the body is not a usable JSON object.
    #[error("invalid response body: {0}")]
    InvalidBody(String),

    /// Success status with an `error` field in the body.
    #[error("backend error: {0}")]
    Backend(String),
}

impl AnalysisError {
    /// Short tag for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::Transport(_) => "transport",
            AnalysisError::HttpStatus { .. } => "http",
            AnalysisError::InvalidBody(_) => "body",
            AnalysisError::Backend(_) => "backend",
        }
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => AnalysisError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            },
            None if e.is_decode() => AnalysisError::InvalidBody(e.to_string()),
            None => AnalysisError::Transport(e.to_string()),
        }
    }
}
