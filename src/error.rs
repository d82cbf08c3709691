//! Application Errors
//!
//! Failures surfaced by search and edit actions. None of them is fatal; each
//! one is scoped to the action that triggered it.

use serde_json::Value;

use crate::search::ValidationReport;

/// Common result type for frontend operations
pub type AppResult<T> = Result<T, AppError>;

/// Frontend error taxonomy
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Client-side rule violation; never reaches the network
    Validation(ValidationReport),
    /// Edit rejected before sending (missing id or required field)
    InvalidMember(String),
    /// Network or HTTP-layer failure without a structured body
    Transport(String),
    /// HTTP error carrying a structured message from the backend
    Backend { status: u16, message: String },
}

impl AppError {
    /// Build the error for a non-success HTTP response.
    ///
    /// Prefers a structured `{error: {message}}` or `{message}` body and falls
    /// back to a transport-level description of the status line.
    pub fn from_response(status: u16, reason: &str, body: &str) -> Self {
        match backend_message(body) {
            Some(message) => AppError::Backend { status, message },
            None => AppError::Transport(format!("Http failure response: {} {}", status, reason).trim_end().to_string()),
        }
    }

    /// Single user-facing string for this error.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::Backend { message, .. } if !message.trim().is_empty() => message.clone(),
            AppError::Transport(message) if !message.trim().is_empty() => message.clone(),
            AppError::InvalidMember(message) if !message.trim().is_empty() => message.clone(),
            AppError::Validation(report) => report
                .messages()
                .into_iter()
                .next()
                .unwrap_or_else(|| fallback.to_string()),
            _ => fallback.to_string(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation(report) => write!(f, "Validation failed: {}", report.messages().join("; ")),
            AppError::InvalidMember(msg) => write!(f, "Invalid member: {}", msg),
            AppError::Transport(msg) => write!(f, "Transport error: {}", msg),
            AppError::Backend { status, message } => write!(f, "Backend error ({}): {}", status, message),
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Transport(format!("Invalid response body: {}", err))
    }
}

/// Extract the structured message from an error body, if any.
fn backend_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let message = value
        .pointer("/error/message")
        .or_else(|| value.get("message"))?
        .as_str()?
        .trim();
    (!message.is_empty()).then(|| message.to_string())
}
