//! Client-side failure taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Every `net::api` wrapper returns `Result<_, ApiError>`. Pages catch the
//! error at the call site, log it, and surface `user_message()` as a toast;
//! the payment-link page maps `NotFound` to its dedicated full-page state.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::net::types::ErrorBody;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response other than 404.
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },
    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not found")]
    NotFound,
    /// Browser-only call invoked during server rendering.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Classify a failed response, extracting the backend's `{ "error" }`
    /// message when the body carries one.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 404 {
            return Self::NotFound;
        }
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .ok()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback_message(status).to_owned());
        Self::Status { status, message }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }

    /// The backend refused a duplicate (taken slug, existing email).
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Status { status: 409, .. })
    }

    /// Text suitable for a toast.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Network error. Check your connection and try again.".to_owned(),
            Self::Status { message, .. } => message.clone(),
            Self::Decode(_) => "Unexpected response from server.".to_owned(),
            Self::NotFound => "The requested resource was not found.".to_owned(),
            Self::Unavailable => "This action is only available in the browser.".to_owned(),
        }
    }
}

fn fallback_message(status: u16) -> &'static str {
    match status {
        400 | 422 => "The request was invalid.",
        401 => "Your session has expired. Please sign in again.",
        403 => "You do not have access to this resource.",
        409 => "That record already exists.",
        429 => "Too many requests. Please wait a moment.",
        500..=599 => "Something went wrong on our side.",
        _ => "Request failed.",
    }
}
