//! Error types for the browser glue
//!
//! Failures here come from the DOM bindings. Data and layout errors live in
//! `wordcloud_core::Error`.

use thiserror::Error;

/// Errors raised while talking to the browser
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    #[error("No window object available")]
    WindowUnavailable,

    #[error("No document object available")]
    DocumentUnavailable,

    #[error("Window {dimension} is not a number")]
    InvalidWindowSize { dimension: &'static str },

    #[error("Canvas error: {0}")]
    Canvas(String),

    #[error("Failed to {action} {event} listener: {reason}")]
    Listener {
        action: &'static str,
        event: &'static str,
        reason: String,
    },
}

impl UiError {
    pub fn canvas(reason: impl Into<String>) -> Self {
        Self::Canvas(reason.into())
    }

    pub fn listener(action: &'static str, event: &'static str, reason: impl Into<String>) -> Self {
        Self::Listener {
            action,
            event,
            reason: reason.into(),
        }
    }
}

/// Result type alias for browser operations
pub type Result<T> = std::result::Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(UiError::WindowUnavailable.to_string(), "No window object available");
        assert_eq!(
            UiError::InvalidWindowSize { dimension: "height" }.to_string(),
            "Window height is not a number"
        );
        assert_eq!(
            UiError::listener("attach", "resize", "TypeError").to_string(),
            "Failed to attach resize listener: TypeError"
        );
        assert_eq!(UiError::canvas("no 2d context").to_string(), "Canvas error: no 2d context");
    }
}
