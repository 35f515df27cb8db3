//! Error definitions
//!
//! This module provides error types for render-stream-assert.

use std::time::Duration;

use thiserror::Error;

/// Main error type for render-stream-assert
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A render assertion did not hold.
    ///
    /// The payload is the complete report, header line included.
    #[error("{0}")]
    AssertionFailed(String),

    /// The expected render count was negative or not a whole number.
    #[error("Invalid expected render count: {0} (must be a non-negative integer)")]
    InvalidExpectedCount(String),

    /// The render taker panicked when invoked instead of returning a future.
    #[error("Render taker panicked when invoked: {0}")]
    TakerPanicked(String),

    /// The render source gave up waiting for the next render.
    #[error("Exceeded timeout of {0:?} waiting for next render")]
    WaitForRenderTimeout(Duration),

    /// The render source itself failed.
    #[error("Render source error: {0}")]
    RenderSource(String),
}

impl Error {
    /// Create an invalid expected count error.
    #[must_use]
    pub fn invalid_expected_count(value: impl ToString) -> Self {
        Self::InvalidExpectedCount(value.to_string())
    }

    /// Create a render source error.
    #[must_use]
    pub fn render_source(message: impl Into<String>) -> Self {
        Self::RenderSource(message.into())
    }

    /// Whether this error is a usage error rather than a failed assertion.
    #[must_use]
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Self::InvalidExpectedCount(_) | Self::TakerPanicked(_))
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assertion_failed_displays_report_verbatim() {
        let err = Error::AssertionFailed("expect(received).toRerender(expected)".to_string());
        assert_eq!(err.to_string(), "expect(received).toRerender(expected)");
    }

    #[test]
    fn test_usage_errors_are_labelled() {
        let err = Error::invalid_expected_count(-1);
        assert!(err.is_usage_error());
        assert!(err.to_string().contains("Invalid expected render count: -1"));

        let err = Error::TakerPanicked("boom".to_string());
        assert!(err.is_usage_error());

        assert!(!Error::WaitForRenderTimeout(Duration::from_millis(5)).is_usage_error());
        assert!(!Error::render_source("gone").is_usage_error());
    }
}
