//! Adapter error types.

use thiserror::Error;

/// Errors surfaced by the Dailymotion adapter.
///
/// The adapter raises no errors of its own except `InvalidCursor`; API
/// messages are forwarded verbatim, and the `Network`/`Parse`/`Extraction`
/// variants exist for the transport and scraper seams to report through.
#[derive(Debug, Error)]
pub enum DailymotionError {
    #[error("API error: {message}")]
    Api { message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Extraction failed: {0}")]
    Extraction(String),

    #[error("Invalid cursor: {0}")]
    InvalidCursor(String),
}

pub type Result<T> = std::result::Result<T, DailymotionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_api() {
        let err = DailymotionError::Api {
            message: "timeout".to_string(),
        };
        assert_eq!(err.to_string(), "API error: timeout");
    }

    #[test]
    fn test_error_display_network() {
        let err = DailymotionError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn test_error_display_extraction() {
        let err = DailymotionError::Extraction("no sources in embed page".to_string());
        assert_eq!(err.to_string(), "Extraction failed: no sources in embed page");
    }

    #[test]
    fn test_error_display_invalid_cursor() {
        let err = DailymotionError::InvalidCursor("missing channel id".to_string());
        assert_eq!(err.to_string(), "Invalid cursor: missing channel id");
    }
}
