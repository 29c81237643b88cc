//! Error types for InspireFlow

use thiserror::Error;

/// Main error type for quote fetching operations
#[derive(Error, Debug)]
pub enum QuoteError {
    /// Upstream API answered with a non-2xx status
    #[error("Upstream API returned HTTP {0}")]
    Upstream(u16),

    /// Response body was not the expected single-element quote array
    #[error("Failed to parse quote response: {0}")]
    Parse(String),

    /// Request never produced a response (DNS, connect, timeout)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Result type alias using QuoteError
pub type QuoteResult<T> = Result<T, QuoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QuoteError::Upstream(500);
        assert_eq!(format!("{}", err), "Upstream API returned HTTP 500");

        let err = QuoteError::Parse("empty array".to_string());
        assert_eq!(
            format!("{}", err),
            "Failed to parse quote response: empty array"
        );
    }
}
