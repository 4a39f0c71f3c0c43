//! Error types for market data operations

use thiserror::Error;

/// Result type alias for market data operations
pub type Result<T> = std::result::Result<T, MarketError>;

/// Market data specific errors
#[derive(Debug, Error)]
pub enum MarketError {
    /// Upstream provider reported an error
    #[error("Provider error: {0}")]
    Provider(String),

    /// Invalid ticker symbol provided
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    /// Network or HTTP error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MarketError::InvalidSymbol("must not be empty".to_string());
        assert_eq!(err.to_string(), "Invalid symbol: must not be empty");

        let err = MarketError::Provider("quote not found".to_string());
        assert_eq!(err.to_string(), "Provider error: quote not found");
    }
}
