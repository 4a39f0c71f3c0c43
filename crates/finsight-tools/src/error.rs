//! Error types for capability execution

use thiserror::Error;

/// Result type alias for capability operations
pub type Result<T> = std::result::Result<T, CapabilityError>;

/// Error type for capability execution
#[derive(Error, Debug)]
pub enum CapabilityError {
    /// Parameters did not match the declared input contract
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// The capability function itself failed
    #[error("Capability execution failed: {0}")]
    ExecutionFailed(String),

    /// No capability registered under the requested name
    #[error("Unknown capability: {0}")]
    Unknown(String),
}
