//! Error types for the analyst crate

use thiserror::Error;

/// Result type alias for analyst operations
pub type Result<T> = std::result::Result<T, AnalystError>;

/// Errors surfaced by the analysis entry points
#[derive(Error, Debug)]
pub enum AnalystError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pipeline execution failed
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] finsight_pipeline::PipelineError),
}
