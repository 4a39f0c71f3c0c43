//! Error types for pipeline execution

use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that can occur while running the pipeline
///
/// No stage failure is recovered locally; everything surfaces here.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// LLM invocation failed
    #[error("LLM error: {0}")]
    Llm(#[from] finsight_llm::LlmError),

    /// A capability call failed
    #[error("Capability error: {0}")]
    Capability(#[from] finsight_tools::CapabilityError),

    /// A stage references a capability that was never registered
    #[error("Unknown capability: {0}")]
    UnknownCapability(String),

    /// The pipeline was built without stages
    #[error("Pipeline has no stages")]
    NoStages,
}
