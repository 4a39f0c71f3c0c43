//! LLM provider abstraction for finsight
//!
//! This crate provides provider-agnostic types for talking to a chat-completion
//! LLM service. It includes:
//!
//! - Message types for LLM communication (text, tool use, tool results)
//! - Completion request/response types
//! - Capability definitions for function calling
//! - The [`LlmProvider`] trait the pipeline is injected with
//! - A Groq provider speaking the OpenAI-compatible wire format

pub mod capability;
pub mod completion;
pub mod error;
pub mod messages;
pub mod provider;
pub mod providers;

// Re-export main types
pub use capability::CapabilityDefinition;
pub use completion::{
    CompletionRequest, CompletionResponse, ResponseFormat, StopReason, TokenUsage,
};
pub use error::{LlmError, Result};
pub use messages::{ContentBlock, Message, MessageContent, Role};
pub use provider::LlmProvider;
pub use providers::{GroqConfig, GroqProvider};
