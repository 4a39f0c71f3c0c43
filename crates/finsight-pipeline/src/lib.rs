//! Typed stage pipeline for finsight
//!
//! The narrative report is produced by two bounded LLM stages run strictly in
//! sequence. Each stage is described by a [`StageRequest`] (role, persona,
//! instructions, optional capability reference, iteration bound, optional
//! context from the prior stage) and executed through
//! [`StageRunner::invoke`], which owns the LLM ↔ capability loop. The LLM
//! client is an injected [`finsight_llm::LlmProvider`]; no agent trait
//! hierarchy exists.

pub mod error;
pub mod pipeline;
pub mod runner;
pub mod stage;

pub use error::{PipelineError, Result};
pub use pipeline::{Pipeline, PipelineBuilder, ProgressFn};
pub use runner::{LlmProfile, StageRunner};
pub use stage::{StageRequest, StageRequestBuilder, TaskResult};
