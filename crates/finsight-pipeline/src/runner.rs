//! Stage runner: the bounded LLM ↔ capability loop
//!
//! One entry point, [`StageRunner::invoke`]: build the completion request
//! from the stage description, send it through the injected provider,
//! dispatch any capability calls through the table, feed results back, and
//! stop on natural completion or when the iteration budget runs out.

use crate::error::{PipelineError, Result};
use crate::stage::{StageRequest, TaskResult};
use finsight_llm::{
    CapabilityDefinition, CompletionRequest, ContentBlock, LlmProvider, Message, ResponseFormat,
    StopReason,
};
use finsight_tools::CapabilityTable;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Model settings shared by every stage of a pipeline
#[derive(Debug, Clone)]
pub struct LlmProfile {
    /// Model identifier (provider-specific)
    pub model: String,

    /// Sampling temperature
    pub temperature: f32,

    /// Max tokens per completion
    pub max_tokens: usize,

    /// Response format hint, for providers that support constrained output
    pub response_format: Option<ResponseFormat>,
}

impl Default for LlmProfile {
    fn default() -> Self {
        Self {
            model: "gemma2-9b-it".to_string(),
            temperature: 0.1,
            max_tokens: 4096,
            response_format: None,
        }
    }
}

/// Executes stages against an injected LLM provider and capability table
#[derive(Clone)]
pub struct StageRunner {
    provider: Arc<dyn LlmProvider>,
    capabilities: Arc<CapabilityTable>,
    profile: LlmProfile,
}

impl StageRunner {
    /// Create a new runner
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        capabilities: Arc<CapabilityTable>,
        profile: LlmProfile,
    ) -> Self {
        Self {
            provider,
            capabilities,
            profile,
        }
    }

    /// Get the active model profile
    pub fn profile(&self) -> &LlmProfile {
        &self.profile
    }

    /// Execute one stage to completion
    ///
    /// The loop is bounded by the stage's `max_iterations`. When the budget
    /// runs out after a capability call, the stage yields the last capability
    /// output (a one-iteration collector stage exists to run its capability
    /// once and hand the text on).
    pub async fn invoke(&self, request: StageRequest) -> Result<TaskResult> {
        let definitions = self.stage_definitions(&request)?;
        let system = request.system_prompt();

        let mut conversation = vec![Message::user(request.user_message())];
        let mut last_capability_output: Option<String> = None;
        let mut last_text: Option<String> = None;

        for iteration in 1..=request.max_iterations.max(1) {
            info!(
                "Stage '{}' iteration {}/{}",
                request.role, iteration, request.max_iterations
            );

            let mut builder = CompletionRequest::builder(&self.profile.model)
                .messages(conversation.clone())
                .system(system.clone())
                .max_tokens(self.profile.max_tokens)
                .temperature(self.profile.temperature);

            if let Some(format) = self.profile.response_format {
                builder = builder.response_format(format);
            }

            // Only advertise capabilities if the stage declares one
            if !definitions.is_empty() {
                builder = builder.capabilities(definitions.clone());
            }

            let response = self.provider.complete(builder.build()).await?;

            debug!(
                "LLM response - stop_reason: {:?}, tokens: {}/{}",
                response.stop_reason, response.usage.input_tokens, response.usage.output_tokens
            );

            conversation.push(response.message.clone());

            if let Some(text) = response.message.text() {
                if !text.is_empty() {
                    last_text = Some(text.to_string());
                }
            }

            match response.stop_reason {
                StopReason::EndTurn => {
                    debug!("Stage '{}' completed naturally", request.role);
                    let text = response.message.text().unwrap_or_default().to_string();
                    return Ok(TaskResult::new(text, &request.instructions));
                }

                StopReason::MaxTokens => {
                    warn!("Stage '{}' hit the token limit", request.role);
                    let text = response.message.text().unwrap_or_default().to_string();
                    return Ok(TaskResult::new(text, &request.instructions));
                }

                StopReason::ToolUse => {
                    debug!("Stage '{}' requested a capability call", request.role);
                    let results = self.execute_capability_calls(&response.message).await?;
                    for (output, message) in results {
                        last_capability_output = Some(output);
                        conversation.push(message);
                    }
                }
            }
        }

        // Iteration budget exhausted: the capability output is the stage output
        if let Some(output) = last_capability_output {
            debug!(
                "Stage '{}' budget exhausted, yielding capability output",
                request.role
            );
            return Ok(TaskResult::new(output, &request.instructions));
        }

        warn!(
            "Stage '{}' budget exhausted without capability output",
            request.role
        );
        Ok(TaskResult::new(
            last_text.unwrap_or_default(),
            &request.instructions,
        ))
    }

    /// Resolve the stage's capability reference against the table
    fn stage_definitions(&self, request: &StageRequest) -> Result<Vec<CapabilityDefinition>> {
        let Some(name) = &request.capability else {
            return Ok(Vec::new());
        };

        let capability = self
            .capabilities
            .get(name)
            .ok_or_else(|| PipelineError::UnknownCapability(name.clone()))?;

        Ok(vec![CapabilityDefinition::new(
            capability.name(),
            capability.description(),
            capability.input_schema().clone(),
        )])
    }

    /// Execute capability calls from an assistant message
    ///
    /// Returns (raw output, tool-result message) pairs. A failed capability
    /// is a stage failure: it propagates instead of being replayed to the
    /// LLM.
    async fn execute_capability_calls(
        &self,
        message: &Message,
    ) -> Result<Vec<(String, Message)>> {
        let mut results = Vec::new();

        for block in message.tool_uses() {
            if let ContentBlock::ToolUse { id, name, input } = block {
                info!("Executing capability: {}", name);

                let capability = self
                    .capabilities
                    .get(name)
                    .ok_or_else(|| PipelineError::UnknownCapability(name.clone()))?;

                let value = capability.execute(input.clone()).await?;
                let output = match value {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                };

                results.push((
                    output.clone(),
                    Message::tool_result(id.clone(), output),
                ));
            }
        }

        Ok(results)
    }
}
