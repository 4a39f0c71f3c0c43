//! Groq provider implementation
//!
//! Groq exposes an OpenAI-compatible chat-completions API, so the wire types
//! here follow the OpenAI shape: system prompts go into the messages array,
//! capability calls use the `tools`/`tool_calls` fields, and tool results are
//! separate messages with role `tool`.
//! See: https://console.groq.com/docs/api-reference#chat

use crate::{
    CapabilityDefinition, CompletionRequest, CompletionResponse, ContentBlock, LlmProvider,
    Message, MessageContent, ResponseFormat, Result, Role, StopReason, TokenUsage,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Configuration for the Groq provider
#[derive(Debug, Clone)]
pub struct GroqConfig {
    /// API key for authentication
    pub api_key: String,

    /// Base URL for the API (default: "https://api.groq.com/openai/v1")
    ///
    /// Can be pointed at any OpenAI-compatible endpoint.
    pub api_base: String,

    /// Request timeout in seconds (default: 120)
    pub timeout_secs: u64,
}

impl GroqConfig {
    /// Create a new config with the given API key and default settings
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_GROQ_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Create config from environment variables
    ///
    /// Reads the API key from `GROQ_API_KEY`. Optionally reads the base URL
    /// from `GROQ_API_BASE` if set.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GROQ_API_KEY").map_err(|_| {
            crate::LlmError::ConfigurationError(
                "GROQ_API_KEY environment variable not set".to_string(),
            )
        })?;

        let api_base =
            std::env::var("GROQ_API_BASE").unwrap_or_else(|_| DEFAULT_GROQ_API_BASE.to_string());

        Ok(Self {
            api_key,
            api_base,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Set custom API base URL
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Set request timeout in seconds
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Groq provider
///
/// Supports Groq-hosted open models (gemma2-9b-it, mixtral-8x7b-32768,
/// llama-3.1-70b-versatile, ...) and any other OpenAI-compatible endpoint
/// through a custom base URL.
pub struct GroqProvider {
    client: Client,
    config: GroqConfig,
}

impl GroqProvider {
    /// Create a new Groq provider with custom configuration
    pub fn with_config(config: GroqConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Create a new Groq provider with API key and default settings
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(GroqConfig::new(api_key))
    }

    /// Create a provider from the `GROQ_API_KEY` environment variable
    pub fn from_env() -> Result<Self> {
        let config = GroqConfig::from_env()?;
        Self::with_config(config)
    }

    /// Get the current configuration
    pub fn config(&self) -> &GroqConfig {
        &self.config
    }
}

#[async_trait]
impl LlmProvider for GroqProvider {
    #[instrument(skip(self, request), fields(model = %request.model, api_base = %self.config.api_base))]
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        debug!("Sending request to Groq API at {}", self.config.api_base);

        // Convert messages (system prompt goes into the messages array)
        let wire_messages = build_wire_messages(request.system.clone(), request.messages);

        // Convert capabilities if present
        let wire_tools = request.capabilities.as_ref().map(|caps| convert_tools(caps));

        let wire_request = WireRequest {
            model: request.model.clone(),
            messages: wire_messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            tools: wire_tools,
            response_format: request.response_format.map(WireResponseFormat::from),
        };

        // Send request
        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.api_base))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&wire_request)
            .send()
            .await?;

        // Handle errors
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;

            return Err(match status.as_u16() {
                401 => crate::LlmError::AuthenticationFailed,
                429 => crate::LlmError::RateLimitExceeded(error_text),
                400 => crate::LlmError::InvalidRequest(error_text),
                404 => crate::LlmError::ModelNotFound(request.model),
                _ => crate::LlmError::RequestFailed(format!("HTTP {status}: {error_text}")),
            });
        }

        // Parse response
        let wire_response: WireResponse = response.json().await.map_err(|e| {
            crate::LlmError::UnexpectedResponse(format!("Failed to parse response: {e}"))
        })?;

        // Extract first choice (the API can return multiple but we use first)
        let choice = wire_response.choices.into_iter().next().ok_or_else(|| {
            crate::LlmError::UnexpectedResponse("No choices in response".to_string())
        })?;

        debug!(
            "Received response - finish_reason: {}, tokens: {}/{}",
            choice.finish_reason,
            wire_response.usage.prompt_tokens,
            wire_response.usage.completion_tokens
        );

        let message = parse_wire_message(choice.message)?;
        let stop_reason = map_stop_reason(&choice.finish_reason);

        Ok(CompletionResponse {
            message,
            stop_reason,
            usage: TokenUsage {
                input_tokens: wire_response.usage.prompt_tokens,
                output_tokens: wire_response.usage.completion_tokens,
            },
        })
    }

    fn name(&self) -> &'static str {
        "groq"
    }
}

// ============================================================================
// Wire request types (OpenAI-compatible)
// ============================================================================

#[derive(Debug, Serialize)]
struct WireRequest {
    model: String,
    messages: Vec<WireMessage>,
    max_tokens: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<WireTool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<WireResponseFormat>,
}

#[derive(Debug, Serialize)]
struct WireMessage {
    role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_calls: Option<Vec<WireToolCall>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_call_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct WireResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
}

impl From<ResponseFormat> for WireResponseFormat {
    fn from(format: ResponseFormat) -> Self {
        let format_type = match format {
            ResponseFormat::Text => "text",
            ResponseFormat::JsonObject => "json_object",
        };
        Self {
            format_type: format_type.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct WireTool {
    #[serde(rename = "type")]
    tool_type: String,
    function: WireFunction,
}

#[derive(Debug, Serialize)]
struct WireFunction {
    name: String,
    description: String,
    parameters: serde_json::Value,
}

#[derive(Debug, Serialize)]
struct WireToolCall {
    id: String,
    #[serde(rename = "type")]
    tool_type: String,
    function: WireFunctionCall,
}

#[derive(Debug, Serialize)]
struct WireFunctionCall {
    name: String,
    arguments: String,
}

// ============================================================================
// Wire response types
// ============================================================================

#[derive(Debug, Deserialize)]
struct WireResponse {
    choices: Vec<WireChoice>,
    usage: WireUsage,
}

#[derive(Debug, Deserialize)]
struct WireChoice {
    message: WireResponseMessage,
    finish_reason: String,
}

#[derive(Debug, Deserialize)]
struct WireResponseMessage {
    #[allow(dead_code)]
    role: String,
    content: Option<String>,
    tool_calls: Option<Vec<WireResponseToolCall>>,
}

#[derive(Debug, Deserialize)]
struct WireResponseToolCall {
    id: String,
    #[allow(dead_code)]
    #[serde(rename = "type")]
    tool_type: String,
    function: WireResponseFunctionCall,
}

#[derive(Debug, Deserialize)]
struct WireResponseFunctionCall {
    name: String,
    arguments: String,
}

#[derive(Debug, Deserialize)]
struct WireUsage {
    prompt_tokens: usize,
    completion_tokens: usize,
}

// ============================================================================
// Conversion functions
// ============================================================================

/// Build wire messages from our generic format
///
/// The system prompt becomes the first message in the array.
fn build_wire_messages(system: Option<String>, messages: Vec<Message>) -> Vec<WireMessage> {
    let mut result = Vec::new();

    if let Some(sys) = system {
        result.push(WireMessage {
            role: "system".to_string(),
            content: Some(sys),
            tool_calls: None,
            tool_call_id: None,
        });
    }

    for msg in messages {
        result.extend(convert_message(msg));
    }

    result
}

/// Convert a single message to wire format
///
/// This may return multiple wire messages (tool results become separate
/// messages with role `tool`).
fn convert_message(msg: Message) -> Vec<WireMessage> {
    let role = match msg.role {
        Role::User => "user",
        Role::Assistant => "assistant",
        Role::System => "system",
    };

    match msg.content {
        Some(MessageContent::Text(text)) => {
            vec![WireMessage {
                role: role.to_string(),
                content: Some(text),
                tool_calls: None,
                tool_call_id: None,
            }]
        }
        Some(MessageContent::Blocks(blocks)) => convert_blocks(role, blocks),
        None => {
            vec![WireMessage {
                role: role.to_string(),
                content: Some(String::new()),
                tool_calls: None,
                tool_call_id: None,
            }]
        }
    }
}

/// Convert content blocks to wire messages
fn convert_blocks(role: &str, blocks: Vec<ContentBlock>) -> Vec<WireMessage> {
    let mut messages = Vec::new();
    let mut text_content = String::new();
    let mut tool_calls = Vec::new();

    for block in blocks {
        match block {
            ContentBlock::Text { text } => {
                text_content.push_str(&text);
            }
            ContentBlock::ToolUse { id, name, input } => {
                // Capability calls go in the tool_calls array
                let arguments = serde_json::to_string(&input).unwrap_or_default();
                tool_calls.push(WireToolCall {
                    id,
                    tool_type: "function".to_string(),
                    function: WireFunctionCall { name, arguments },
                });
            }
            ContentBlock::ToolResult {
                tool_use_id,
                content,
                ..
            } => {
                // Tool results become separate messages with role="tool"
                messages.push(WireMessage {
                    role: "tool".to_string(),
                    content: Some(content),
                    tool_calls: None,
                    tool_call_id: Some(tool_use_id),
                });
            }
        }
    }

    // Build the main message if we have content or tool calls
    if !text_content.is_empty() || !tool_calls.is_empty() {
        messages.insert(
            0,
            WireMessage {
                role: role.to_string(),
                content: if text_content.is_empty() {
                    None
                } else {
                    Some(text_content)
                },
                tool_calls: if tool_calls.is_empty() {
                    None
                } else {
                    Some(tool_calls)
                },
                tool_call_id: None,
            },
        );
    }

    messages
}

/// Convert capability definitions to the OpenAI tools shape
fn convert_tools(capabilities: &[CapabilityDefinition]) -> Vec<WireTool> {
    capabilities
        .iter()
        .map(|cap| WireTool {
            tool_type: "function".to_string(),
            function: WireFunction {
                name: cap.name.clone(),
                description: cap.description.clone(),
                parameters: cap.input_schema.clone(),
            },
        })
        .collect()
}

/// Parse a wire response message to our format
fn parse_wire_message(msg: WireResponseMessage) -> Result<Message> {
    let mut blocks = Vec::new();

    // Add text content if present
    if let Some(content) = msg.content {
        if !content.is_empty() {
            blocks.push(ContentBlock::Text { text: content });
        }
    }

    // Parse tool calls
    if let Some(tool_calls) = msg.tool_calls {
        for call in tool_calls {
            // Arguments arrive as a JSON string
            let input: serde_json::Value =
                serde_json::from_str(&call.function.arguments).map_err(|e| {
                    crate::LlmError::UnexpectedResponse(format!(
                        "Failed to parse tool arguments: {e}"
                    ))
                })?;

            blocks.push(ContentBlock::ToolUse {
                id: call.id,
                name: call.function.name,
                input,
            });
        }
    }

    // If no blocks, add empty text
    if blocks.is_empty() {
        blocks.push(ContentBlock::Text {
            text: String::new(),
        });
    }

    Ok(Message {
        role: Role::Assistant,
        content: Some(MessageContent::Blocks(blocks)),
    })
}

/// Map the wire finish reason to our format
fn map_stop_reason(reason: &str) -> StopReason {
    match reason {
        "stop" => StopReason::EndTurn,
        "length" => StopReason::MaxTokens,
        "tool_calls" => StopReason::ToolUse,
        _ => {
            debug!("Unknown finish reason: {}", reason);
            StopReason::EndTurn
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_provider_creation() {
        let provider = GroqProvider::new("test-key");
        assert!(provider.is_ok());
        let provider = provider.unwrap();
        assert_eq!(provider.name(), "groq");
        assert_eq!(provider.config().api_key, "test-key");
        assert_eq!(provider.config().api_base, "https://api.groq.com/openai/v1");
    }

    #[test]
    fn test_provider_with_custom_config() {
        let config = GroqConfig::new("test-key")
            .with_api_base("http://localhost:8000/v1")
            .with_timeout(60);

        let provider = GroqProvider::with_config(config).unwrap();
        assert_eq!(provider.config().api_base, "http://localhost:8000/v1");
        assert_eq!(provider.config().timeout_secs, 60);
    }

    #[test]
    fn test_config_from_env() {
        unsafe {
            std::env::set_var("GROQ_API_KEY", "test-key-from-env");
            std::env::set_var("GROQ_API_BASE", "https://custom.groq.com/v1");
        }

        let config = GroqConfig::from_env().unwrap();
        assert_eq!(config.api_key, "test-key-from-env");
        assert_eq!(config.api_base, "https://custom.groq.com/v1");

        unsafe {
            std::env::remove_var("GROQ_API_KEY");
            std::env::remove_var("GROQ_API_BASE");
        }
    }

    #[test]
    fn test_simple_text_message_conversion() {
        let msg = Message::user("Hello");
        let wire_msgs = convert_message(msg);

        assert_eq!(wire_msgs.len(), 1);
        assert_eq!(wire_msgs[0].role, "user");
        assert_eq!(wire_msgs[0].content.as_deref(), Some("Hello"));
    }

    #[test]
    fn test_system_message_in_array() {
        let messages = build_wire_messages(Some("You are a financial analyst".to_string()), vec![]);

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[0].content.as_deref(), Some("You are a financial analyst"));
    }

    #[test]
    fn test_capability_conversion() {
        let cap = CapabilityDefinition {
            name: "fact_sheet".to_string(),
            description: "Collect financial data".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "ticker": {"type": "string"}
                }
            }),
        };

        let wire_tools = convert_tools(&[cap]);

        assert_eq!(wire_tools.len(), 1);
        assert_eq!(wire_tools[0].tool_type, "function");
        assert_eq!(wire_tools[0].function.name, "fact_sheet");
        assert_eq!(wire_tools[0].function.description, "Collect financial data");
    }

    #[test]
    fn test_response_format_conversion() {
        let wire = WireResponseFormat::from(ResponseFormat::JsonObject);
        assert_eq!(wire.format_type, "json_object");

        let wire = WireResponseFormat::from(ResponseFormat::Text);
        assert_eq!(wire.format_type, "text");
    }

    #[test]
    fn test_stop_reason_mapping() {
        assert_eq!(map_stop_reason("stop"), StopReason::EndTurn);
        assert_eq!(map_stop_reason("length"), StopReason::MaxTokens);
        assert_eq!(map_stop_reason("tool_calls"), StopReason::ToolUse);
        assert_eq!(map_stop_reason("unknown"), StopReason::EndTurn);
    }

    #[test]
    fn test_tool_result_conversion() {
        let msg = Message::tool_result("call_123".to_string(), "result data".to_string());
        let wire_msgs = convert_message(msg);

        assert_eq!(wire_msgs.len(), 1);
        assert_eq!(wire_msgs[0].role, "tool");
        assert_eq!(wire_msgs[0].tool_call_id, Some("call_123".to_string()));
        assert_eq!(wire_msgs[0].content.as_deref(), Some("result data"));
    }

    #[test]
    fn test_response_with_tool_calls() {
        let response_msg = WireResponseMessage {
            role: "assistant".to_string(),
            content: Some("Let me pull the fact sheet".to_string()),
            tool_calls: Some(vec![WireResponseToolCall {
                id: "call_123".to_string(),
                tool_type: "function".to_string(),
                function: WireResponseFunctionCall {
                    name: "fact_sheet".to_string(),
                    arguments: r#"{"ticker":"IONQ"}"#.to_string(),
                },
            }]),
        };

        let message = parse_wire_message(response_msg).unwrap();

        assert_eq!(message.role, Role::Assistant);
        match message.content {
            Some(MessageContent::Blocks(blocks)) => {
                assert_eq!(blocks.len(), 2); // text + tool use
                assert!(matches!(blocks[0], ContentBlock::Text { .. }));
                match &blocks[1] {
                    ContentBlock::ToolUse { id, name, input } => {
                        assert_eq!(id, "call_123");
                        assert_eq!(name, "fact_sheet");
                        assert_eq!(input["ticker"], "IONQ");
                    }
                    _ => panic!("Expected tool use"),
                }
            }
            _ => panic!("Expected blocks"),
        }
    }

    #[test]
    fn test_multiple_tool_results() {
        let msg = Message {
            role: Role::User,
            content: Some(MessageContent::Blocks(vec![
                ContentBlock::ToolResult {
                    tool_use_id: "call_1".to_string(),
                    content: "result 1".to_string(),
                    is_error: None,
                },
                ContentBlock::ToolResult {
                    tool_use_id: "call_2".to_string(),
                    content: "result 2".to_string(),
                    is_error: None,
                },
            ])),
        };

        let wire_msgs = convert_message(msg);

        // Should create 2 separate tool messages
        assert_eq!(wire_msgs.len(), 2);
        assert_eq!(wire_msgs[0].role, "tool");
        assert_eq!(wire_msgs[0].tool_call_id, Some("call_1".to_string()));
        assert_eq!(wire_msgs[1].role, "tool");
        assert_eq!(wire_msgs[1].tool_call_id, Some("call_2".to_string()));
    }
}
