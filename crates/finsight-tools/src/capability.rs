//! Capability definition: a function value plus its declared contract

use crate::Result;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Boxed future returned by a capability handler
pub type CapabilityFuture = Pin<Box<dyn Future<Output = Result<Value>> + Send>>;

/// The function value behind a capability
pub type CapabilityHandler = Arc<dyn Fn(Value) -> CapabilityFuture + Send + Sync>;

/// A callable capability with a declared input/output contract
///
/// The handler takes its input as a JSON value matching `input_schema` and
/// returns a JSON value. Construct one from any async function or closure:
///
/// ```
/// use finsight_tools::Capability;
/// use serde_json::json;
///
/// let cap = Capability::new(
///     "echo",
///     "Echo the input back",
///     json!({
///         "type": "object",
///         "properties": { "text": { "type": "string" } },
///         "required": ["text"]
///     }),
///     |params| async move { Ok(params) },
/// );
/// assert_eq!(cap.name(), "echo");
/// ```
#[derive(Clone)]
pub struct Capability {
    name: String,
    description: String,
    input_schema: Value,
    handler: CapabilityHandler,
}

impl Capability {
    /// Create a new capability from an async function
    pub fn new<F, Fut>(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: Value,
        handler: F,
    ) -> Self
    where
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value>> + Send + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
            handler: Arc::new(move |params| Box::pin(handler(params))),
        }
    }

    /// Execute the capability with the given parameters
    pub async fn execute(&self, params: Value) -> Result<Value> {
        (self.handler)(params).await
    }

    /// Get the capability's name
    ///
    /// Must be unique within a [`crate::CapabilityTable`].
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the capability's description
    ///
    /// This description helps the LLM decide when to call the capability.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the capability's input schema (JSON Schema format)
    pub fn input_schema(&self) -> &Value {
        &self.input_schema
    }
}

impl std::fmt::Debug for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Capability")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_capability_execution() {
        let cap = Capability::new(
            "upper",
            "Uppercase the input text",
            json!({
                "type": "object",
                "properties": { "text": { "type": "string" } },
                "required": ["text"]
            }),
            |params| async move {
                let text = params["text"].as_str().unwrap_or_default();
                Ok(json!(text.to_uppercase()))
            },
        );

        let result = cap.execute(json!({"text": "ionq"})).await.unwrap();
        assert_eq!(result, json!("IONQ"));
    }

    #[test]
    fn test_capability_metadata() {
        let cap = Capability::new("noop", "Do nothing", json!({"type": "object"}), |_| async {
            Ok(Value::Null)
        });

        assert_eq!(cap.name(), "noop");
        assert_eq!(cap.description(), "Do nothing");
        assert_eq!(cap.input_schema()["type"], "object");
    }

    #[tokio::test]
    async fn test_capability_error_propagation() {
        let cap = Capability::new("fails", "Always fails", json!({"type": "object"}), |_| async {
            Err(crate::CapabilityError::ExecutionFailed("boom".to_string()))
        });

        let err = cap.execute(Value::Null).await.unwrap_err();
        assert!(err.to_string().contains("boom"));
    }
}
