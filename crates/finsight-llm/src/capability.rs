//! Capability definitions advertised to the LLM

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Capability definition sent to the LLM provider
///
/// Describes a callable capability: its name, what it does, and the JSON
/// Schema of its input. The name must match a capability registered in the
/// caller's capability table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapabilityDefinition {
    /// Capability name (must match the entry in the capability table)
    pub name: String,

    /// Description of what the capability does
    pub description: String,

    /// JSON schema for the capability's input parameters
    pub input_schema: Value,
}

impl CapabilityDefinition {
    /// Create a new capability definition
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}

/// Helper module to build JSON schemas for capability inputs
pub mod schema {
    use serde_json::{Value, json};

    /// Create a JSON schema for an object with properties
    pub fn object(properties: Value, required: Vec<&str>) -> Value {
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// String property schema
    pub fn string(description: &str) -> Value {
        json!({
            "type": "string",
            "description": description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_definition_creation() {
        let input_schema = schema::object(
            json!({
                "ticker": schema::string("Stock ticker symbol"),
            }),
            vec!["ticker"],
        );

        let def = CapabilityDefinition::new(
            "fact_sheet",
            "Collect financial data for a ticker",
            input_schema.clone(),
        );
        assert_eq!(def.name, "fact_sheet");
        assert_eq!(def.description, "Collect financial data for a ticker");
        assert_eq!(def.input_schema, input_schema);
    }

    #[test]
    fn test_schema_builders() {
        let str_schema = schema::string("test");
        assert_eq!(str_schema["type"], "string");

        let obj_schema = schema::object(json!({"a": schema::string("a")}), vec!["a"]);
        assert_eq!(obj_schema["type"], "object");
        assert_eq!(obj_schema["required"][0], "a");
    }
}
