//! Capability table: explicit registration and lookup by name

use crate::Capability;
use std::collections::HashMap;
use std::sync::RwLock;

/// Table of registered capabilities
///
/// Registration is explicit: every capability the pipeline may expose to the
/// LLM is inserted here by name at wiring time.
pub struct CapabilityTable {
    capabilities: RwLock<HashMap<String, Capability>>,
}

impl Default for CapabilityTable {
    fn default() -> Self {
        Self {
            capabilities: RwLock::new(HashMap::new()),
        }
    }
}

impl CapabilityTable {
    /// Create a new empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a capability under its declared name
    pub fn register(&self, capability: Capability) {
        let mut capabilities = self.capabilities.write().expect("capability table poisoned");
        capabilities.insert(capability.name().to_string(), capability);
    }

    /// Get a capability by name
    pub fn get(&self, name: &str) -> Option<Capability> {
        let capabilities = self.capabilities.read().expect("capability table poisoned");
        capabilities.get(name).cloned()
    }

    /// List all registered capabilities
    ///
    /// Useful for building the definitions advertised to the LLM.
    pub fn list(&self) -> Vec<Capability> {
        let capabilities = self.capabilities.read().expect("capability table poisoned");
        capabilities.values().cloned().collect()
    }

    /// Get the number of registered capabilities
    pub fn len(&self) -> usize {
        let capabilities = self.capabilities.read().expect("capability table poisoned");
        capabilities.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        let capabilities = self.capabilities.read().expect("capability table poisoned");
        capabilities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn noop(name: &str) -> Capability {
        Capability::new(name, "test capability", json!({"type": "object"}), |_| async {
            Ok(Value::Null)
        })
    }

    #[test]
    fn test_register_and_get() {
        let table = CapabilityTable::new();
        assert!(table.is_empty());

        table.register(noop("fact_sheet"));
        assert_eq!(table.len(), 1);

        let cap = table.get("fact_sheet");
        assert!(cap.is_some());
        assert_eq!(cap.unwrap().name(), "fact_sheet");
    }

    #[test]
    fn test_get_unknown() {
        let table = CapabilityTable::new();
        assert!(table.get("missing").is_none());
    }

    #[test]
    fn test_register_overwrites_same_name() {
        let table = CapabilityTable::new();
        table.register(noop("dup"));
        table.register(noop("dup"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_list() {
        let table = CapabilityTable::new();
        table.register(noop("a"));
        table.register(noop("b"));

        let mut names: Vec<String> = table.list().iter().map(|c| c.name().to_string()).collect();
        names.sort();
        assert_eq!(names, vec!["a", "b"]);
    }
}
