//! Tool trait — the abstraction over loop capabilities.
//!
//! Tools are what give a run the ability to act in the world:
//! evaluate expressions, search, read the clock, write files, etc.

use crate::error::ToolError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The result of a tool execution.
///
/// Tools report soft failures (bad input, domain errors) by returning
/// `success = false` with a human-readable `output`; the loop feeds that
/// text back to the reasoner as an observation instead of aborting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutput {
    /// Whether the tool executed successfully
    pub success: bool,

    /// The output content
    pub output: String,

    /// Optional structured data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ToolOutput {
    /// A successful output with only text content.
    pub fn ok(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: output.into(),
            data: None,
        }
    }

    /// A soft failure the reasoner can react to.
    pub fn failed(output: impl Into<String>) -> Self {
        Self {
            success: false,
            output: output.into(),
            data: None,
        }
    }
}

/// A tool description handed to the reasoning step so it knows what
/// capabilities are available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// The tool name
    pub name: String,

    /// Description of what the tool does
    pub description: String,

    /// JSON Schema describing the tool's parameters
    pub parameters: serde_json::Value,
}

/// The core Tool trait.
///
/// Each tool (calculator, search, clock, etc.) implements this trait.
/// Tools are registered in the [`ToolRegistry`] and made available to the
/// run loop.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The unique name of this tool (e.g., "calculator", "search").
    fn name(&self) -> &str;

    /// A description of what this tool does (consumed by the reasoner).
    fn description(&self) -> &str;

    /// JSON Schema describing this tool's parameters.
    fn parameters_schema(&self) -> serde_json::Value;

    /// Execute the tool with the given arguments.
    async fn execute(
        &self,
        arguments: serde_json::Value,
    ) -> std::result::Result<ToolOutput, ToolError>;

    /// Convert this tool into a ToolDefinition for the reasoner.
    fn to_definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters_schema(),
        }
    }
}

/// A registry of available tools.
///
/// The run loop uses this to:
/// 1. Get tool definitions to hand to the reasoner
/// 2. Look up tools when the reasoner requests them
///
/// Registration is a setup-time operation. Once runs start the registry is
/// shared read-only (`Arc<ToolRegistry>`); names are unique for its lifetime.
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool under its unique name.
    ///
    /// Fails with [`ToolError::DuplicateName`] if a tool with the same name
    /// is already present, and with [`ToolError::EmptyName`] for an empty
    /// name. On failure the registry is left unchanged.
    pub fn register(&mut self, tool: Box<dyn Tool>) -> std::result::Result<(), ToolError> {
        let name = tool.name().to_string();
        if name.is_empty() {
            return Err(ToolError::EmptyName);
        }
        if self.tools.contains_key(&name) {
            return Err(ToolError::DuplicateName(name));
        }
        self.tools.insert(name, tool);
        Ok(())
    }

    /// Look up a tool by name.
    pub fn lookup(&self, name: &str) -> std::result::Result<&dyn Tool, ToolError> {
        self.tools
            .get(name)
            .map(|t| t.as_ref())
            .ok_or_else(|| ToolError::NotFound(name.to_string()))
    }

    /// Get all tool definitions (for the reasoner).
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.values().map(|t| t.to_definition()).collect()
    }

    /// List all registered tool names.
    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(|s| s.as_str()).collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry has no tools.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A simple test tool for unit tests.
    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }
        fn description(&self) -> &str {
            "Echoes back the input"
        }
        fn parameters_schema(&self) -> serde_json::Value {
            serde_json::json!({
                "type": "object",
                "properties": {
                    "text": { "type": "string" }
                },
                "required": ["text"]
            })
        }
        async fn execute(
            &self,
            arguments: serde_json::Value,
        ) -> std::result::Result<ToolOutput, ToolError> {
            let text = arguments["text"].as_str().unwrap_or("").to_string();
            Ok(ToolOutput::ok(text))
        }
    }

    /// A second tool reusing the "echo" name, for duplicate tests.
    struct ShoutingEchoTool;

    #[async_trait]
    impl Tool for ShoutingEchoTool {
        fn name(&self) -> &str {
            "echo"
        }
        fn description(&self) -> &str {
            "Echoes back the input, loudly"
        }
        fn parameters_schema(&self) -> serde_json::Value {
            serde_json::json!({"type": "object"})
        }
        async fn execute(
            &self,
            arguments: serde_json::Value,
        ) -> std::result::Result<ToolOutput, ToolError> {
            let text = arguments["text"].as_str().unwrap_or("").to_uppercase();
            Ok(ToolOutput::ok(text))
        }
    }

    struct NamelessTool;

    #[async_trait]
    impl Tool for NamelessTool {
        fn name(&self) -> &str {
            ""
        }
        fn description(&self) -> &str {
            "Has no name"
        }
        fn parameters_schema(&self) -> serde_json::Value {
            serde_json::json!({"type": "object"})
        }
        async fn execute(
            &self,
            _arguments: serde_json::Value,
        ) -> std::result::Result<ToolOutput, ToolError> {
            Ok(ToolOutput::ok(""))
        }
    }

    #[test]
    fn register_and_lookup() {
        let mut registry = ToolRegistry::new();
        registry.register(Box::new(EchoTool)).unwrap();

        let tool = registry.lookup("echo").unwrap();
        assert_eq!(tool.name(), "echo");
        assert_eq!(tool.description(), "Echoes back the input");
    }

    #[test]
    fn lookup_unknown_fails_with_not_found() {
        let registry = ToolRegistry::new();
        let err = registry.lookup("nonexistent").err().unwrap();
        assert!(matches!(err, ToolError::NotFound(name) if name == "nonexistent"));
    }

    #[test]
    fn duplicate_registration_rejected_and_registry_unchanged() {
        let mut registry = ToolRegistry::new();
        registry.register(Box::new(EchoTool)).unwrap();

        let err = registry.register(Box::new(ShoutingEchoTool)).unwrap_err();
        assert!(matches!(err, ToolError::DuplicateName(name) if name == "echo"));

        // Original registration survives.
        assert_eq!(registry.len(), 1);
        let tool = registry.lookup("echo").unwrap();
        assert_eq!(tool.description(), "Echoes back the input");
    }

    #[test]
    fn empty_name_rejected() {
        let mut registry = ToolRegistry::new();
        let err = registry.register(Box::new(NamelessTool)).unwrap_err();
        assert!(matches!(err, ToolError::EmptyName));
        assert!(registry.is_empty());
    }

    #[test]
    fn lookup_is_idempotent() {
        let mut registry = ToolRegistry::new();
        registry.register(Box::new(EchoTool)).unwrap();

        let first = registry.lookup("echo").unwrap().to_definition();
        let second = registry.lookup("echo").unwrap().to_definition();
        assert_eq!(first.name, second.name);
        assert_eq!(first.description, second.description);
        assert_eq!(first.parameters, second.parameters);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn definitions_cover_all_tools() {
        let mut registry = ToolRegistry::new();
        registry.register(Box::new(EchoTool)).unwrap();
        let defs = registry.definitions();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].name, "echo");
    }

    #[tokio::test]
    async fn execute_via_lookup() {
        let mut registry = ToolRegistry::new();
        registry.register(Box::new(EchoTool)).unwrap();

        let tool = registry.lookup("echo").unwrap();
        let result = tool
            .execute(serde_json::json!({"text": "hello world"}))
            .await
            .unwrap();
        assert!(result.success);
        assert_eq!(result.output, "hello world");
    }
}
