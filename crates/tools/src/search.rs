//! Search tool — keyword lookup over a built-in snippet base.
//!
//! In production this would call a real search API. The stub matches the
//! query against a small set of topic snippets so the run loop can be
//! exercised end-to-end without network access.

use async_trait::async_trait;
use reagent_core::error::ToolError;
use reagent_core::tool::{Tool, ToolOutput};

pub struct SearchTool;

const SNIPPETS: &[(&str, &str)] = &[
    (
        "ai agents",
        "AI agents are autonomous systems that perceive their environment and take actions to achieve goals.",
    ),
    (
        "react",
        "ReAct (Reasoning and Acting) is a paradigm for AI agents that combines reasoning with action execution.",
    ),
    (
        "langchain",
        "LangChain is a framework for developing applications powered by language models.",
    ),
    (
        "llm",
        "Large Language Models (LLMs) are AI models trained on vast amounts of text data.",
    ),
    (
        "rust",
        "Rust is a systems programming language emphasizing performance, type safety, and concurrency.",
    ),
];

#[async_trait]
impl Tool for SearchTool {
    fn name(&self) -> &str {
        "search"
    }

    fn description(&self) -> &str {
        "Search for information on a topic. Input should be a search query."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search query"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolOutput, ToolError> {
        let query = arguments["query"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'query' argument".into()))?;

        let q = query.to_lowercase();
        for (keyword, snippet) in SNIPPETS {
            if q.contains(keyword) {
                return Ok(ToolOutput {
                    success: true,
                    output: format!("Search result for '{}': {}", query, snippet),
                    data: Some(serde_json::json!({
                        "matched_topic": keyword,
                        "snippet": snippet,
                    })),
                });
            }
        }

        Ok(ToolOutput::ok(format!(
            "No specific information found for '{}'",
            query
        )))
    }
}
