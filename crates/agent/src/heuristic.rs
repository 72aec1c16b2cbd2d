//! A deterministic, rule-based reasoner.
//!
//! Useful as a stand-in reasoning step when no LLM backend is wired up:
//! it routes arithmetic-looking queries to the calculator, weather queries
//! to the weather tool, and everything else to search, then finishes with
//! the first observation it gets back. Rules only — no model calls, fully
//! reproducible.

use async_trait::async_trait;
use reagent_core::error::ReasonerError;
use reagent_core::reasoner::{Decision, Reasoner};
use reagent_core::run::StepRecord;
use reagent_core::tool::ToolDefinition;

pub struct HeuristicReasoner;

impl HeuristicReasoner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HeuristicReasoner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Reasoner for HeuristicReasoner {
    fn name(&self) -> &str {
        "heuristic"
    }

    async fn decide(
        &self,
        query: &str,
        history: &[StepRecord],
        tools: &[ToolDefinition],
    ) -> Result<Decision, ReasonerError> {
        // One observation is all the information these rules can use.
        if let Some(step) = history.last()
            && let Some(observation) = &step.observation
        {
            return Ok(Decision::finish(observation.clone()));
        }

        let q = query.to_lowercase();

        if looks_like_math(query) && has_tool(tools, "calculator") {
            return Ok(Decision::act(
                "I need to perform a calculation to answer this question.",
                "calculator",
                serde_json::json!({"expression": extract_expression(query)}),
            ));
        }

        if q.contains("weather") && has_tool(tools, "weather") {
            let city = extract_city(query).unwrap_or_else(|| "London".to_string());
            return Ok(Decision::act(
                "I need to look up the weather to answer this question.",
                "weather",
                serde_json::json!({"city": city}),
            ));
        }

        if has_tool(tools, "search") {
            return Ok(Decision::act(
                "I need to search for information to answer this question.",
                "search",
                serde_json::json!({"query": query}),
            ));
        }

        Ok(Decision::finish(
            "I don't have a tool that can help with this question.",
        ))
    }
}

fn has_tool(tools: &[ToolDefinition], name: &str) -> bool {
    tools.iter().any(|t| t.name == name)
}

/// A query is math-shaped if it mentions calculation or pairs a digit
/// with an arithmetic operator.
fn looks_like_math(query: &str) -> bool {
    let q = query.to_lowercase();
    if q.contains("calculate") || (q.contains("what is") && q.chars().any(|c| "+-*/".contains(c))) {
        return true;
    }
    q.chars().any(|c| c.is_ascii_digit()) && q.chars().any(|c| "+*/".contains(c))
}

/// Pull the arithmetic-looking part out of a natural-language query.
fn extract_expression(query: &str) -> String {
    let kept: String = query
        .chars()
        .filter(|c| c.is_ascii_digit() || "+-*/(). ".contains(*c))
        .collect();
    let trimmed = kept.trim().to_string();
    if trimmed.is_empty() {
        query.to_string()
    } else {
        trimmed
    }
}

/// Take the words after the last " in " as the city, stripping punctuation.
fn extract_city(query: &str) -> Option<String> {
    let lower = query.to_lowercase();
    let idx = lower.rfind(" in ")?;
    let tail = &query[idx + 4..];
    let city: String = tail
        .chars()
        .take_while(|c| *c != '?' && *c != '.' && *c != ',' && *c != '!')
        .collect();
    let city = city.trim();
    if city.is_empty() {
        None
    } else {
        Some(city.to_string())
    }
}
