//! Reasoner trait — the abstraction over the reasoning step.
//!
//! A Reasoner looks at the query, the accumulated history, and the available
//! tool descriptions, and decides what happens next: invoke a tool or finish
//! with an answer. In production this is backed by an LLM call; the runtime
//! treats it as an opaque, fallible collaborator.

use crate::error::ReasonerError;
use crate::run::StepRecord;
use crate::tool::ToolDefinition;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A request to execute a specific tool with an input payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRequest {
    /// The reasoning that led to this action.
    pub thought: String,

    /// Name of the tool to execute.
    pub tool: String,

    /// Input payload as a JSON value.
    pub input: serde_json::Value,
}

/// What the reasoner decided to do next.
///
/// An explicit discriminated type: either the run is done and the answer is
/// final, or a tool should be invoked. There is no in-between and no
/// string-format sniffing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Decision {
    /// The reasoner has the final answer; the run terminates.
    Finish { answer: String },

    /// The reasoner wants a tool invoked and the observation fed back.
    Act(ActionRequest),
}

impl Decision {
    /// Convenience constructor for a final answer.
    pub fn finish(answer: impl Into<String>) -> Self {
        Self::Finish {
            answer: answer.into(),
        }
    }

    /// Convenience constructor for a tool action.
    pub fn act(
        thought: impl Into<String>,
        tool: impl Into<String>,
        input: serde_json::Value,
    ) -> Self {
        Self::Act(ActionRequest {
            thought: thought.into(),
            tool: tool.into(),
            input,
        })
    }
}

/// The core Reasoner trait.
///
/// The run loop calls `decide()` once per cycle without knowing which backend
/// is doing the thinking. The call may be slow, rate-limited, or fail; any
/// `Err` is fatal to the run it occurred in (the caller still receives a
/// terminal run result).
#[async_trait]
pub trait Reasoner: Send + Sync {
    /// A human-readable name for this reasoner (e.g., "heuristic", "scripted").
    fn name(&self) -> &str;

    /// Decide the next step for a run.
    ///
    /// `history` is the append-only sequence of completed cycles so far;
    /// `tools` describes what the registry can dispatch.
    async fn decide(
        &self,
        query: &str,
        history: &[StepRecord],
        tools: &[ToolDefinition],
    ) -> std::result::Result<Decision, ReasonerError>;
}
