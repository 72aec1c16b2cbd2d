//! Run domain types — history records and terminal results.
//!
//! A run is one complete execution of the Thought → Action → Observation
//! loop for a single query. Its history is an append-only sequence of
//! [`StepRecord`]s owned by the loop controller; the outcome is a
//! [`RunResult`] that always names exactly one terminal reason.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(pub String);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The action half of a completed cycle: which tool ran, with what input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Name of the tool that was requested.
    pub tool: String,

    /// Input payload the tool was invoked with.
    pub input: serde_json::Value,
}

/// One completed Thought → Action → Observation cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    /// The reasoner's thought for this cycle.
    pub thought: String,

    /// The action taken, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionRecord>,

    /// The observation fed back to the reasoner, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observation: Option<String>,

    /// When this cycle completed.
    pub timestamp: DateTime<Utc>,
}

impl StepRecord {
    /// Record a full cycle: thought, dispatched action, and observation.
    pub fn cycle(
        thought: impl Into<String>,
        action: ActionRecord,
        observation: impl Into<String>,
    ) -> Self {
        Self {
            thought: thought.into(),
            action: Some(action),
            observation: Some(observation.into()),
            timestamp: Utc::now(),
        }
    }
}

/// Why a run stopped.
///
/// Exactly one of these applies to any finished run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum StopReason {
    /// The reasoner produced a final answer.
    Finished,

    /// The iteration budget ran out before a final answer.
    MaxIterationsReached,

    /// The reasoning step itself failed; the message describes how.
    Error { message: String },
}

impl StopReason {
    /// Short label for logs and events.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Finished => "finished",
            Self::MaxIterationsReached => "max_iterations_reached",
            Self::Error { .. } => "error",
        }
    }
}

/// The outcome of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    /// Which run this is.
    pub run_id: RunId,

    /// The final answer, present only when the run finished normally.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_answer: Option<String>,

    /// The complete cycle history, in order.
    pub history: Vec<StepRecord>,

    /// Why the run stopped.
    pub stop_reason: StopReason,

    /// Number of Thought → Action → Observation cycles completed.
    pub iterations: usize,
}

impl RunResult {
    /// Whether the run produced a final answer.
    pub fn is_finished(&self) -> bool {
        self.stop_reason == StopReason::Finished
    }

    /// Render the history as a human-readable transcript.
    ///
    /// Suitable for injection into a reasoner prompt or for debugging.
    pub fn render_history(&self) -> String {
        render_history(&self.history)
    }
}

/// Render a history slice as `[Thought] / [Action] / [Observation]` lines.
pub fn render_history(history: &[StepRecord]) -> String {
    let mut out = String::new();
    for step in history {
        out.push_str(&format!("[Thought] {}\n", step.thought));
        if let Some(action) = &step.action {
            out.push_str(&format!("[Action] {}({})\n", action.tool, action.input));
        }
        if let Some(observation) = &step.observation {
            out.push_str(&format!("[Observation] {}\n", observation));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_ids_are_unique() {
        assert_ne!(RunId::new(), RunId::new());
    }

    #[test]
    fn cycle_record_is_complete() {
        let step = StepRecord::cycle(
            "need to add",
            ActionRecord {
                tool: "calculator".into(),
                input: serde_json::json!({"expression": "2+2"}),
            },
            "4",
        );
        assert_eq!(step.thought, "need to add");
        assert_eq!(step.action.as_ref().unwrap().tool, "calculator");
        assert_eq!(step.observation.as_deref(), Some("4"));
    }

    #[test]
    fn stop_reason_labels() {
        assert_eq!(StopReason::Finished.label(), "finished");
        assert_eq!(
            StopReason::MaxIterationsReached.label(),
            "max_iterations_reached"
        );
        assert_eq!(
            StopReason::Error {
                message: "boom".into()
            }
            .label(),
            "error"
        );
    }

    #[test]
    fn render_history_shows_all_parts() {
        let history = vec![StepRecord::cycle(
            "check the weather",
            ActionRecord {
                tool: "weather".into(),
                input: serde_json::json!({"city": "Tokyo"}),
            },
            "Tokyo: Clear, 75°F",
        )];
        let rendered = render_history(&history);
        assert!(rendered.contains("[Thought] check the weather"));
        assert!(rendered.contains("[Action] weather"));
        assert!(rendered.contains("[Observation] Tokyo: Clear, 75°F"));
    }

    #[test]
    fn result_serialization_roundtrip() {
        let result = RunResult {
            run_id: RunId::new(),
            final_answer: Some("4".into()),
            history: vec![],
            stop_reason: StopReason::Finished,
            iterations: 0,
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: RunResult = serde_json::from_str(&json).unwrap();
        assert!(back.is_finished());
        assert_eq!(back.final_answer.as_deref(), Some("4"));
    }

    #[test]
    fn error_reason_roundtrip() {
        let reason = StopReason::Error {
            message: "backend gone".into(),
        };
        let json = serde_json::to_string(&reason).unwrap();
        assert!(json.contains("\"reason\":\"error\""));
        let back: StopReason = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reason);
    }
}
