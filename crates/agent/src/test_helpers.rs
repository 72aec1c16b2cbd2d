//! Shared test helpers for loop and coordinator tests.

use async_trait::async_trait;
use reagent_core::error::ReasonerError;
use reagent_core::reasoner::{Decision, Reasoner};
use reagent_core::run::StepRecord;
use reagent_core::tool::ToolDefinition;
use std::sync::Mutex;

/// A reasoner that replays a scripted sequence of decisions.
///
/// Each call to `decide` returns the next entry in the script. Panics if
/// more calls are made than entries provided, unless `repeat_last` is set.
pub struct ScriptedReasoner {
    script: Mutex<Vec<Result<Decision, ReasonerError>>>,
    call_count: Mutex<usize>,
    repeat_last: bool,
}

impl ScriptedReasoner {
    pub fn new(script: Vec<Result<Decision, ReasonerError>>) -> Self {
        Self {
            script: Mutex::new(script),
            call_count: Mutex::new(0),
            repeat_last: false,
        }
    }

    /// A reasoner that immediately returns a final answer.
    pub fn finish_immediately(answer: &str) -> Self {
        Self::new(vec![Ok(Decision::finish(answer))])
    }

    /// A reasoner that requests one tool action, then finishes.
    pub fn act_then_finish(
        thought: &str,
        tool: &str,
        input: serde_json::Value,
        answer: &str,
    ) -> Self {
        Self::new(vec![
            Ok(Decision::act(thought, tool, input)),
            Ok(Decision::finish(answer)),
        ])
    }

    /// A reasoner that requests the same action forever.
    pub fn always_act(thought: &str, tool: &str, input: serde_json::Value) -> Self {
        let mut scripted = Self::new(vec![Ok(Decision::act(thought, tool, input))]);
        scripted.repeat_last = true;
        scripted
    }

    /// A reasoner whose first decision fails.
    pub fn failing(error: ReasonerError) -> Self {
        Self::new(vec![Err(error)])
    }

    #[allow(dead_code)]
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl Reasoner for ScriptedReasoner {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn decide(
        &self,
        _query: &str,
        _history: &[StepRecord],
        _tools: &[ToolDefinition],
    ) -> Result<Decision, ReasonerError> {
        let mut count = self.call_count.lock().unwrap();
        let script = self.script.lock().unwrap();

        let index = if self.repeat_last && *count >= script.len() {
            script.len() - 1
        } else {
            *count
        };

        if index >= script.len() {
            panic!(
                "ScriptedReasoner: no more decisions (call #{}, have {})",
                *count,
                script.len()
            );
        }

        let decision = script[index].clone();
        *count += 1;
        decision
    }
}
