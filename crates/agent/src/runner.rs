//! The run loop — a bounded Thought → Action → Observation state machine.
//!
//! `ReactRunner` owns one run at a time: it repeatedly asks the reasoner
//! for a decision, dispatches requested actions, appends the resulting
//! cycle to the history, and stops on a final answer, an exhausted
//! iteration budget, or a reasoner failure. Every run ends in exactly one
//! terminal state, reported in the returned [`RunResult`].
//!
//! # Termination
//!
//! - The reasoner returns `Finish` → `StopReason::Finished`
//! - The cycle counter reaches `max_iterations` → `StopReason::MaxIterationsReached`
//! - The reasoner call fails → `StopReason::Error` (tool failures never
//!   end a run; they come back as observations)

use chrono::Utc;
use reagent_core::event::{DomainEvent, EventBus};
use reagent_core::reasoner::{Decision, Reasoner};
use reagent_core::run::{ActionRecord, RunId, RunResult, StepRecord, StopReason};
use reagent_core::tool::ToolRegistry;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::dispatcher::Dispatcher;

/// Default cycle budget for a run.
const DEFAULT_MAX_ITERATIONS: u32 = 10;

/// Orchestrates bounded ReAct runs over a shared reasoner and registry.
pub struct ReactRunner {
    /// Decides the next step.
    reasoner: Arc<dyn Reasoner>,

    /// Read-only capability set; shared across concurrent runs.
    tools: Arc<ToolRegistry>,

    /// Executes actions against the registry.
    dispatcher: Dispatcher,

    /// Maximum Thought → Action → Observation cycles per run.
    max_iterations: u32,

    /// Event bus for run lifecycle events.
    event_bus: Arc<EventBus>,
}

impl ReactRunner {
    /// Create a new runner.
    pub fn new(
        reasoner: Arc<dyn Reasoner>,
        tools: Arc<ToolRegistry>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        let dispatcher = Dispatcher::new(tools.clone());
        Self {
            reasoner,
            tools,
            dispatcher,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            event_bus,
        }
    }

    /// Set the cycle budget. A zero budget would never act; clamped to 1.
    pub fn with_max_iterations(mut self, max: u32) -> Self {
        self.max_iterations = max.max(1);
        self
    }

    /// Execute one run for a query.
    ///
    /// Always returns a [`RunResult`] with a terminal reason; reasoner
    /// failures are reported as `StopReason::Error` rather than bubbling up.
    pub async fn run(&self, query: &str) -> RunResult {
        let run_id = RunId::new();
        let mut history: Vec<StepRecord> = Vec::new();
        let mut iterations = 0usize;
        let tool_defs = self.tools.definitions();

        info!(
            run_id = %run_id,
            reasoner = self.reasoner.name(),
            max_iterations = self.max_iterations,
            "run starting"
        );

        self.event_bus.publish(DomainEvent::RunStarted {
            run_id: run_id.to_string(),
            query_preview: preview(query),
            timestamp: Utc::now(),
        });

        loop {
            let decision = match self.reasoner.decide(query, &history, &tool_defs).await {
                Ok(decision) => decision,
                Err(e) => {
                    warn!(run_id = %run_id, error = %e, "reasoner failed, aborting run");
                    self.event_bus.publish(DomainEvent::ReasonerFailed {
                        run_id: run_id.to_string(),
                        error_message: e.to_string(),
                        timestamp: Utc::now(),
                    });
                    let stop_reason = StopReason::Error {
                        message: e.to_string(),
                    };
                    return self.complete(run_id, None, history, stop_reason, iterations);
                }
            };

            match decision {
                Decision::Finish { answer } => {
                    info!(run_id = %run_id, iterations, "run finished with an answer");
                    return self.complete(
                        run_id,
                        Some(answer),
                        history,
                        StopReason::Finished,
                        iterations,
                    );
                }
                Decision::Act(request) => {
                    debug!(
                        run_id = %run_id,
                        cycle = iterations + 1,
                        tool = %request.tool,
                        "dispatching action"
                    );

                    let outcome = self.dispatcher.dispatch(&request).await;

                    self.event_bus.publish(DomainEvent::ToolDispatched {
                        run_id: run_id.to_string(),
                        tool_name: request.tool.clone(),
                        success: outcome.success,
                        duration_ms: outcome.duration_ms,
                        timestamp: Utc::now(),
                    });

                    history.push(StepRecord::cycle(
                        request.thought,
                        ActionRecord {
                            tool: request.tool,
                            input: request.input,
                        },
                        outcome.observation,
                    ));
                    iterations += 1;

                    if iterations >= self.max_iterations as usize {
                        warn!(
                            run_id = %run_id,
                            max_iterations = self.max_iterations,
                            "iteration budget exhausted"
                        );
                        return self.complete(
                            run_id,
                            None,
                            history,
                            StopReason::MaxIterationsReached,
                            iterations,
                        );
                    }
                }
            }
        }
    }

    fn complete(
        &self,
        run_id: RunId,
        final_answer: Option<String>,
        history: Vec<StepRecord>,
        stop_reason: StopReason,
        iterations: usize,
    ) -> RunResult {
        self.event_bus.publish(DomainEvent::RunCompleted {
            run_id: run_id.to_string(),
            stop_reason: stop_reason.label().to_string(),
            iterations,
            timestamp: Utc::now(),
        });

        RunResult {
            run_id,
            final_answer,
            history,
            stop_reason,
            iterations,
        }
    }
}

/// First 80 characters of the query, for event payloads.
fn preview(query: &str) -> String {
    query.chars().take(80).collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────
