//! Multi-agent coordination.
//!
//! A coordinator receives a complex task, decomposes it into sub-tasks,
//! delegates each to a named worker (every worker executes its own bounded
//! ReAct run over the shared reasoner and registry), and aggregates the
//! results into a final response.
//!
//! # Architecture
//!
//! ```text
//! Task
//!   │
//!   ▼
//! ┌─────────────┐
//! │ Coordinator │  ← Decomposes task, aggregates results
//! └──┬──────┬───┘
//!    │      │
//!    ▼      ▼
//! ┌──────┐ ┌──────┐
//! │ W-1  │ │ W-2  │  ← Named workers (each runs its own ReAct loop)
//! └──────┘ └──────┘
//! ```
//!
//! Decomposition is keyword routing: "research" tasks fan out over a
//! researcher/writer/reviewer pipeline, "analysis" tasks over researcher/
//! executor/writer. Assignments for workers that are not registered are
//! skipped with a warning.

use reagent_core::event::EventBus;
use reagent_core::reasoner::Reasoner;
use reagent_core::run::{StepRecord, StopReason};
use reagent_core::tool::ToolRegistry;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::runner::ReactRunner;

/// Default iteration budget for each worker run.
const DEFAULT_WORKER_MAX_ITERATIONS: u32 = 5;

/// Coordinator that delegates sub-tasks to workers.
pub struct CoordinatorAgent {
    /// Shared reasoning backend for all workers.
    reasoner: Arc<dyn Reasoner>,

    /// Tool registry (shared with workers).
    tools: Arc<ToolRegistry>,

    /// Available workers.
    workers: Vec<WorkerConfig>,

    /// Iteration budget per worker run.
    worker_max_iterations: u32,

    /// Event bus.
    event_bus: Arc<EventBus>,
}

/// Configuration for a worker.
pub struct WorkerConfig {
    /// Worker name (e.g., "researcher", "writer", "reviewer").
    pub name: String,

    /// What this worker specializes in.
    pub description: String,
}

/// Result of a coordinated multi-worker execution.
pub struct CoordinationResult {
    /// The final aggregated answer.
    pub answer: String,

    /// Results from each sub-task, in execution order.
    pub sub_results: Vec<SubTaskResult>,

    /// Total cycles across all workers.
    pub total_iterations: usize,

    /// Total tool dispatches across all workers.
    pub total_tool_calls: usize,
}

/// Result of a single sub-task executed by a worker.
pub struct SubTaskResult {
    /// Which worker handled this.
    pub worker_name: String,

    /// The sub-task description.
    pub task: String,

    /// The worker's answer (or a placeholder when the run produced none).
    pub result: String,

    /// How the worker's run ended.
    pub stop_reason: StopReason,

    /// The worker's cycle history.
    pub history: Vec<StepRecord>,
}

/// Internal sub-task assignment.
struct SubTask {
    worker: String,
    task: String,
}

impl CoordinatorAgent {
    /// Create a new coordinator.
    pub fn new(
        reasoner: Arc<dyn Reasoner>,
        tools: Arc<ToolRegistry>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            reasoner,
            tools,
            workers: Vec::new(),
            worker_max_iterations: DEFAULT_WORKER_MAX_ITERATIONS,
            event_bus,
        }
    }

    /// Add a worker.
    pub fn add_worker(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.workers.push(WorkerConfig {
            name: name.into(),
            description: description.into(),
        });
        self
    }

    /// Set the per-worker iteration budget. Clamped to at least 1.
    pub fn with_worker_max_iterations(mut self, max: u32) -> Self {
        self.worker_max_iterations = max.max(1);
        self
    }

    /// Execute a coordinated multi-worker task.
    ///
    /// 1. Decompose the task into sub-tasks
    /// 2. Execute each sub-task with its worker, in order
    /// 3. Aggregate results into a final answer
    pub async fn run(&self, task: &str) -> CoordinationResult {
        info!(
            workers = self.workers.len(),
            "coordinator: starting task decomposition"
        );

        let sub_tasks = self.decompose(task);
        debug!(sub_tasks = sub_tasks.len(), "coordinator: tasks decomposed");

        let mut sub_results = Vec::new();
        let mut total_iterations = 0usize;
        let mut total_tool_calls = 0usize;

        for sub_task in sub_tasks {
            info!(
                worker = %sub_task.worker,
                task = %sub_task.task,
                "coordinator: delegating sub-task"
            );

            let worker_runner = ReactRunner::new(
                self.reasoner.clone(),
                self.tools.clone(),
                self.event_bus.clone(),
            )
            .with_max_iterations(self.worker_max_iterations);

            let run = worker_runner.run(&sub_task.task).await;

            total_iterations += run.iterations;
            total_tool_calls += run
                .history
                .iter()
                .filter(|step| step.action.is_some())
                .count();

            let result = run.final_answer.clone().unwrap_or_else(|| {
                format!(
                    "{} ended without an answer ({})",
                    sub_task.worker,
                    run.stop_reason.label()
                )
            });

            sub_results.push(SubTaskResult {
                worker_name: sub_task.worker,
                task: sub_task.task,
                result,
                stop_reason: run.stop_reason,
                history: run.history,
            });
        }

        let answer = aggregate(&sub_results);

        info!(
            sub_tasks = sub_results.len(),
            total_iterations, total_tool_calls, "coordinator: complete"
        );

        CoordinationResult {
            answer,
            sub_results,
            total_iterations,
            total_tool_calls,
        }
    }

    /// Decompose a task into worker assignments by keyword routing.
    fn decompose(&self, task: &str) -> Vec<SubTask> {
        if self.workers.is_empty() {
            return vec![SubTask {
                worker: "default".into(),
                task: task.to_string(),
            }];
        }

        let t = task.to_lowercase();
        let planned: Vec<(&str, String)> = if t.contains("research") {
            vec![
                ("researcher", format!("Research the topic: {}", task)),
                ("writer", "Write a summary of the findings".into()),
                ("reviewer", "Review the content for quality".into()),
            ]
        } else if t.contains("analysis") || t.contains("analyze") {
            vec![
                ("researcher", format!("Gather data for: {}", task)),
                ("executor", "Analyze the gathered data".into()),
                ("writer", "Create a report of the analysis".into()),
            ]
        } else {
            vec![("executor", task.to_string())]
        };

        let sub_tasks: Vec<SubTask> = planned
            .into_iter()
            .filter_map(|(role, sub)| {
                if self.workers.iter().any(|w| w.name == role) {
                    Some(SubTask {
                        worker: role.to_string(),
                        task: sub,
                    })
                } else {
                    warn!(role, "coordinator: no worker registered for role");
                    None
                }
            })
            .collect();

        // Nothing matched: hand the whole task to the first worker.
        if sub_tasks.is_empty() {
            return vec![SubTask {
                worker: self.workers[0].name.clone(),
                task: task.to_string(),
            }];
        }

        sub_tasks
    }
}

/// Aggregate sub-task results into a numbered summary.
fn aggregate(sub_results: &[SubTaskResult]) -> String {
    sub_results
        .iter()
        .enumerate()
        .map(|(i, sr)| format!("Step {}: {}", i + 1, sr.result))
        .collect::<Vec<_>>()
        .join("\n\n")
}

// ── Tests ─────────────────────────────────────────────────────────────────
