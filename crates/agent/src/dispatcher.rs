//! Action dispatcher — turns action requests into observations.
//!
//! The dispatcher is the only component that touches tools at run time.
//! It never fails: tool lookup misses and execution errors are converted
//! into observation text the reasoner can react to. An unknown tool yields
//! `"tool not found: <name>"` and the run continues — aborting would deny
//! the reasoner the chance to self-correct.

use reagent_core::reasoner::ActionRequest;
use reagent_core::tool::ToolRegistry;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// What came back from dispatching one action.
#[derive(Debug, Clone)]
pub struct DispatchOutcome {
    /// The observation text to feed back into reasoning.
    pub observation: String,

    /// Whether the tool ran and reported success.
    pub success: bool,

    /// Wall-clock execution time.
    pub duration_ms: u64,
}

/// Dispatches action requests against a shared, read-only tool registry.
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// Execute an action request and capture the observation.
    pub async fn dispatch(&self, request: &ActionRequest) -> DispatchOutcome {
        let start = Instant::now();

        let tool = match self.registry.lookup(&request.tool) {
            Ok(tool) => tool,
            Err(_) => {
                warn!(tool = %request.tool, "action requested an unregistered tool");
                return DispatchOutcome {
                    observation: format!("tool not found: {}", request.tool),
                    success: false,
                    duration_ms: start.elapsed().as_millis() as u64,
                };
            }
        };

        match tool.execute(request.input.clone()).await {
            Ok(output) => {
                debug!(
                    tool = %request.tool,
                    success = output.success,
                    "tool executed"
                );
                let observation = if output.output.is_empty() {
                    // An empty string still has to read as an observation.
                    "(no output)".to_string()
                } else {
                    output.output
                };
                DispatchOutcome {
                    observation,
                    success: output.success,
                    duration_ms: start.elapsed().as_millis() as u64,
                }
            }
            Err(e) => {
                warn!(tool = %request.tool, error = %e, "tool execution failed");
                DispatchOutcome {
                    observation: format!("Error: {}", e),
                    success: false,
                    duration_ms: start.elapsed().as_millis() as u64,
                }
            }
        }
    }
}
