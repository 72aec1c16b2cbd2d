//! The bounded ReAct run loop — the heart of Reagent.
//!
//! A run follows a **Thought → Action → Observation** cycle:
//!
//! 1. **Reason**: ask the reasoner what to do next, given the history
//! 2. **If it finishes**: return the final answer
//! 3. **If it acts**: dispatch the named tool against the registry
//! 4. **Observe**: append the cycle to the history, feed it back, repeat
//!
//! The loop continues until the reasoner finishes or the iteration
//! budget is exhausted. Tool failures never end a run — they become
//! observations the reasoner can react to.

pub mod coordinator;
pub mod dispatcher;
pub mod heuristic;
pub mod runner;

pub use coordinator::{CoordinationResult, CoordinatorAgent, SubTaskResult, WorkerConfig};
pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use heuristic::HeuristicReasoner;
pub use runner::ReactRunner;

#[cfg(test)]
pub(crate) mod test_helpers;
