//! # Reagent Core
//!
//! Domain types, traits, and error definitions for the Reagent ReAct runtime.
//! This crate has **zero framework dependencies** — it defines the domain model
//! that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! The two seams of the system are defined as traits here: [`tool::Tool`]
//! (what the loop can do) and [`reasoner::Reasoner`] (what decides the next
//! action). Implementations live in their respective crates. This enables:
//! - Swapping reasoning backends without touching the loop
//! - Easy testing with scripted implementations
//! - Clean dependency graph (all crates depend inward on core)

pub mod error;
pub mod event;
pub mod reasoner;
pub mod run;
pub mod tool;

// Re-export key types at crate root for ergonomics
pub use error::{Error, ReasonerError, Result, ToolError};
pub use event::{DomainEvent, EventBus};
pub use reasoner::{ActionRequest, Decision, Reasoner};
pub use run::{ActionRecord, RunId, RunResult, StepRecord, StopReason};
pub use tool::{Tool, ToolDefinition, ToolOutput, ToolRegistry};
