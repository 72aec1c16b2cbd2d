//! Error types for the Reagent domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use thiserror::Error;

/// The top-level error type for all Reagent operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Tool errors ---
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    // --- Reasoner errors ---
    #[error("Reasoner error: {0}")]
    Reasoner(#[from] ReasonerError),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Tool name must not be empty")]
    EmptyName,

    #[error("A tool named '{0}' is already registered")]
    DuplicateName(String),

    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Tool execution failed: {tool_name} — {reason}")]
    ExecutionFailed { tool_name: String, reason: String },

    #[error("Invalid tool arguments: {0}")]
    InvalidArguments(String),
}

/// Failures raised by the external reasoning step.
///
/// The reasoner is an opaque, possibly remote collaborator; any of these
/// ends the run it occurred in.
#[derive(Debug, Clone, Error)]
pub enum ReasonerError {
    #[error("Reasoner timed out: {0}")]
    Timeout(String),

    #[error("Rate limited by reasoner backend, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Reasoner backend failure: {0}")]
    Backend(String),

    #[error("Reasoner produced an unusable decision: {0}")]
    InvalidDecision(String),
}
