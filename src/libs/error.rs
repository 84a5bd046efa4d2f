//! Error kinds raised by the task timer core.
//!
//! Every variant is recoverable: the CLI reports it and aborts the current
//! command without saving, so the persisted task file is never left with a
//! half-applied change.

use thiserror::Error;

/// Failures of registry and clock operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    /// A create or rename collided with an existing task (case-insensitive).
    #[error("Task '{0}' already exists")]
    DuplicateName(String),

    /// The named task is not in the registry.
    #[error("Task '{0}' not found")]
    NotFound(String),

    /// The operation is not legal for the task in its current state.
    #[error("Cannot modify task '{task}': {reason}")]
    InvalidOperation { task: String, reason: String },
}

impl TimerError {
    pub(crate) fn invalid(task: &str, reason: impl Into<String>) -> Self {
        TimerError::InvalidOperation {
            task: task.to_string(),
            reason: reason.into(),
        }
    }
}
