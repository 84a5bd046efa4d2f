//! Display implementation for task-timer messages.
//!
//! All user-facing text lives here, so commands only pick a [`Message`]
//! variant and the wording stays consistent across the tool.
//!
//! ```rust
//! use task_timer::libs::messages::Message;
//!
//! let message = Message::TaskCreated("write docs".to_string());
//! assert_eq!(message.to_string(), "Task 'write docs' created");
//! ```

use super::types::Message;
use std::fmt;

fn signed_seconds(secs: i64) -> String {
    if secs >= 0 {
        format!("+{}s", secs)
    } else {
        format!("{}s", secs)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(name) => format!("Task '{}' created", name),
            Message::TaskStarted(name) => format!("{}: Started", name),
            Message::TaskPaused(name, time) => format!("{}: Paused at {}", name, time),
            Message::TaskResumed(name, time) => format!("{}: Resumed from {}", name, time),
            Message::TaskRenamed(old, new) => format!("Task '{}' renamed to '{}'", old, new),
            Message::TaskDeleted(name) => format!("Task '{}' deleted", name),
            Message::TaskReset(name) => format!("Task '{}' reset", name),
            Message::TimeAdjusted { task, applied, time } => {
                format!("{}: adjusted by {}, time is now {}", task, signed_seconds(*applied), time)
            }
            Message::AdjustmentClamped { requested, applied } => format!(
                "Requested {} but time cannot go below zero; applied {}",
                signed_seconds(*requested),
                signed_seconds(*applied)
            ),
            Message::AdjustmentOutOfRange(secs) => format!("Adjustment of {} seconds is out of range", secs),
            Message::NoTasks => "No current tasks. Use the 'create' command to create tasks.".to_string(),
            Message::ConfirmDeleteTask(name) => format!("Delete task '{}' and its recorded time?", name),
            Message::ConfirmResetTask(name) => format!("Reset task '{}' to zero?", name),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === DISPLAY MESSAGES ===
            Message::DisplayExitHint => "Enter 'q' to exit display".to_string(),
            Message::DisplayStopped => "Display stopped".to_string(),
            Message::TableHeaderName => "TASK NAME".to_string(),
            Message::TableHeaderStatus => "STATUS".to_string(),
            Message::TableHeaderTime => "TIME".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::ConfigNotFound => "No configuration file to delete".to_string(),
            Message::ConfigModuleHeader => "Task timer settings".to_string(),
            Message::PromptTasksFile => "Task file path (empty for default)".to_string(),
            Message::PromptRefreshInterval => "Display refresh interval (ms)".to_string(),
            Message::PromptConfirmDestructive => "Confirm before delete and reset?".to_string(),
            Message::RefreshIntervalTooShort(min) => format!("Refresh interval must be at least {} ms", min),
            Message::TasksFileLocation(path) => format!("Tasks file: {}", path),
        };
        f.write_str(&text)
    }
}
