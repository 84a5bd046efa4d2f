//! Core library modules for the task timer.
//!
//! - **Timing**: [`task`] (per-task state machine), [`registry`] (the task set),
//!   [`clock`] (time sources), [`error`] (failure kinds)
//! - **Presentation**: [`formatter`] (elapsed-time rendering), [`view`]
//!   (tables), [`messages`] (user-facing text and output macros)
//! - **Environment**: [`config`], [`data_storage`], [`logging`]
//!
//! ## Usage
//!
//! ```rust
//! use task_timer::libs::clock::ManualClock;
//! use task_timer::libs::registry::TaskRegistry;
//! use task_timer::libs::formatter::render;
//! use chrono::Duration;
//!
//! let clock = ManualClock::at_epoch_seconds(1_700_000_000);
//! let mut registry = TaskRegistry::with_clock(&clock);
//! registry.create("Write docs")?;
//! registry.toggle("write docs")?;
//! clock.advance(Duration::seconds(90));
//! assert_eq!(render(&registry.elapsed("WRITE DOCS")?), "01:30");
//! # Ok::<(), task_timer::libs::error::TimerError>(())
//! ```

pub mod clock;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod messages;
pub mod registry;
pub mod task;
pub mod view;
