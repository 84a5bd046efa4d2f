//! # Task Timer
//!
//! A command-line utility for tracking the time spent on named tasks.
//!
//! ## Features
//!
//! - **Task Stopwatches**: Start, pause and resume any number of named tasks
//! - **Exact Accounting**: Paused time never counts, across any number of cycles
//! - **Manual Corrections**: Add or remove time from a paused task
//! - **Live Display**: Self-refreshing view of running timers
//! - **Plain Storage**: Tasks persist in a CSV file between invocations
//!
//! ## Usage
//!
//! ```rust,no_run
//! use task_timer::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
