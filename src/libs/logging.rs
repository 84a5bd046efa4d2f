use super::messages::macros::{is_debug_mode, DEBUG_ENV};
use tracing_subscriber::EnvFilter;

/// Installs the `tracing` subscriber when debug mode is on.
///
/// `RUST_LOG` takes precedence; with only `TASK_TIMER_DEBUG` set, this
/// crate logs at `debug` and everything else at `warn`. Outside debug mode
/// no subscriber is installed and log events are discarded.
pub fn init() {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,task_timer=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    tracing::debug!(env = DEBUG_ENV, "debug logging enabled");
}
