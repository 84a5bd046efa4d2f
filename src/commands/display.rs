//! Live, self-refreshing view of task times.
//!
//! The screen is redrawn every `refresh_interval_ms` (see
//! [`Config`](crate::libs::config::Config)). The task file is re-read on each
//! tick so toggles made from another terminal show up immediately; this view
//! never writes it. Entering `q` or `c` followed by Enter, or pressing
//! Ctrl-C, leaves the view.

use crate::{
    db::tasks::TaskStore,
    libs::{config::Config, formatter::FormattedTask, messages::Message, view::View},
    msg_debug, msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;
use std::io::{BufRead, Write};
use tokio::sync::mpsc;

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

#[derive(Debug, Args)]
pub struct DisplayArgs {
    /// Task to show; all tasks when omitted
    name: Option<String>,
}

/// Whether a line typed into the live view asks to leave it.
pub fn is_exit_command(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "q" | "c" | "quit" | "exit")
}

/// Forwards stdin lines from a plain thread.
///
/// The thread is never joined; a read still blocked when the view closes
/// ends with the process instead of stalling runtime shutdown.
fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn draw(store: &TaskStore, only: Option<&str>) -> Result<()> {
    let registry = store.load()?;
    let now = registry.now();

    let rows: Vec<FormattedTask> = match only {
        Some(name) => vec![FormattedTask::new(registry.get(name)?, now)],
        None => registry.list().iter().map(|task| FormattedTask::new(task, now)).collect(),
    };

    print!("{}", CLEAR_SCREEN);
    msg_print!(Message::DisplayExitHint);
    if rows.is_empty() {
        msg_info!(Message::NoTasks);
    } else {
        View::tasks(&rows);
    }
    std::io::stdout().flush()?;
    Ok(())
}

pub async fn cmd(args: DisplayArgs) -> Result<()> {
    let config = Config::read()?;
    let store = TaskStore::open()?;
    let only = args.name.as_deref();

    // Fail on an unknown task before taking over the screen.
    if let Some(name) = only {
        store.load()?.get(name)?;
    }

    let mut ticker = tokio::time::interval(config.refresh_interval());
    let mut input = spawn_stdin_reader();
    let mut stdin_open = true;

    loop {
        tokio::select! {
            _ = ticker.tick() => draw(&store, only)?,
            line = input.recv(), if stdin_open => match line {
                Some(line) if is_exit_command(&line) => break,
                Some(line) => msg_debug!(format!("ignoring display input '{}'", line.trim())),
                None => stdin_open = false,
            },
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    msg_print!(Message::DisplayStopped);
    Ok(())
}
