//! Start, pause or resume a task.
//!
//! This is the only command that moves a task through its states. The next
//! state depends on the current one:
//!
//! | Current | After toggle |
//! |---|---|
//! | Off | Active (started from zero) |
//! | Active | Paused (time frozen) |
//! | Paused | Active (continues from the frozen time) |

use crate::{
    db::tasks::TaskStore,
    libs::{formatter::render, messages::Message, task::Transition},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// Task to toggle
    #[arg(required = true)]
    name: String,
}

pub fn cmd(args: ToggleArgs) -> Result<()> {
    let store = TaskStore::open()?;
    let mut registry = store.load()?;

    let transition = registry.toggle(&args.name)?;
    store.save(&registry)?;

    let name = registry.get(&args.name)?.name().to_string();
    let time = render(&registry.elapsed(&name)?);
    let message = match transition {
        Transition::Started => Message::TaskStarted(name),
        Transition::Paused => Message::TaskPaused(name, time),
        Transition::Resumed => Message::TaskResumed(name, time),
    };
    msg_success!(message);
    Ok(())
}
