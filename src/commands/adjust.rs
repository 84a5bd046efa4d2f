//! Manual correction of a task's recorded time.
//!
//! Only paused tasks can be adjusted; a running task has to be toggled to
//! `Paused` first. The recorded time never drops below zero, so a large
//! negative adjustment is clamped and the applied amount is reported.

use crate::{
    db::tasks::TaskStore,
    libs::{formatter::render, messages::Message},
    msg_bail_anyhow, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::Duration;
use clap::Args;

#[derive(Debug, Args)]
pub struct AdjustArgs {
    /// Task to adjust
    name: String,

    /// Seconds to add; negative values remove time
    #[arg(allow_negative_numbers = true)]
    seconds: i64,
}

pub fn cmd(args: AdjustArgs) -> Result<()> {
    let Some(delta) = Duration::try_seconds(args.seconds) else {
        msg_bail_anyhow!(Message::AdjustmentOutOfRange(args.seconds));
    };

    let store = TaskStore::open()?;
    let mut registry = store.load()?;

    let applied = registry.adjust(&args.name, delta)?;
    store.save(&registry)?;

    if applied != delta {
        msg_warning!(Message::AdjustmentClamped {
            requested: args.seconds,
            applied: applied.num_seconds(),
        });
    }

    let task = registry.get(&args.name)?;
    msg_success!(Message::TimeAdjusted {
        task: task.name().to_string(),
        applied: applied.num_seconds(),
        time: render(&task.elapsed(registry.now())),
    });
    Ok(())
}
