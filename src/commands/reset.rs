use super::confirmed;
use crate::{
    db::tasks::TaskStore,
    libs::messages::Message,
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ResetArgs {
    /// Task to reset
    name: String,

    /// Skip confirmation prompt
    #[arg(long, short)]
    force: bool,
}

pub fn cmd(args: ResetArgs) -> Result<()> {
    let store = TaskStore::open()?;
    let mut registry = store.load()?;

    let name = registry.get(&args.name)?.name().to_string();
    if !confirmed(Message::ConfirmResetTask(name.clone()), args.force)? {
        return Ok(());
    }

    registry.reset(&name)?;
    store.save(&registry)?;

    msg_success!(Message::TaskReset(name));
    Ok(())
}
