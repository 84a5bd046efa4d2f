use super::confirmed;
use crate::{
    db::tasks::TaskStore,
    libs::messages::Message,
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task to delete
    name: String,

    /// Skip confirmation prompt
    #[arg(long, short)]
    force: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let store = TaskStore::open()?;
    let mut registry = store.load()?;

    // Resolve first so an unknown name fails before any prompt.
    let name = registry.get(&args.name)?.name().to_string();
    if !confirmed(Message::ConfirmDeleteTask(name.clone()), args.force)? {
        return Ok(());
    }

    registry.delete(&name)?;
    store.save(&registry)?;

    msg_success!(Message::TaskDeleted(name));
    Ok(())
}
