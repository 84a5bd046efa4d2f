use crate::{
    db::tasks::TaskStore,
    libs::messages::Message,
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct RenameArgs {
    /// Current task name
    name: String,

    /// New task name
    new_name: String,
}

pub fn cmd(args: RenameArgs) -> Result<()> {
    let store = TaskStore::open()?;
    let mut registry = store.load()?;

    let old = registry.get(&args.name)?.name().to_string();
    registry.rename(&args.name, &args.new_name)?;
    store.save(&registry)?;

    msg_success!(Message::TaskRenamed(old, args.new_name.trim().to_string()));
    Ok(())
}
