use crate::{
    db::tasks::TaskStore,
    libs::messages::Message,
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Task name, unique ignoring case
    #[arg(required = true)]
    name: String,
}

pub fn cmd(args: CreateArgs) -> Result<()> {
    let store = TaskStore::open()?;
    let mut registry = store.load()?;

    let name = registry.create(&args.name)?.name().to_string();
    store.save(&registry)?;

    msg_success!(Message::TaskCreated(name));
    Ok(())
}
