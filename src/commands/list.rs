use crate::{
    db::tasks::TaskStore,
    libs::{formatter::FormattedTask, messages::Message, view::View},
    msg_debug, msg_info,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print the listing as JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let store = TaskStore::open()?;
    let registry = store.load()?;
    msg_debug!(Message::TasksFileLocation(store.path().display().to_string()));

    // One instant for every row keeps running tasks comparable.
    let now = registry.now();
    let rows: Vec<FormattedTask> = registry.list().iter().map(|task| FormattedTask::new(task, now)).collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        msg_info!(Message::NoTasks);
        return Ok(());
    }

    View::tasks(&rows);
    Ok(())
}
