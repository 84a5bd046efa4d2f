//! Command-line surface of the task timer.
//!
//! Every mutating command follows the same cycle: open the task file, load it
//! into a [`TaskRegistry`](crate::libs::registry::TaskRegistry), apply one
//! operation, and save. A failed operation returns before the save, so the
//! file on disk is never partially updated.

pub mod adjust;
pub mod create;
pub mod delete;
pub mod display;
pub mod init;
pub mod list;
pub mod rename;
pub mod reset;
pub mod toggle;

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_info;
use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Interactive configuration setup")]
    Init(init::InitArgs),
    #[command(about = "Create a task")]
    Create(create::CreateArgs),
    #[command(about = "Start, pause or resume a task")]
    Toggle(toggle::ToggleArgs),
    #[command(about = "List all tasks with their status and time")]
    List(list::ListArgs),
    #[command(about = "Show a live-updating view of one or all tasks")]
    Display(display::DisplayArgs),
    #[command(about = "Rename a task")]
    Rename(rename::RenameArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Add or remove seconds from a paused task")]
    Adjust(adjust::AdjustArgs),
    #[command(about = "Reset a task to zero")]
    Reset(reset::ResetArgs),
}

#[derive(Debug, Parser)]
#[command(name = "task-timer", author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Create(args) => create::cmd(args),
            Commands::Toggle(args) => toggle::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Display(args) => display::cmd(args).await,
            Commands::Rename(args) => rename::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Adjust(args) => adjust::cmd(args),
            Commands::Reset(args) => reset::cmd(args),
        }
    }
}

/// Asks before a destructive change unless `force` is set or confirmations
/// are disabled in the configuration. Prints the cancellation notice itself.
pub(crate) fn confirmed(prompt: Message, force: bool) -> Result<bool> {
    if force || !Config::read()?.confirm_destructive {
        return Ok(true);
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(false)
        .interact()?;

    if !confirmed {
        msg_info!(Message::OperationCancelled);
    }
    Ok(confirmed)
}
