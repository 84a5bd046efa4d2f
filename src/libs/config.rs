//! Configuration for the task timer.
//!
//! Settings are stored as pretty-printed JSON in the application data
//! directory:
//! - **Windows**: `%LOCALAPPDATA%\task-timer\config.json`
//! - **macOS**: `~/Library/Application Support/task-timer/config.json`
//! - **Linux**: `~/.local/share/task-timer/config.json`
//!
//! A missing file is not an error; every field has a default, so the tool
//! works with no setup at all.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use task_timer::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.refresh_interval_ms = 500;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Lower bound for the live display tick.
pub const MIN_REFRESH_INTERVAL_MS: u64 = 100;

fn default_refresh_interval_ms() -> u64 {
    1000
}

fn default_confirm_destructive() -> bool {
    true
}

/// Application settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Task file location. When unset the file lives next to this config.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks_file: Option<PathBuf>,

    /// How often `display` redraws, in milliseconds.
    #[serde(default = "default_refresh_interval_ms")]
    pub refresh_interval_ms: u64,

    /// Ask before `delete` and `reset` discard recorded time.
    #[serde(default = "default_confirm_destructive")]
    pub confirm_destructive: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tasks_file: None,
            refresh_interval_ms: default_refresh_interval_ms(),
            confirm_destructive: default_confirm_destructive(),
        }
    }
}

impl Config {
    /// Loads the configuration, falling back to defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` if there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Refresh interval clamped to [`MIN_REFRESH_INTERVAL_MS`].
    pub fn refresh_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.refresh_interval_ms.max(MIN_REFRESH_INTERVAL_MS))
    }

    /// Interactive setup wizard. Starts from the current settings and returns
    /// the edited copy without saving it.
    pub fn init() -> Result<Self> {
        let current = Config::read()?;
        msg_print!(Message::ConfigModuleHeader, true);

        let tasks_file: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTasksFile.to_string())
            .default(
                current
                    .tasks_file
                    .as_ref()
                    .map(|path| path.display().to_string())
                    .unwrap_or_default(),
            )
            .allow_empty(true)
            .interact_text()?;

        let refresh_interval_ms: u64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptRefreshInterval.to_string())
            .default(current.refresh_interval_ms)
            .validate_with(|input: &u64| -> Result<(), String> {
                if *input >= MIN_REFRESH_INTERVAL_MS {
                    Ok(())
                } else {
                    Err(Message::RefreshIntervalTooShort(MIN_REFRESH_INTERVAL_MS).to_string())
                }
            })
            .interact_text()?;

        let confirm_destructive = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptConfirmDestructive.to_string())
            .default(current.confirm_destructive)
            .interact()?;

        let tasks_file = tasks_file.trim();
        Ok(Config {
            tasks_file: (!tasks_file.is_empty()).then(|| PathBuf::from(tasks_file)),
            refresh_interval_ms,
            confirm_destructive,
        })
    }
}
