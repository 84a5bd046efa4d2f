//! Location of the application data directory.
//!
//! Holds `config.json` and, unless overridden, `tasks.csv`. The directory is
//! `TASK_TIMER_DATA_DIR` when set, otherwise `task-timer/` under the
//! platform's local data directory.

use anyhow::{Context, Result};
use std::env::consts::OS;
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "task-timer";

/// Environment variable that replaces the whole data directory.
pub const DATA_DIR_ENV: &str = "TASK_TIMER_DATA_DIR";

#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        Self::with_base_path(Self::resolve_base(OS, |key| std::env::var(key).ok()))
    }

    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self { base_path: base_path.into() }
    }

    /// Picks the data directory for `os`, reading variables through `lookup`.
    pub fn resolve_base(os: &str, lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
        if let Some(dir) = lookup(DATA_DIR_ENV).filter(|dir| !dir.trim().is_empty()) {
            return PathBuf::from(dir);
        }

        let home = || lookup("HOME").unwrap_or_else(|| ".".into());
        let root = match os {
            "windows" => PathBuf::from(lookup("LOCALAPPDATA").unwrap_or_else(|| ".".into())),
            "macos" => Path::new(&home()).join("Library").join("Application Support"),
            _ => Path::new(&home()).join(".local").join("share"),
        };
        root.join(APP_NAME)
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of `file_name` inside the data directory, creating the directory
    /// on first use.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)
                .with_context(|| format!("Failed to create data directory {}", self.base_path.display()))?;
        }
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
