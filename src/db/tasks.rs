//! CSV persistence for the task registry.
//!
//! The task file holds one row per task, in listing order:
//!
//! ```text
//! name,status,current_time,start_time,end_time,pre_pause_time
//! write docs,Paused,1736937000.5,1736935200.0,1736936100.25,
//! review,Off,1736937000.5,,,
//! ```
//!
//! Timestamps are fractional Unix epoch seconds. `current_time` is the
//! instant the file was written and is informational only. `pre_pause_time`
//! comes from older files that tracked the pre-pause total separately; on
//! load it is folded into the start reference and it is never written back.

use crate::libs::clock::{Clock, SystemClock};
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::registry::TaskRegistry;
use crate::libs::task::{TaskClock, TaskStatus};
use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const TASKS_FILE_NAME: &str = "tasks.csv";

/// Environment variable that points the tool at a specific task file.
pub const TASKS_FILE_ENV: &str = "TASK_TIMER_FILE";

/// One row of the task file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub name: String,
    pub status: TaskStatus,
    pub current_time: Option<f64>,
    pub start_time: Option<f64>,
    pub end_time: Option<f64>,
    pub pre_pause_time: Option<f64>,
}

fn to_epoch(at: DateTime<Utc>) -> f64 {
    at.timestamp_micros() as f64 / 1_000_000.0
}

fn from_epoch(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() {
        return None;
    }
    DateTime::from_timestamp_micros((secs * 1_000_000.0).round() as i64)
}

fn seconds(secs: f64) -> Option<Duration> {
    if !secs.is_finite() {
        return None;
    }
    Some(Duration::microseconds((secs * 1_000_000.0).round() as i64))
}

impl TaskRecord {
    pub fn from_task(task: &TaskClock, now: DateTime<Utc>) -> Self {
        TaskRecord {
            name: task.name().to_string(),
            status: task.status(),
            current_time: Some(to_epoch(now)),
            start_time: task.start_reference().map(to_epoch),
            end_time: task.paused_at().map(to_epoch),
            pre_pause_time: None,
        }
    }

    /// Converts the row back into a task, reconciling the legacy
    /// `pre_pause_time` column into the start reference.
    pub fn into_task(self) -> Result<TaskClock> {
        let timestamp = |value: Option<f64>, column: &str| -> Result<Option<DateTime<Utc>>> {
            value
                .map(|secs| from_epoch(secs).with_context(|| format!("{} is out of range: {}", column, secs)))
                .transpose()
        };

        let mut start = timestamp(self.start_time, "start_time")?;
        let paused = timestamp(self.end_time, "end_time")?;

        if let (Some(at), Some(banked)) = (start, self.pre_pause_time) {
            let banked = seconds(banked).with_context(|| format!("pre_pause_time is out of range: {}", banked))?;
            start = Some(
                at.checked_sub_signed(banked)
                    .context("pre_pause_time moves the start reference out of range")?,
            );
        }

        Ok(TaskClock::from_parts(&self.name, self.status, start, paused)?)
    }
}

/// Reads and writes the task file.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TaskStore { path: path.into() }
    }

    /// Resolves the task file location.
    ///
    /// Priority: the `TASK_TIMER_FILE` environment variable, then the
    /// `tasks_file` configuration entry, then `tasks.csv` in the
    /// application data directory.
    pub fn open() -> Result<Self> {
        if let Ok(path) = std::env::var(TASKS_FILE_ENV) {
            if !path.trim().is_empty() {
                return Ok(Self::new(path));
            }
        }

        if let Some(path) = Config::read()?.tasks_file {
            return Ok(Self::new(path));
        }

        Ok(Self::new(DataStorage::new().get_path(TASKS_FILE_NAME)?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<TaskRegistry> {
        self.load_with_clock(SystemClock)
    }

    /// Loads every row into a registry driven by `clock`.
    ///
    /// A missing file yields an empty registry. A malformed row, a row whose
    /// timestamps contradict its status, or a repeated name fails the load.
    pub fn load_with_clock<C: Clock>(&self, clock: C) -> Result<TaskRegistry<C>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "task file missing, starting empty");
            return Ok(TaskRegistry::with_clock(clock));
        }

        let mut reader = csv::Reader::from_path(&self.path)
            .with_context(|| format!("Failed to open task file {}", self.path.display()))?;

        let mut tasks = Vec::new();
        for (index, row) in reader.deserialize::<TaskRecord>().enumerate() {
            let line = index + 2;
            let record = row.with_context(|| format!("Malformed task record on line {}", line))?;
            let task = record
                .into_task()
                .with_context(|| format!("Invalid task record on line {}", line))?;
            tasks.push(task);
        }

        debug!(path = %self.path.display(), count = tasks.len(), "loaded tasks");
        Ok(TaskRegistry::from_tasks(tasks, clock)?)
    }

    /// Writes the registry, replacing the file only once the new contents
    /// are fully on disk. A failed save leaves no staging file behind.
    pub fn save<C: Clock>(&self, registry: &TaskRegistry<C>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let staging = self.path.with_extension("csv.tmp");
        let written = Self::write_rows(&staging, registry).and_then(|()| {
            fs::rename(&staging, &self.path)
                .with_context(|| format!("Failed to replace task file {}", self.path.display()))
        });
        if written.is_err() && staging.exists() {
            if let Err(err) = fs::remove_file(&staging) {
                debug!(path = %staging.display(), error = %err, "could not remove staging file");
            }
        }
        written?;

        debug!(path = %self.path.display(), count = registry.len(), "saved tasks");
        Ok(())
    }

    fn write_rows<C: Clock>(staging: &Path, registry: &TaskRegistry<C>) -> Result<()> {
        let now = registry.now();
        let mut writer = csv::Writer::from_path(staging)
            .with_context(|| format!("Failed to write task file {}", staging.display()))?;
        for task in registry.list() {
            writer.serialize(TaskRecord::from_task(task, now))?;
        }
        writer.flush()?;
        Ok(())
    }
}
