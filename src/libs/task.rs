//! Timing state machine for a single named task.
//!
//! A [`TaskClock`] never stores a running total. Instead it keeps a *virtual
//! start*: the instant at which the task would have had zero elapsed time had
//! it run without interruption. Elapsed time is then always a subtraction:
//!
//! ```text
//! Off     ->  0
//! Active  ->  now       - start_reference
//! Paused  ->  paused_at - start_reference
//! ```
//!
//! Resuming shifts the virtual start forward by the idle duration, so time
//! spent paused never counts.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use task_timer::libs::task::{TaskClock, TaskStatus, Transition};
//!
//! let t0 = Utc::now();
//! let mut task = TaskClock::new("write docs");
//!
//! assert_eq!(task.toggle(t0), Transition::Started);
//! assert_eq!(task.toggle(t0 + Duration::seconds(30)), Transition::Paused);
//! assert_eq!(task.status(), TaskStatus::Paused);
//! assert_eq!(task.elapsed(t0 + Duration::hours(1)), Duration::seconds(30));
//! ```

use super::error::TimerError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Off,
    Active,
    Paused,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TaskStatus::Off => "Off",
            TaskStatus::Active => "Active",
            TaskStatus::Paused => "Paused",
        };
        f.write_str(label)
    }
}

/// The transition a [`TaskClock::toggle`] call performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Started,
    Paused,
    Resumed,
}

/// Timing state of one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskClock {
    name: String,
    status: TaskStatus,
    start_reference: Option<DateTime<Utc>>,
    paused_at: Option<DateTime<Utc>>,
}

impl TaskClock {
    /// Creates a task in the `Off` state with no recorded time.
    pub fn new(name: &str) -> Self {
        TaskClock {
            name: name.to_string(),
            status: TaskStatus::Off,
            start_reference: None,
            paused_at: None,
        }
    }

    /// Rebuilds a task from stored fields, rejecting combinations that break
    /// the state invariants.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::InvalidOperation`] when:
    /// - an `Off` task carries timestamps
    /// - an `Active` task lacks a start or has a pause timestamp
    /// - a `Paused` task lacks either timestamp or was paused before it started
    pub fn from_parts(
        name: &str,
        status: TaskStatus,
        start_reference: Option<DateTime<Utc>>,
        paused_at: Option<DateTime<Utc>>,
    ) -> Result<Self, TimerError> {
        match (status, start_reference, paused_at) {
            (TaskStatus::Off, None, None) => {}
            (TaskStatus::Active, Some(_), None) => {}
            (TaskStatus::Paused, Some(start), Some(paused)) if paused >= start => {}
            _ => {
                return Err(TimerError::invalid(
                    name,
                    format!("stored timestamps do not match status {}", status),
                ))
            }
        }

        Ok(TaskClock {
            name: name.to_string(),
            status,
            start_reference,
            paused_at,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    /// The virtual start instant, if the task has any recorded time.
    pub fn start_reference(&self) -> Option<DateTime<Utc>> {
        self.start_reference
    }

    pub fn paused_at(&self) -> Option<DateTime<Utc>> {
        self.paused_at
    }

    /// Total active time as of `now`. Never negative and never mutates.
    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        match (self.status, self.start_reference, self.paused_at) {
            (TaskStatus::Active, Some(start), _) => (now - start).max(Duration::zero()),
            (TaskStatus::Paused, Some(start), Some(paused)) => paused - start,
            _ => Duration::zero(),
        }
    }

    /// Advances the task to its natural next state:
    /// `Off -> Active`, `Active -> Paused`, `Paused -> Active`.
    pub fn toggle(&mut self, now: DateTime<Utc>) -> Transition {
        match self.status {
            TaskStatus::Off => self.start(now),
            TaskStatus::Active => self.pause(now),
            TaskStatus::Paused => self.resume(now),
        }
    }

    fn start(&mut self, now: DateTime<Utc>) -> Transition {
        self.start_reference = Some(now);
        self.paused_at = None;
        self.status = TaskStatus::Active;
        Transition::Started
    }

    fn pause(&mut self, now: DateTime<Utc>) -> Transition {
        self.paused_at = Some(now);
        self.status = TaskStatus::Paused;
        Transition::Paused
    }

    fn resume(&mut self, now: DateTime<Utc>) -> Transition {
        let banked = self.elapsed(now);
        self.start_reference = Some(now - banked);
        self.paused_at = None;
        self.status = TaskStatus::Active;
        Transition::Resumed
    }

    /// Returns the task to `Off` and discards all recorded time.
    pub fn reset(&mut self) {
        self.status = TaskStatus::Off;
        self.start_reference = None;
        self.paused_at = None;
    }

    /// Adds `delta` (possibly negative) to the recorded time of a paused task.
    ///
    /// The result is clamped at zero, so the returned duration is the change
    /// actually applied: a task with 10s adjusted by -100s ends at 0s and
    /// reports -10s.
    ///
    /// # Errors
    ///
    /// [`TimerError::InvalidOperation`] if the task is running or has no
    /// recorded time (`Off`). The task is left untouched.
    pub fn adjust(&mut self, delta: Duration) -> Result<Duration, TimerError> {
        let (start, paused) = match (self.status, self.start_reference, self.paused_at) {
            (TaskStatus::Paused, Some(start), Some(paused)) => (start, paused),
            (TaskStatus::Active, ..) => {
                return Err(TimerError::invalid(&self.name, "pause the task before adjusting its time"));
            }
            _ => {
                return Err(TimerError::invalid(&self.name, "task has no recorded time to adjust"));
            }
        };

        let current = paused - start;
        let target = current
            .checked_add(&delta)
            .ok_or_else(|| TimerError::invalid(&self.name, "adjustment is out of range"))?
            .max(Duration::zero());
        let shifted = paused
            .checked_sub_signed(target)
            .ok_or_else(|| TimerError::invalid(&self.name, "adjustment is out of range"))?;
        self.start_reference = Some(shifted);

        Ok(target - current)
    }
}
