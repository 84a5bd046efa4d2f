//! The set of tasks known to one invocation of the tool.
//!
//! A [`TaskRegistry`] is owned by the command being run: it is loaded from the
//! task file, receives exactly one mutation, and is written back. Names are
//! unique ignoring case and surrounding whitespace; the case a task was
//! created with is kept for display.

use super::clock::{Clock, SystemClock};
use super::error::TimerError;
use super::task::{TaskClock, Transition};
use chrono::{DateTime, Duration, Utc};
use tracing::debug;

fn key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Insertion-ordered tasks plus the clock every operation reads "now" from.
#[derive(Debug)]
pub struct TaskRegistry<C: Clock = SystemClock> {
    tasks: Vec<TaskClock>,
    clock: C,
}

impl TaskRegistry<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TaskRegistry<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TaskRegistry<C> {
    pub fn with_clock(clock: C) -> Self {
        TaskRegistry { tasks: Vec::new(), clock }
    }

    /// Builds a registry from already-loaded tasks, keeping their order.
    ///
    /// # Errors
    ///
    /// [`TimerError::DuplicateName`] if two tasks share a name.
    pub fn from_tasks(tasks: Vec<TaskClock>, clock: C) -> Result<Self, TimerError> {
        let mut registry = Self::with_clock(clock);
        for task in tasks {
            if registry.position(task.name()).is_some() {
                return Err(TimerError::DuplicateName(task.name().to_string()));
            }
            registry.tasks.push(task);
        }
        Ok(registry)
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn position(&self, name: &str) -> Option<usize> {
        let wanted = key(name);
        self.tasks.iter().position(|task| key(task.name()) == wanted)
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut TaskClock, TimerError> {
        match self.position(name) {
            Some(index) => Ok(&mut self.tasks[index]),
            None => Err(TimerError::NotFound(name.trim().to_string())),
        }
    }

    /// Adds a new task in the `Off` state.
    ///
    /// # Errors
    ///
    /// - [`TimerError::InvalidOperation`] for a blank name
    /// - [`TimerError::DuplicateName`] if the name is taken
    pub fn create(&mut self, name: &str) -> Result<&TaskClock, TimerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TimerError::invalid(name, "task name must not be empty"));
        }
        if self.position(name).is_some() {
            return Err(TimerError::DuplicateName(name.to_string()));
        }

        debug!(task = name, "creating task");
        self.tasks.push(TaskClock::new(name));
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    pub fn find(&self, name: &str) -> Option<&TaskClock> {
        self.position(name).map(|index| &self.tasks[index])
    }

    /// Like [`TaskRegistry::find`], but a missing task is an error.
    pub fn get(&self, name: &str) -> Result<&TaskClock, TimerError> {
        self.find(name).ok_or_else(|| TimerError::NotFound(name.trim().to_string()))
    }

    /// Renames a task in place, keeping its timing state and position.
    ///
    /// Changing only the letter case of a task's own name is allowed.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<(), TimerError> {
        let new = new.trim();
        if new.is_empty() {
            return Err(TimerError::invalid(old.trim(), "task name must not be empty"));
        }

        let index = self.position(old).ok_or_else(|| TimerError::NotFound(old.trim().to_string()))?;
        if let Some(existing) = self.position(new) {
            if existing != index {
                return Err(TimerError::DuplicateName(new.to_string()));
            }
        }

        debug!(from = old, to = new, "renaming task");
        self.tasks[index].set_name(new);
        Ok(())
    }

    /// Removes a task and hands it back.
    pub fn delete(&mut self, name: &str) -> Result<TaskClock, TimerError> {
        let index = self.position(name).ok_or_else(|| TimerError::NotFound(name.trim().to_string()))?;
        debug!(task = name, "deleting task");
        Ok(self.tasks.remove(index))
    }

    /// All tasks in creation order.
    pub fn list(&self) -> &[TaskClock] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn toggle(&mut self, name: &str) -> Result<Transition, TimerError> {
        let now = self.clock.now();
        let task = self.get_mut(name)?;
        let transition = task.toggle(now);
        debug!(task = task.name(), ?transition, "toggled task");
        Ok(transition)
    }

    /// Adjusts a paused task's time; returns the delta actually applied.
    pub fn adjust(&mut self, name: &str, delta: Duration) -> Result<Duration, TimerError> {
        let task = self.get_mut(name)?;
        let applied = task.adjust(delta)?;
        debug!(
            task = task.name(),
            requested = delta.num_seconds(),
            applied = applied.num_seconds(),
            "adjusted task time"
        );
        Ok(applied)
    }

    pub fn reset(&mut self, name: &str) -> Result<(), TimerError> {
        let task = self.get_mut(name)?;
        task.reset();
        debug!(task = task.name(), "reset task");
        Ok(())
    }

    pub fn elapsed(&self, name: &str) -> Result<Duration, TimerError> {
        let now = self.clock.now();
        Ok(self.get(name)?.elapsed(now))
    }
}
