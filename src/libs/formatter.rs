//! Elapsed-time formatting for task listings.
//!
//! ## Format Specifications
//!
//! The representation grows with the duration:
//! - up to and including one minute: plain seconds, rounded (`"42"`, `"60"`)
//! - above one minute and below one hour: `MM:SS` (`"01:01"`)
//! - one hour and above: `HH:MM:SS` (`"01:00:00"`); hours do not wrap at 24
//!
//! The first bucket is inclusive of 60 seconds on purpose, so a task at
//! exactly one minute still shows `"60"`.
//!
//! ## Examples
//!
//! ```rust
//! use chrono::Duration;
//! use task_timer::libs::formatter::render;
//!
//! assert_eq!(render(&Duration::seconds(60)), "60");
//! assert_eq!(render(&Duration::seconds(61)), "01:01");
//! assert_eq!(render(&Duration::seconds(3600)), "01:00:00");
//! ```

use super::task::TaskClock;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Renders an elapsed duration using the bucketed format described above.
///
/// Negative durations render as `"0"`. Sub-second precision is rounded in the
/// seconds bucket and truncated in the clock-style buckets.
pub fn render(elapsed: &Duration) -> String {
    if *elapsed <= Duration::zero() {
        return "0".to_string();
    }

    if *elapsed <= Duration::seconds(60) {
        // Bounded by one minute, so microseconds cannot overflow.
        let micros = elapsed.num_microseconds().unwrap_or_default();
        return ((micros + 500_000) / 1_000_000).to_string();
    }

    let secs = elapsed.num_seconds();
    let (hours, mins, secs) = (secs / 3600, (secs % 3600) / 60, secs % 60);

    if hours == 0 {
        format!("{:02}:{:02}", mins, secs)
    } else {
        format!("{:02}:{:02}:{:02}", hours, mins, secs)
    }
}

/// Display-ready snapshot of a task, taken at a single instant.
///
/// Every row of a listing is built from the same `now`, so tasks shown side
/// by side are consistent with each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedTask {
    pub name: String,
    pub status: String,
    pub time: String,
}

impl FormattedTask {
    pub fn new(task: &TaskClock, now: DateTime<Utc>) -> Self {
        FormattedTask {
            name: task.name().to_string(),
            status: task.status().to_string(),
            time: render(&task.elapsed(now)),
        }
    }
}
