//! Time source for review ids and display dates.

use chrono::{DateTime, Local, TimeZone, Utc};
use std::cell::Cell;
use std::fmt::Display;

pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;

    /// Today's date the way reviews display it, e.g. "October 18, 2026".
    fn display_date(&self) -> String;
}

/// Long en-US date: full month name, day without padding, four-digit year.
pub fn format_display_date<Tz>(date: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    date.format("%B %-d, %Y").to_string()
}

/// Wall clock in the viewer's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn display_date(&self) -> String {
        format_display_date(&Local::now())
    }
}

/// A clock that only moves when told to. Dates are rendered in UTC.
#[derive(Debug, Default)]
pub struct FixedClock {
    millis: Cell<i64>,
}

impl FixedClock {
    pub fn new(millis: i64) -> Self {
        Self {
            millis: Cell::new(millis),
        }
    }

    pub fn advance(&self, millis: i64) {
        self.millis.set(self.millis.get() + millis);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis.get()
    }

    fn display_date(&self) -> String {
        DateTime::<Utc>::from_timestamp_millis(self.millis.get())
            .map(|date| format_display_date(&date))
            .unwrap_or_default()
    }
}

/// Next review id: the current time, bumped past `last_id` so ids stay
/// strictly increasing even when two reviews land in the same millisecond.
pub fn next_id(now_millis: i64, last_id: Option<i64>) -> i64 {
    match last_id {
        Some(last) if now_millis <= last => last + 1,
        _ => now_millis,
    }
}
