//! Timestamp label shown above every entry.
//!
//! The label is part of the measured text, so the same formatter must feed
//! both pagination and rendering.

use crate::model::entry::{Entry, EpochMillis};
use chrono::{DateTime, Datelike, FixedOffset, Local, Offset, Utc, Weekday};

/// Formats `YYYY/MM/DD(曜) HH:MM` in a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampLabel {
    offset: FixedOffset,
}

impl Default for TimestampLabel {
    fn default() -> Self {
        Self::utc()
    }
}

impl TimestampLabel {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn utc() -> Self {
        Self::new(Utc.fix())
    }

    /// Uses the machine's current local offset.
    pub fn local() -> Self {
        Self::new(*Local::now().offset())
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Label for one instant; out-of-range instants fall back to the raw number.
    pub fn format(&self, timestamp: EpochMillis) -> String {
        let Some(instant) = DateTime::from_timestamp_millis(timestamp) else {
            return timestamp.to_string();
        };
        let local = instant.with_timezone(&self.offset);
        format!(
            "{}({}) {}",
            local.format("%Y/%m/%d"),
            weekday_short(local.weekday()),
            local.format("%H:%M")
        )
    }

    /// Text charged for one entry: label line, then the note body.
    pub fn measure_text(&self, entry: &Entry) -> String {
        format!("{}\n{}", self.format(entry.timestamp), entry.text)
    }
}

fn weekday_short(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "月",
        Weekday::Tue => "火",
        Weekday::Wed => "水",
        Weekday::Thu => "木",
        Weekday::Fri => "金",
        Weekday::Sat => "土",
        Weekday::Sun => "日",
    }
}
