use chrono::{DateTime, Utc};

use crate::{
    analysis::classifier::is_productive, feedback::label::entry_label,
    tracker::entities::LogEntry,
};

/// Shown instead of minutes when none were recorded.
pub const NO_MINUTES: &str = "—";

/// Everything a renderer needs to show one entry.
#[derive(Debug, PartialEq, Eq)]
pub struct EntryRow<'a> {
    pub entry: &'a LogEntry,
    pub productive: bool,
    pub label: &'static str,
    pub minutes: String,
}

impl<'a> EntryRow<'a> {
    pub fn new(entry: &'a LogEntry) -> Self {
        Self {
            entry,
            productive: is_productive(entry),
            label: entry_label(entry),
            minutes: format_minutes(entry.minutes),
        }
    }
}

pub fn format_minutes(minutes: u32) -> String {
    if minutes == 0 {
        NO_MINUTES.to_string()
    } else {
        format!("{minutes}m")
    }
}

/// Rows newest first.
pub fn rows(entries: &[LogEntry]) -> impl Iterator<Item = EntryRow<'_>> {
    entries.iter().rev().map(EntryRow::new)
}

/// Half open time window entries are filtered by before being shown or aggregated.
#[derive(Debug, Clone, Copy)]
pub struct EntryRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl EntryRange {
    pub const ALL: EntryRange = EntryRange {
        start: None,
        end: None,
    };

    pub fn contains(&self, entry: &LogEntry) -> bool {
        self.start.map_or(true, |start| entry.timestamp >= start)
            && self.end.map_or(true, |end| entry.timestamp < end)
    }

    pub fn filter(&self, entries: &[LogEntry]) -> Vec<LogEntry> {
        entries.iter().filter(|v| self.contains(v)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use crate::tracker::entities::LogEntry;

    use super::{rows, EntryRange, NO_MINUTES};

    fn entry(actual: &str, minutes: u32, hour: u32) -> LogEntry {
        LogEntry {
            intended: "write report".into(),
            actual: actual.into(),
            minutes,
            timestamp: Utc.with_ymd_and_hms(2025, 3, 15, hour, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_rows_are_newest_first() {
        let entries = vec![
            entry("write report", 30, 9),
            entry("instagram", 0, 10),
            entry("nap", 15, 11),
        ];
        let rows = rows(&entries).collect::<Vec<_>>();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].entry.actual, "nap");
        assert_eq!(rows[0].minutes, "15m");
        assert_eq!(rows[0].label, "😴");
        assert!(!rows[0].productive);

        assert_eq!(rows[1].minutes, NO_MINUTES);
        assert_eq!(rows[1].label, "📱");

        assert!(rows[2].productive);
        assert_eq!(rows[2].label, "📝");
    }

    #[test]
    fn test_range_is_half_open() {
        let entries = vec![entry("a", 1, 9), entry("b", 1, 10), entry("c", 1, 11)];
        let range = EntryRange {
            start: Some(Utc.with_ymd_and_hms(2025, 3, 15, 10, 0, 0).unwrap()),
            end: Some(Utc.with_ymd_and_hms(2025, 3, 15, 11, 0, 0).unwrap()),
        };
        let filtered = range.filter(&entries);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].actual, "b");

        let open_end = EntryRange {
            start: Some(entries[1].timestamp - Duration::minutes(1)),
            end: None,
        };
        assert_eq!(open_end.filter(&entries).len(), 2);
        assert_eq!(EntryRange::ALL.filter(&entries), entries);
    }
}
