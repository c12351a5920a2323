use std::collections::HashMap;

use crate::{
    tracker::entities::LogEntry,
    utils::percentage::{count_percentage, Percentage},
};

use super::classifier::is_productive;

/// Amount of activities shown in rankings when nothing else is asked for.
pub const DEFAULT_TOP: usize = 8;

/// Ranking labels are cut to this many characters.
pub const LABEL_MAX_CHARS: usize = 24;

/// Totals over a whole collection, partitioned by [is_productive].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total_count: usize,
    pub productive_count: usize,
    pub distraction_count: usize,
    pub productive_minutes: u64,
    pub wasted_minutes: u64,
    pub total_minutes: u64,
    /// Share of distraction entries.
    pub heat: Percentage,
}

pub fn summarize(entries: &[LogEntry]) -> Summary {
    let mut summary = Summary {
        total_count: entries.len(),
        ..Summary::default()
    };

    for entry in entries {
        let minutes = entry.minutes as u64;
        summary.total_minutes += minutes;
        if is_productive(entry) {
            summary.productive_minutes += minutes;
        } else {
            summary.distraction_count += 1;
            summary.wasted_minutes += minutes;
        }
    }

    summary.productive_count = summary.total_count - summary.distraction_count;
    summary.heat = count_percentage(summary.distraction_count, summary.total_count);
    summary
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCount {
    pub label: String,
    pub count: usize,
}

impl ActivityCount {
    fn new(label: String) -> Self {
        Self { label, count: 0 }
    }
}

/// Most frequent distractions, see [top_by].
pub fn top_distractions(entries: &[LogEntry], n: usize) -> Vec<ActivityCount> {
    top_by(entries.iter().filter(|v| !is_productive(v)), n)
}

/// Most frequent productive activities, see [top_by].
pub fn top_productive(entries: &[LogEntry], n: usize) -> Vec<ActivityCount> {
    top_by(entries.iter().filter(|v| is_productive(v)), n)
}

/// Most frequent activities regardless of classification, see [top_by].
pub fn top_activities(entries: &[LogEntry], n: usize) -> Vec<ActivityCount> {
    top_by(entries.iter(), n)
}

/// Groups entries by lowercased `actual` text, counts the groups and returns the `n` largest.
/// Equal counts keep the order in which the activity was first seen. Labels are truncated to
/// [LABEL_MAX_CHARS] only after grouping, so two long activities sharing a prefix stay apart.
pub fn top_by<'a>(entries: impl Iterator<Item = &'a LogEntry>, n: usize) -> Vec<ActivityCount> {
    let mut index = HashMap::<String, usize>::new();
    let mut counts = Vec::<ActivityCount>::new();

    for entry in entries {
        let key = activity_key(entry);
        let position = *index.entry(key).or_insert_with_key(|key| {
            counts.push(ActivityCount::new(key.clone()));
            counts.len() - 1
        });
        counts[position].count += 1;
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(n);
    for activity in counts.iter_mut() {
        activity.label = truncate_label(&activity.label);
    }
    counts
}

fn activity_key(entry: &LogEntry) -> String {
    if entry.actual.is_empty() {
        "unknown".to_string()
    } else {
        entry.actual.to_lowercase()
    }
}

fn truncate_label(label: &str) -> String {
    label.chars().take(LABEL_MAX_CHARS).collect()
}
