use ansi_term::{Colour, Style};
use anyhow::Result;

use crate::{
    analysis::aggregate::{summarize, top_activities, top_distractions, top_productive, ActivityCount},
    tracker::{storage::KeyValueStore, Tracker},
    utils::time::format_moment,
};

use super::{
    entry::verdict,
    output::{
        chart::{bar_chart, heat_bar},
        rows::rows,
    },
    range::RangeArgs,
};

/// Command to process `list`. Prints entries newest first.
pub fn process_list_command<S: KeyValueStore>(
    tracker: &Tracker<S>,
    limit: Option<usize>,
    range: RangeArgs,
) -> Result<()> {
    let entries = range.resolve()?.filter(tracker.entries());
    if entries.is_empty() {
        println!("No logs yet.");
        return Ok(());
    }

    for row in rows(&entries).take(limit.unwrap_or(usize::MAX)) {
        println!(
            "{}  {}\t{}",
            row.label,
            Style::new().bold().paint(row.entry.actual.as_str()),
            verdict(row.productive),
        );
        println!(
            "    instead of {} • {}\t{}",
            Style::new().bold().paint(row.entry.intended.as_str()),
            row.minutes,
            format_moment(row.entry.timestamp)
        );
    }
    Ok(())
}

/// Command to process `stats`. Aggregates are computed over entries in the requested range.
pub fn process_stats_command<S: KeyValueStore>(
    tracker: &Tracker<S>,
    top: usize,
    range: RangeArgs,
) -> Result<()> {
    let entries = range.resolve()?.filter(tracker.entries());
    let summary = summarize(&entries);

    println!("Logs\t\t{}", summary.total_count);
    println!("Total minutes\t{}", summary.total_minutes);
    println!(
        "Productive\t{} ({}m)",
        Colour::Green.paint(summary.productive_count.to_string()),
        summary.productive_minutes
    );
    println!(
        "Distractions\t{} ({}m wasted)",
        Colour::Red.paint(summary.distraction_count.to_string()),
        summary.wasted_minutes
    );
    println!("Heat\t\t{}", heat_bar(summary.heat));

    print_ranking("Top activities", &top_activities(&entries, top));
    print_ranking("Top distractions", &top_distractions(&entries, top));
    print_ranking("Top productive", &top_productive(&entries, top));
    Ok(())
}

fn print_ranking(title: &str, ranking: &[ActivityCount]) {
    if ranking.is_empty() {
        return;
    }
    println!();
    println!("{}", Style::new().bold().paint(title));
    for line in bar_chart(ranking) {
        println!("{line}");
    }
}
