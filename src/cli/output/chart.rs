use crate::analysis::aggregate::{ActivityCount, LABEL_MAX_CHARS};
use crate::utils::percentage::Percentage;

/// Width of the longest bar in a chart.
pub const BAR_WIDTH: usize = 30;

/// Draws a horizontal bar chart, one line per activity. Bars are scaled to the largest count.
pub fn bar_chart(activities: &[ActivityCount]) -> Vec<String> {
    let Some(max) = activities.iter().map(|v| v.count).max() else {
        return vec![];
    };

    activities
        .iter()
        .map(|activity| {
            let width = (activity.count * BAR_WIDTH).div_ceil(max.max(1));
            format!(
                "{:<label_width$}  {} {}",
                activity.label,
                "█".repeat(width),
                activity.count,
                label_width = LABEL_MAX_CHARS,
            )
        })
        .collect()
}

/// A fixed width gauge filled up to `heat`.
pub fn heat_bar(heat: Percentage) -> String {
    let filled = *heat as usize * BAR_WIDTH / 100;
    format!("[{}{}] {heat}", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}
