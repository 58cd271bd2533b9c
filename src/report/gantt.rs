/*!
 * Gantt Chart
 * ASCII rendering of a run's timeline
 */

use crate::scheduler::{Occupant, TimelineSegment};
use std::fmt::Write;

/// Columns drawn per time unit
const CELL_WIDTH: usize = 3;

/// Bar width budget; longer runs are scaled down to fit
const MAX_CHART_WIDTH: usize = 120;

/// Render the timeline as a bordered bar with time markers underneath
pub fn render_gantt(timeline: &[TimelineSegment]) -> String {
    let Some(first) = timeline.first() else {
        return String::from("(empty timeline)\n");
    };

    let widths = column_widths(timeline);

    let mut border = String::from("+");
    let mut labels = String::from("|");
    for (segment, &width) in timeline.iter().zip(&widths) {
        border.push_str(&"-".repeat(width));
        border.push('+');

        let label = match segment.occupant {
            Occupant::Process(pid) => format!("P{}", pid),
            Occupant::Idle => "--".to_string(),
        };
        let label: String = label.chars().take(width).collect();
        let _ = write!(labels, "{:^width$}|", label, width = width);
    }

    let mut markers = first.start_time.to_string();
    for (segment, &width) in timeline.iter().zip(&widths) {
        let end = segment.end_time.to_string();
        // Right-align each end marker under its segment boundary
        let pad = (width + 1).saturating_sub(end.len());
        markers.push_str(&" ".repeat(pad));
        markers.push_str(&end);
    }

    format!("{border}\n{labels}\n{border}\n{markers}\n")
}

/// Columns per segment: `CELL_WIDTH` per tick when the whole run fits the
/// budget, otherwise proportional to duration with at least one column each
fn column_widths(timeline: &[TimelineSegment]) -> Vec<usize> {
    let total: i128 = timeline.iter().map(|s| s.duration() as i128).sum();

    if total * CELL_WIDTH as i128 <= MAX_CHART_WIDTH as i128 {
        return timeline
            .iter()
            .map(|s| s.duration() as usize * CELL_WIDTH)
            .collect();
    }

    timeline
        .iter()
        .map(|s| {
            let share = s.duration() as f64 / total as f64;
            ((share * MAX_CHART_WIDTH as f64).round() as usize).max(1)
        })
        .collect()
}
