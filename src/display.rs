//! Presentation helpers.
//!
//! Everything here is a pure function of engine output: short name lists
//! for cards, the per-cell coverage map the calendar overlay draws from,
//! and plain-text renderings used by the `planner` binary.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::availability::HeatmapCounts;
use crate::models::{CellId, GridDimensions, Suggestion, TeamKind};
use crate::summary::WeekSummary;

/// Shows the first `max` names and a `+N` tail for the rest.
///
/// ```
/// use training_planner::display::format_names_short;
///
/// let names: Vec<String> = ["Anja", "Isa", "Kim", "Ole"].iter().map(|s| s.to_string()).collect();
/// assert_eq!(format_names_short(&names, 2), "Anja, Isa +2");
/// ```
pub fn format_names_short(names: &[String], max: usize) -> String {
    if names.is_empty() {
        return String::new();
    }
    let shown = &names[..max.min(names.len())];
    let rest = names.len() - shown.len();
    let head = shown.join(", ");
    match (rest, head.is_empty()) {
        (0, _) => head,
        (n, true) => format!("+{n}"),
        (n, false) => format!("{head} +{n}"),
    }
}

/// One suggestion's footprint on one calendar cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellCoverage {
    pub kind: TeamKind,
    /// Cell is the window's first slot.
    pub is_start: bool,
    /// Cell is the window's last slot.
    pub is_end: bool,
    pub lane: usize,
    /// Render key of the owning suggestion.
    pub key: String,
    pub members: Vec<String>,
}

/// Coverage entries per cell, ordered by lane within each cell.
pub type CoverageMap = BTreeMap<CellId, Vec<CellCoverage>>;

/// Maps every cell covered by a suggestion to the windows covering it.
///
/// Unlaned suggestions are drawn in lane 0.
pub fn suggestion_cells(suggestions: &[Suggestion]) -> CoverageMap {
    let mut map = CoverageMap::new();

    for s in suggestions {
        let lane = s.lane.unwrap_or(0);
        let key = s.key();
        let last = s.end_slot().saturating_sub(1);
        for cell in s.cells() {
            map.entry(cell).or_default().push(CellCoverage {
                kind: s.kind,
                is_start: cell.slot == s.start_slot,
                is_end: cell.slot == last,
                lane,
                key: key.clone(),
                members: s.members.clone(),
            });
        }
    }

    for entries in map.values_mut() {
        entries.sort_by_key(|c| c.lane);
    }
    map
}

/// Heatmap counts when the overlay is shown, otherwise nothing.
pub fn visible_counts(counts: &HeatmapCounts, show_overlay: bool) -> HeatmapCounts {
    if show_overlay {
        counts.clone()
    } else {
        HeatmapCounts::new()
    }
}

/// Suggestion list grouped by day, one line per window.
pub fn render_suggestions(suggestions: &[Suggestion], dims: &GridDimensions) -> String {
    if suggestions.is_empty() {
        return "No training windows reach the threshold this week.\n".to_string();
    }

    let mut out = String::new();
    let mut current_day = None;
    for s in suggestions {
        if current_day != Some(s.day) {
            out.push_str(&format!("\n=== {} ===\n", dims.day_label(s.day)));
            current_day = Some(s.day);
        }
        out.push_str(&format!(
            "  [lane {}] {} | {}\n",
            s.lane.unwrap_or(0),
            s.title(dims),
            format_names_short(&s.members, 3)
        ));
    }
    out
}

/// Heatmap as a slot-by-day table; blank cells are shown as `.`.
pub fn render_heatmap(counts: &HeatmapCounts, dims: &GridDimensions) -> String {
    let mut out = format!("{:>6}", "");
    for day in 0..dims.days {
        out.push_str(&format!("{:>6}", dims.day_label(day)));
    }
    out.push('\n');

    for slot in 0..dims.slots_per_day {
        out.push_str(&format!("{:>6}", dims.slot_to_time(slot)));
        for day in 0..dims.days {
            let cell = match counts.get(&CellId::new(day, slot)) {
                Some(n) => n.to_string(),
                None => ".".to_string(),
            };
            out.push_str(&format!("{cell:>6}"));
        }
        out.push('\n');
    }
    out
}

/// Headline block for a week summary.
pub fn render_summary(summary: &WeekSummary, dims: &GridDimensions) -> String {
    let mut out = format!(
        "Suggestions: {} over {} day(s), up to {} lane(s)\n",
        summary.total_suggestions,
        summary.days_with_suggestions,
        summary.max_lanes()
    );
    if let Some(best) = &summary.best {
        out.push_str(&format!("Best window: {}\n", best.title(dims)));
    }
    if let Some(cell) = summary.peak_cell {
        out.push_str(&format!(
            "Busiest slot: {} {} ({} available)\n",
            dims.day_label(cell.day),
            dims.slot_to_time(cell.slot),
            summary.peak_count
        ));
    }
    out.push_str(&format!(
        "Coverage: {:.1}% of slots, avg {:.1} per window\n",
        summary.coverage_rate * 100.0,
        summary.avg_attendance
    ));
    out
}
