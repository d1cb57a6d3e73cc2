//! Week summary metrics.
//!
//! Condenses one team's laned suggestions and heatmap into a few headline
//! numbers for list headers and the command-line report.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total suggestions | Number of qualifying windows |
//! | Lanes per day | `max lane + 1` per day (peak overlap) |
//! | Best window | Highest member count, earliest on ties |
//! | Peak cell | Heatmap cell with the most members, earliest on ties |
//! | Coverage rate | Fraction of grid cells anyone marked |
//! | Avg attendance | Mean member count over all windows |

use serde::Serialize;

use crate::availability::HeatmapCounts;
use crate::models::{CellId, GridDimensions, Suggestion};
use crate::suggest::lanes_per_day;

/// Headline numbers for one team's week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekSummary {
    /// Number of suggestions.
    pub total_suggestions: usize,
    /// Lanes needed per day.
    pub lanes_per_day: Vec<usize>,
    /// Days with at least one suggestion.
    pub days_with_suggestions: usize,
    /// Window with the most members available.
    pub best: Option<Suggestion>,
    /// Busiest heatmap cell.
    pub peak_cell: Option<CellId>,
    /// Member count in the busiest cell.
    pub peak_count: usize,
    /// Fraction of grid cells with at least one member (0.0..1.0).
    pub coverage_rate: f64,
    /// Mean member count across suggestions.
    pub avg_attendance: f64,
}

impl WeekSummary {
    /// Computes the summary.
    ///
    /// # Arguments
    /// * `suggestions` - Laned suggestions in display order.
    /// * `counts` - Heatmap for the same snapshot.
    /// * `dims` - Grid shape (for per-day lanes and coverage).
    pub fn calculate(suggestions: &[Suggestion], counts: &HeatmapCounts, dims: &GridDimensions) -> Self {
        let lanes = lanes_per_day(suggestions, dims.days);
        let days_with_suggestions = lanes.iter().filter(|&&w| w > 0).count();

        // Strictly greater keeps the earliest on ties
        let mut best: Option<&Suggestion> = None;
        for s in suggestions {
            match best {
                Some(b) if s.count <= b.count => {}
                _ => best = Some(s),
            }
        }

        let mut peak_cell = None;
        let mut peak_count = 0;
        for (&cell, &count) in counts {
            if count > peak_count {
                peak_cell = Some(cell);
                peak_count = count;
            }
        }

        let covered = counts.keys().filter(|c| dims.contains(**c)).count();
        let coverage_rate = if dims.cell_count() == 0 {
            0.0
        } else {
            covered as f64 / dims.cell_count() as f64
        };

        let avg_attendance = if suggestions.is_empty() {
            0.0
        } else {
            suggestions.iter().map(|s| s.count).sum::<usize>() as f64 / suggestions.len() as f64
        };

        Self {
            total_suggestions: suggestions.len(),
            lanes_per_day: lanes,
            days_with_suggestions,
            best: best.cloned(),
            peak_cell,
            peak_count,
            coverage_rate,
            avg_attendance,
        }
    }

    /// Widest lane layout on any day.
    pub fn max_lanes(&self) -> usize {
        self.lanes_per_day.iter().copied().max().unwrap_or(0)
    }

    /// Whether the week has any training option.
    pub fn has_options(&self) -> bool {
        self.total_suggestions > 0
    }
}
