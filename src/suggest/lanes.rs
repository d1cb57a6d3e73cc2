//! Display lane assignment (greedy interval coloring).
//!
//! # Algorithm
//!
//! 1. Sort intervals by start (stable, so equal starts keep input order).
//! 2. Sweep left to right keeping an active set of `(lane, end)` pairs.
//! 3. Before placing an interval, evict every active entry with
//!    `end <= start`; half-open intervals that merely touch may share a lane.
//! 4. Place the interval on the smallest lane no active entry uses.
//!
//! The number of lanes used equals the maximum number of intervals
//! overlapping at any instant, which is optimal for interval graphs.
//!
//! # Complexity
//! O(n log n + n·k) where k is the peak overlap.
//!
//! # Reference
//! Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1 (Interval Partitioning)

use std::collections::BTreeMap;

use crate::models::{SlotSpan, Suggestion};

#[derive(Debug, Clone, Copy)]
struct ActiveInterval {
    lane: usize,
    end: usize,
}

/// Assigns a lane to every span so that overlapping spans never share one.
///
/// Returns lanes in input order.
///
/// # Example
///
/// ```
/// use training_planner::models::SlotSpan;
/// use training_planner::suggest::color_intervals;
///
/// let spans = [SlotSpan::with_len(0, 3), SlotSpan::with_len(2, 3), SlotSpan::with_len(5, 3)];
/// assert_eq!(color_intervals(&spans), vec![0, 1, 0]);
/// ```
pub fn color_intervals(spans: &[SlotSpan]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..spans.len()).collect();
    order.sort_by_key(|&i| spans[i].start);

    let mut lanes = vec![0; spans.len()];
    let mut active: Vec<ActiveInterval> = Vec::new();

    for idx in order {
        let span = spans[idx];
        active.retain(|a| a.end > span.start);

        let lane = lowest_free_lane(&active);
        active.push(ActiveInterval {
            lane,
            end: span.end,
        });
        lanes[idx] = lane;
    }

    lanes
}

fn lowest_free_lane(active: &[ActiveInterval]) -> usize {
    let mut lane = 0;
    while active.iter().any(|a| a.lane == lane) {
        lane += 1;
    }
    lane
}

/// Lays out suggestions in per-day lanes.
///
/// Output is grouped by day ascending and sorted by start slot within a
/// day (stable). Any lane already present on the input is overwritten, so
/// running this on its own output changes nothing.
pub fn assign_lanes(suggestions: Vec<Suggestion>) -> Vec<Suggestion> {
    let mut by_day: BTreeMap<usize, Vec<Suggestion>> = BTreeMap::new();
    for s in suggestions {
        by_day.entry(s.day).or_default().push(s);
    }

    let mut laned = Vec::new();
    for (day, mut list) in by_day {
        list.sort_by_key(|s| s.start_slot);
        let spans: Vec<SlotSpan> = list.iter().map(Suggestion::span).collect();
        let lanes = color_intervals(&spans);

        let width = lanes.iter().max().map_or(0, |m| m + 1);
        tracing::debug!(day, suggestions = list.len(), lanes = width, "laid out day");

        for (mut s, lane) in list.into_iter().zip(lanes) {
            s.lane = Some(lane);
            laned.push(s);
        }
    }
    laned
}

/// Lanes needed per day (`max lane + 1`), indexed by day up to `days`.
///
/// Days without suggestions need zero lanes. Unlaned suggestions count as
/// lane 0.
pub fn lanes_per_day(suggestions: &[Suggestion], days: usize) -> Vec<usize> {
    let mut widths = vec![0; days];
    for s in suggestions {
        if let Some(w) = widths.get_mut(s.day) {
            *w = (*w).max(s.lane.unwrap_or(0) + 1);
        }
    }
    widths
}
