//! Training window suggestion model.
//!
//! A suggestion is a window on one day where at least the team's threshold
//! of members is available for every slot. Suggestions are recomputed from
//! scratch on every snapshot change and are never stored.

use serde::{Deserialize, Serialize};

use super::{CellId, GridDimensions, SlotSpan, TeamKind};

/// A candidate training window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Day index (Monday = 0).
    pub day: usize,
    /// First slot of the window.
    pub start_slot: usize,
    /// Window length in slots.
    pub length: usize,
    /// Team kind the window was evaluated for.
    pub kind: TeamKind,
    /// Number of qualifying members.
    pub count: usize,
    /// Qualifying members in roster order.
    pub members: Vec<String>,
    /// Display lane within the day. `None` until lanes are assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lane: Option<usize>,
}

impl Suggestion {
    /// Creates an unlaned suggestion; `count` is taken from `members`.
    pub fn new(
        day: usize,
        start_slot: usize,
        length: usize,
        kind: TeamKind,
        members: Vec<String>,
    ) -> Self {
        Self {
            day,
            start_slot,
            length,
            kind,
            count: members.len(),
            members,
            lane: None,
        }
    }

    /// Sets the display lane.
    pub fn with_lane(mut self, lane: usize) -> Self {
        self.lane = Some(lane);
        self
    }

    /// Exclusive end slot.
    #[inline]
    pub fn end_slot(&self) -> usize {
        self.start_slot.saturating_add(self.length)
    }

    /// Covered slot interval.
    #[inline]
    pub fn span(&self) -> SlotSpan {
        SlotSpan::with_len(self.start_slot, self.length)
    }

    /// Whether this window covers a cell.
    pub fn covers(&self, cell: CellId) -> bool {
        cell.day == self.day && self.span().contains(cell.slot)
    }

    /// Whether two suggestions overlap on the same day.
    pub fn overlaps(&self, other: &Suggestion) -> bool {
        self.day == other.day && self.span().overlaps(&other.span())
    }

    /// Covered cells in slot order.
    pub fn cells(&self) -> impl Iterator<Item = CellId> + '_ {
        (self.start_slot..self.end_slot()).map(move |t| CellId::new(self.day, t))
    }

    /// Render key, unique per suggestion instance within one lane layout.
    pub fn key(&self) -> String {
        format!("{}-{}-{}", self.day, self.start_slot, self.lane.unwrap_or(0))
    }

    /// One-line title, e.g. `4+ • Mon 09:00–10:30 • 6 available`.
    pub fn title(&self, dims: &GridDimensions) -> String {
        format!(
            "{} • {} {}–{} • {} available",
            self.kind.label(),
            dims.day_label(self.day),
            dims.slot_to_time(self.start_slot),
            dims.slot_to_time(self.end_slot()),
            self.count
        )
    }
}
