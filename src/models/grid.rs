//! Week grid model.
//!
//! A week grid records, per member, which half-hour cells of the week they
//! can attend. Cells are addressed by `(day, slot)`; a cell missing from
//! the grid counts as unavailable.
//!
//! # Time Model
//! Slot 0 starts at `start_hour`, each slot lasts `slot_minutes`. Days are
//! numbered from Monday = 0.
//!
//! # Wire Keys
//! Cells serialize as `D{day}_T{slot}` so a grid is a flat map of keys to
//! booleans, the shape the document store holds.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Shape of the weekly grid and its clock mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDimensions {
    /// Number of days (columns).
    pub days: usize,
    /// Number of slots per day (rows).
    pub slots_per_day: usize,
    /// Hour of day at which slot 0 starts.
    pub start_hour: u32,
    /// Length of one slot in minutes.
    pub slot_minutes: u32,
}

impl GridDimensions {
    /// Creates grid dimensions with a 09:00 start and 30-minute slots.
    pub fn new(days: usize, slots_per_day: usize) -> Self {
        Self {
            days,
            slots_per_day,
            start_hour: 9,
            slot_minutes: 30,
        }
    }

    /// Sets the clock mapping.
    pub fn with_clock(mut self, start_hour: u32, slot_minutes: u32) -> Self {
        self.start_hour = start_hour;
        self.slot_minutes = slot_minutes;
        self
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.days * self.slots_per_day
    }

    /// Whether a cell lies inside the grid.
    #[inline]
    pub fn contains(&self, cell: CellId) -> bool {
        cell.day < self.days && cell.slot < self.slots_per_day
    }

    /// Returns the cell if it lies inside the grid.
    pub fn check(&self, cell: CellId) -> Result<CellId> {
        if self.contains(cell) {
            Ok(cell)
        } else {
            Err(Error::CellOutOfRange {
                day: cell.day,
                slot: cell.slot,
                days: self.days,
                slots: self.slots_per_day,
            })
        }
    }

    /// All cells, day-major.
    pub fn cells(&self) -> impl Iterator<Item = CellId> + '_ {
        (0..self.days).flat_map(move |d| (0..self.slots_per_day).map(move |t| CellId::new(d, t)))
    }

    /// Clock time at which a slot starts, as `HH:MM`.
    ///
    /// `slot == slots_per_day` is valid and yields the end of the day.
    pub fn slot_to_time(&self, slot: usize) -> String {
        let minutes = self.start_hour as usize * 60 + slot * self.slot_minutes as usize;
        format!("{:02}:{:02}", (minutes / 60) % 24, minutes % 60)
    }

    /// Short weekday label for a day index.
    pub fn day_label(&self, day: usize) -> String {
        match DAY_LABELS.get(day) {
            Some(label) => (*label).to_string(),
            None => format!("Day {}", day + 1),
        }
    }
}

impl Default for GridDimensions {
    /// 7 days × 16 slots, 09:00 to 17:00 in 30-minute steps.
    fn default() -> Self {
        Self::new(7, 16)
    }
}

/// Address of one cell in the week grid.
///
/// Ordering is day-major, then slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CellId {
    /// Day index (Monday = 0).
    pub day: usize,
    /// Slot index within the day.
    pub slot: usize,
}

impl CellId {
    /// Creates a cell id.
    pub const fn new(day: usize, slot: usize) -> Self {
        Self { day, slot }
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{}_T{}", self.day, self.slot)
    }
}

impl FromStr for CellId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidCellId(s.to_string());
        let rest = s.strip_prefix('D').ok_or_else(invalid)?;
        let (day, slot) = rest.split_once("_T").ok_or_else(invalid)?;
        let day = day.parse().map_err(|_| invalid())?;
        let slot = slot.parse().map_err(|_| invalid())?;
        Ok(Self { day, slot })
    }
}

impl TryFrom<String> for CellId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<CellId> for String {
    fn from(cell: CellId) -> Self {
        cell.to_string()
    }
}

/// A half-open slot interval `[start, end)` within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSpan {
    /// First slot (inclusive).
    pub start: usize,
    /// End slot (exclusive).
    pub end: usize,
}

impl SlotSpan {
    /// Creates a span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Span starting at `start` covering `len` slots.
    pub fn with_len(start: usize, len: usize) -> Self {
        Self::new(start, start.saturating_add(len))
    }

    /// Number of slots covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Whether a slot falls within this span.
    #[inline]
    pub fn contains(&self, slot: usize) -> bool {
        slot >= self.start && slot < self.end
    }

    /// Whether two spans overlap. Touching spans do not.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// One member's availability for one week.
///
/// Sparse: cells not present are unavailable. Keys that cannot be parsed
/// as cell ids are dropped on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, bool>", into = "BTreeMap<String, bool>")]
pub struct WeekGrid {
    cells: BTreeMap<CellId, bool>,
}

impl WeekGrid {
    /// Creates a grid with no entries (everything unavailable).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a grid with every cell explicitly set to `false`.
    pub fn empty(dims: &GridDimensions) -> Self {
        Self {
            cells: dims.cells().map(|c| (c, false)).collect(),
        }
    }

    /// Builds a grid from the cells marked available.
    pub fn from_available<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = CellId>,
    {
        Self {
            cells: cells.into_iter().map(|c| (c, true)).collect(),
        }
    }

    /// Marks a cell available and returns the grid (builder style).
    pub fn with_available(mut self, day: usize, slot: usize) -> Self {
        self.set(CellId::new(day, slot), true);
        self
    }

    /// Whether a cell is marked available.
    #[inline]
    pub fn is_available(&self, cell: CellId) -> bool {
        self.cells.get(&cell).copied().unwrap_or(false)
    }

    /// Whether `(day, slot)` is marked available.
    #[inline]
    pub fn is_available_at(&self, day: usize, slot: usize) -> bool {
        self.is_available(CellId::new(day, slot))
    }

    /// Whether every slot of `[start_slot, start_slot + len)` on `day` is available.
    ///
    /// A window whose end does not fit in `usize` is never covered.
    pub fn covers_window(&self, day: usize, start_slot: usize, len: usize) -> bool {
        match start_slot.checked_add(len) {
            Some(end) => (start_slot..end).all(|t| self.is_available_at(day, t)),
            None => false,
        }
    }

    /// Sets a cell's value.
    pub fn set(&mut self, cell: CellId, available: bool) {
        self.cells.insert(cell, available);
    }

    /// Flips a cell and returns its new value.
    pub fn toggle(&mut self, cell: CellId) -> bool {
        let next = !self.is_available(cell);
        self.cells.insert(cell, next);
        next
    }

    /// Drag-paint: sets a cell to `want` only if it differs.
    ///
    /// Returns `true` if the cell changed.
    pub fn paint(&mut self, cell: CellId, want: bool) -> bool {
        if self.is_available(cell) == want {
            return false;
        }
        self.cells.insert(cell, want);
        true
    }

    /// Overlays every entry of `other` onto this grid.
    pub fn merge_from(&mut self, other: &WeekGrid) {
        for (&cell, &value) in &other.cells {
            self.cells.insert(cell, value);
        }
    }

    /// Resets to an all-`false` grid of the given shape.
    pub fn clear(&mut self, dims: &GridDimensions) {
        *self = Self::empty(dims);
    }

    /// Drops entries outside `dims`, returning how many were removed.
    pub fn retain_within(&mut self, dims: &GridDimensions) -> usize {
        let before = self.cells.len();
        self.cells.retain(|cell, _| dims.contains(*cell));
        before - self.cells.len()
    }

    /// Cells marked available, day-major.
    pub fn available_cells(&self) -> impl Iterator<Item = CellId> + '_ {
        self.cells.iter().filter(|(_, v)| **v).map(|(c, _)| *c)
    }

    /// Number of cells marked available.
    pub fn available_count(&self) -> usize {
        self.cells.values().filter(|v| **v).count()
    }

    /// All stored entries, including explicit `false` values.
    pub fn entries(&self) -> impl Iterator<Item = (CellId, bool)> + '_ {
        self.cells.iter().map(|(c, v)| (*c, *v))
    }

    /// Whether no cell is marked available.
    pub fn is_blank(&self) -> bool {
        self.available_count() == 0
    }
}

impl From<BTreeMap<String, bool>> for WeekGrid {
    fn from(raw: BTreeMap<String, bool>) -> Self {
        let mut cells = BTreeMap::new();
        for (key, value) in raw {
            match key.parse::<CellId>() {
                Ok(cell) => {
                    cells.insert(cell, value);
                }
                Err(_) => tracing::debug!(key = %key, "dropping unparseable grid key"),
            }
        }
        Self { cells }
    }
}

impl From<WeekGrid> for BTreeMap<String, bool> {
    fn from(grid: WeekGrid) -> Self {
        grid.cells
            .into_iter()
            .map(|(c, v)| (c.to_string(), v))
            .collect()
    }
}
