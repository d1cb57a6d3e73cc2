//! Team availability snapshots.
//!
//! A snapshot maps member names to their week grid for one (team, week)
//! pair. Snapshots are assembled from the document store's per-member
//! documents, which come in two shapes:
//!
//! - `{"grid": {"D0_T0": true, ...}, ...}` (wrapped)
//! - `{"D0_T0": true, ...}` (bare)
//!
//! Decoding is lenient: unparseable keys and non-boolean values are
//! skipped, and a document that is not an object decodes to a blank grid.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::models::{CellId, WeekGrid};

/// Member name → week grid for one team and week.
///
/// Members without an entry are treated as fully unavailable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamAvailability {
    grids: HashMap<String, WeekGrid>,
}

impl TeamAvailability {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a member's grid (builder style).
    pub fn with_grid(mut self, member: impl Into<String>, grid: WeekGrid) -> Self {
        self.insert(member, grid);
        self
    }

    /// Adds or replaces a member's grid, returning the previous one.
    pub fn insert(&mut self, member: impl Into<String>, grid: WeekGrid) -> Option<WeekGrid> {
        self.grids.insert(member.into(), grid)
    }

    /// Removes a member's grid.
    pub fn remove(&mut self, member: &str) -> Option<WeekGrid> {
        self.grids.remove(member)
    }

    /// A member's grid, if one was supplied.
    pub fn grid(&self, member: &str) -> Option<&WeekGrid> {
        self.grids.get(member)
    }

    /// Mutable access to a member's grid, creating a blank one if absent.
    pub fn grid_mut(&mut self, member: &str) -> &mut WeekGrid {
        self.grids.entry(member.to_string()).or_default()
    }

    /// All `(member, grid)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &WeekGrid)> {
        self.grids.iter().map(|(m, g)| (m.as_str(), g))
    }

    /// All grids in unspecified order.
    pub fn grids(&self) -> impl Iterator<Item = &WeekGrid> {
        self.grids.values()
    }

    /// Member names with a grid, sorted.
    pub fn member_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.grids.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of grids.
    pub fn len(&self) -> usize {
        self.grids.len()
    }

    /// Whether the snapshot holds no grids.
    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    /// Builds a snapshot from raw store documents.
    pub fn from_documents<I, K>(documents: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let mut snapshot = Self::new();
        for (member, doc) in documents {
            let member = member.into();
            let grid = decode_document(&member, &doc);
            snapshot.insert(member, grid);
        }
        snapshot
    }

    /// Parses a JSON object of `member → document`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let documents: Map<String, Value> = serde_json::from_str(json)?;
        Ok(Self::from_documents(documents))
    }
}

impl<K: Into<String>> FromIterator<(K, WeekGrid)> for TeamAvailability {
    fn from_iter<I: IntoIterator<Item = (K, WeekGrid)>>(iter: I) -> Self {
        Self {
            grids: iter.into_iter().map(|(k, g)| (k.into(), g)).collect(),
        }
    }
}

/// Decodes one member document into a grid, skipping what it cannot read.
pub fn decode_document(member: &str, doc: &Value) -> WeekGrid {
    match try_decode_document(member, doc) {
        Ok(grid) => grid,
        Err(err) => {
            tracing::warn!(member, error = %err, "treating member as unavailable");
            WeekGrid::new()
        }
    }
}

/// Decodes one member document, failing if it is not a JSON object.
///
/// Individual entries that are not `D{day}_T{slot}: bool` are still
/// skipped; only the document shape is checked.
pub fn try_decode_document(member: &str, doc: &Value) -> Result<WeekGrid> {
    let fields = match doc {
        Value::Object(map) => match map.get("grid") {
            Some(Value::Object(grid)) => grid,
            _ => map,
        },
        other => {
            return Err(Error::InvalidDocument {
                member: member.to_string(),
                reason: format!("expected an object, found {}", json_kind(other)),
            })
        }
    };

    let mut grid = WeekGrid::new();
    let mut skipped = 0usize;
    for (key, value) in fields {
        match (key.parse::<CellId>(), value) {
            (Ok(cell), Value::Bool(available)) => grid.set(cell, *available),
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        tracing::debug!(member, skipped, "skipped non-grid document fields");
    }
    Ok(grid)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Monday of the week `weeks` weeks away from `date`'s week.
pub fn shift_weeks(date: NaiveDate, weeks: i64) -> NaiveDate {
    week_start(date) + Duration::weeks(weeks)
}

/// Store key for one team's week: `{team_id}_{YYYY-MM-DD}`.
pub fn team_week_key(team_id: &str, week_start: NaiveDate) -> String {
    format!("{}_{}", team_id, week_start.format("%Y-%m-%d"))
}
