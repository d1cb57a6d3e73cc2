//! Team availability to training-window suggestions.
//!
//! Members of a rowing club mark the half-hour slots of a week in which
//! they can train. This crate aggregates those grids into a heatmap, finds
//! every fixed-length window in which enough of a team is available, and
//! lays overlapping windows out in display lanes.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `CellId`, `WeekGrid`, `Team`, `TeamPolicy`,
//!   `Suggestion`
//! - **`snapshot`**: Per-team, per-week member grids and document decoding
//! - **`availability`**: Heatmap counts and window membership
//! - **`suggest`**: Window scan and lane assignment
//! - **`summary`**: Headline numbers for one week
//! - **`display`**: Name lists, calendar coverage and text rendering
//! - **`validation`**: Input integrity checks (rosters, out-of-range cells)
//! - **`config`**: TOML configuration for grid shape and teams
//!
//! # Quick start
//!
//! ```
//! use training_planner::models::{Team, WeekGrid};
//! use training_planner::snapshot::TeamAvailability;
//!
//! let team = Team::new("2xA").with_name("2x Herfst Ploeg A").with_members(["A", "B", "C"]);
//! let grid = WeekGrid::new()
//!     .with_available(2, 4)
//!     .with_available(2, 5)
//!     .with_available(2, 6);
//! let grids: TeamAvailability = team.members.iter().map(|m| (m.clone(), grid.clone())).collect();
//!
//! let laned = training_planner::assign_lanes(training_planner::build_suggestions(&team, &grids));
//! assert_eq!(laned.len(), 1);
//! assert_eq!((laned[0].day, laned[0].start_slot, laned[0].lane), (2, 4, Some(0)));
//! ```
//!
//! The free functions below use the default grid (7 days × 16 slots from
//! 09:00, 3-slot windows). Use `SuggestionEngine` or `AvailabilityIndex`
//! directly for other shapes.

pub mod availability;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod snapshot;
pub mod suggest;
pub mod summary;
pub mod validation;

pub use availability::{AvailabilityIndex, HeatmapCounts};
pub use error::{Error, Result};
pub use suggest::{assign_lanes, SuggestionEngine};

use models::{Suggestion, Team};
use snapshot::TeamAvailability;

/// Heatmap counts over the default grid.
pub fn counts_for(grids: &TeamAvailability) -> HeatmapCounts {
    AvailabilityIndex::default().counts_for(grids)
}

/// Roster members available for a whole window, in roster order.
pub fn members_available(
    team: &Team,
    grids: &TeamAvailability,
    day: usize,
    start_slot: usize,
    window_length: usize,
) -> Vec<String> {
    AvailabilityIndex::default().members_available(team, grids, day, start_slot, window_length)
}

/// Every 3-slot window meeting the team's threshold, without lanes.
pub fn build_suggestions(team: &Team, grids: &TeamAvailability) -> Vec<Suggestion> {
    SuggestionEngine::default().build_suggestions(team, grids)
}
