//! Planner domain models.
//!
//! Provides the data types the availability index and suggestion engine
//! work over: week grids, teams with their derived policy, and suggestions.
//!
//! # Domain Mappings
//!
//! | training-planner | Rowing club | Generic |
//! |------------------|-------------|---------|
//! | Team | Crew (4+, 2x) | Group |
//! | WeekGrid | Member availability form | Per-person calendar |
//! | Suggestion | Training option | Meeting candidate |
//! | Lane | Calendar column offset | Display track |

mod grid;
mod suggestion;
mod team;

pub use grid::{CellId, GridDimensions, SlotSpan, WeekGrid};
pub use suggestion::Suggestion;
pub use team::{Team, TeamKind, TeamPolicy, LARGE_CREW_THRESHOLD, PAIR_THRESHOLD};
