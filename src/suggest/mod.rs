//! Training window suggestions and lane layout.
//!
//! Turns an availability snapshot into the list of candidate training
//! windows for one team and lays them out in per-day display lanes.
//!
//! # Pipeline
//!
//! `SuggestionEngine::build_suggestions` performs the policy derivation and
//! exhaustive window scan. `assign_lanes` then colors each day's windows so
//! that overlapping ones land in different lanes. `SuggestionEngine::plan`
//! runs both and adds the heatmap.
//!
//! Nothing is cached: every call recomputes from the snapshot it is given.

mod engine;
mod lanes;

pub use engine::{SuggestionEngine, WeekPlan, DEFAULT_WINDOW_SLOTS};
pub use lanes::{assign_lanes, color_intervals, lanes_per_day};
