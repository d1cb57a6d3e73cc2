//! Exhaustive window scan.
//!
//! # Algorithm
//!
//! 1. Derive the team's kind and threshold from its label.
//! 2. For every day and every start slot where the window fits inside the
//!    day, collect the roster members available for the whole window.
//! 3. Emit a suggestion whenever that count reaches the threshold.
//!
//! Windows are neither merged nor deduplicated; every qualifying start is
//! its own suggestion, so neighbouring starts overlap and are separated
//! later by lane assignment. Output order is day-major, start ascending.
//!
//! # Complexity
//! O(d * s * m * w) where d=days, s=start slots, m=roster size, w=window length.

use serde::Serialize;

use super::lanes::assign_lanes;
use crate::availability::{AvailabilityIndex, HeatmapCounts};
use crate::models::{GridDimensions, Suggestion, Team, TeamPolicy};
use crate::snapshot::TeamAvailability;

/// Default window length: 3 slots (90 minutes with 30-minute slots).
pub const DEFAULT_WINDOW_SLOTS: usize = 3;

/// Scans a team snapshot for training windows.
///
/// # Example
///
/// ```
/// use training_planner::models::{Team, WeekGrid};
/// use training_planner::snapshot::TeamAvailability;
/// use training_planner::suggest::SuggestionEngine;
///
/// let team = Team::new("2xA").with_name("2x Ploeg A").with_members(["A", "B", "C"]);
/// let grid = WeekGrid::new().with_available(0, 0).with_available(0, 1).with_available(0, 2);
/// let snapshot = TeamAvailability::new()
///     .with_grid("A", grid.clone())
///     .with_grid("B", grid.clone())
///     .with_grid("C", grid);
///
/// let suggestions = SuggestionEngine::new().build_suggestions(&team, &snapshot);
/// assert_eq!(suggestions.len(), 1);
/// assert_eq!(suggestions[0].count, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionEngine {
    index: AvailabilityIndex,
    window_slots: usize,
}

impl SuggestionEngine {
    /// Creates an engine for the default 7 × 16 grid and 3-slot windows.
    pub fn new() -> Self {
        Self {
            index: AvailabilityIndex::default(),
            window_slots: DEFAULT_WINDOW_SLOTS,
        }
    }

    /// Sets the grid shape.
    pub fn with_dimensions(mut self, dims: GridDimensions) -> Self {
        self.index = AvailabilityIndex::new(dims);
        self
    }

    /// Sets the window length in slots.
    pub fn with_window(mut self, window_slots: usize) -> Self {
        self.window_slots = window_slots;
        self
    }

    /// Grid shape.
    pub fn dimensions(&self) -> &GridDimensions {
        self.index.dimensions()
    }

    /// Window length in slots.
    pub fn window_slots(&self) -> usize {
        self.window_slots
    }

    /// The underlying availability index.
    pub fn index(&self) -> &AvailabilityIndex {
        &self.index
    }

    /// Every window meeting the team's derived threshold.
    pub fn build_suggestions(&self, team: &Team, snapshot: &TeamAvailability) -> Vec<Suggestion> {
        self.build_with_policy(team, snapshot, team.policy())
    }

    /// Every window meeting an explicit policy's threshold.
    pub fn build_with_policy(
        &self,
        team: &Team,
        snapshot: &TeamAvailability,
        policy: TeamPolicy,
    ) -> Vec<Suggestion> {
        let dims = self.index.dimensions();
        let mut suggestions = Vec::new();

        if self.window_slots == 0 || self.window_slots > dims.slots_per_day {
            tracing::debug!(
                window = self.window_slots,
                slots = dims.slots_per_day,
                "window does not fit the day; no suggestions"
            );
            return suggestions;
        }
        let last_start = dims.slots_per_day - self.window_slots;

        for day in 0..dims.days {
            for start in 0..=last_start {
                let members =
                    self.index
                        .members_available(team, snapshot, day, start, self.window_slots);
                if members.len() >= policy.threshold {
                    suggestions.push(Suggestion::new(
                        day,
                        start,
                        self.window_slots,
                        policy.kind,
                        members,
                    ));
                }
            }
        }

        tracing::debug!(
            team = %team.id,
            kind = policy.kind.label(),
            threshold = policy.threshold,
            found = suggestions.len(),
            "window scan finished"
        );
        suggestions
    }

    /// Suggestions with display lanes assigned.
    pub fn suggest(&self, team: &Team, snapshot: &TeamAvailability) -> Vec<Suggestion> {
        assign_lanes(self.build_suggestions(team, snapshot))
    }

    /// Full recomputation for one snapshot: policy, laned suggestions, heatmap.
    pub fn plan(&self, team: &Team, snapshot: &TeamAvailability) -> WeekPlan {
        WeekPlan {
            team_id: team.id.clone(),
            policy: team.policy(),
            suggestions: self.suggest(team, snapshot),
            counts: self.index.counts_for(snapshot),
        }
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the views need for one team's week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekPlan {
    /// Team the plan was computed for.
    pub team_id: String,
    /// Derived kind and threshold.
    pub policy: TeamPolicy,
    /// Lane-annotated suggestions, grouped by day.
    pub suggestions: Vec<Suggestion>,
    /// Heatmap counts.
    pub counts: HeatmapCounts,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CellId, TeamKind, WeekGrid};
    use rand::rngs::SmallRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    fn crew_team() -> Team {
        Team::new("4pE").with_name("4+ Herfst Ploeg E").with_members([
            "Morselt",
            "de Jong",
            "Kollen",
            "Voppen",
            "Chen",
            "van Breemen",
            "Sterk",
            "Linger",
        ])
    }

    fn pair_team() -> Team {
        Team::new("2xA")
            .with_name("2x Herfst Ploeg A")
            .with_members(["Pelt", "Wolfelaar", "Tangelder", "Meeuwesen", "Baltissen"])
    }

    fn window(day: usize, slots: std::ops::Range<usize>) -> WeekGrid {
        WeekGrid::from_available(slots.map(|t| CellId::new(day, t)))
    }

    /// First `n` roster members available on day 0, slots 0..3.
    fn first_n_available(team: &Team, n: usize) -> TeamAvailability {
        team.members
            .iter()
            .take(n)
            .map(|m| (m.clone(), window(0, 0..3)))
            .collect()
    }

    #[test]
    fn test_six_of_eight_yields_one_window() {
        let team = crew_team();
        let snapshot = first_n_available(&team, 6);

        let suggestions = SuggestionEngine::new().build_suggestions(&team, &snapshot);
        assert_eq!(suggestions.len(), 1);
        let s = &suggestions[0];
        assert_eq!((s.day, s.start_slot, s.length, s.count), (0, 0, 3, 6));
        assert_eq!(s.kind, TeamKind::LargeCrew);
        assert_eq!(s.members, team.members[..6].to_vec());
        assert_eq!(s.lane, None);
    }

    #[test]
    fn test_five_of_eight_below_threshold() {
        let team = crew_team();
        let snapshot = first_n_available(&team, 5);
        assert!(SuggestionEngine::new()
            .build_suggestions(&team, &snapshot)
            .is_empty());
    }

    #[test]
    fn test_pair_threshold() {
        let team = pair_team();
        let snapshot = first_n_available(&team, 3);
        let suggestions = SuggestionEngine::new().build_suggestions(&team, &snapshot);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].kind, TeamKind::Pair);
    }

    #[test]
    fn test_overlapping_starts_not_merged() {
        let team = pair_team();
        // Slots 0..5 → starts 0, 1, 2 all qualify
        let snapshot: TeamAvailability = team
            .members
            .iter()
            .take(3)
            .map(|m| (m.clone(), window(4, 0..5)))
            .collect();

        let suggestions = SuggestionEngine::new().build_suggestions(&team, &snapshot);
        let starts: Vec<usize> = suggestions.iter().map(|s| s.start_slot).collect();
        assert_eq!(starts, vec![0, 1, 2]);
        assert!(suggestions.iter().all(|s| s.day == 4));
    }

    #[test]
    fn test_last_window_fits_end_of_day() {
        let team = pair_team();
        let snapshot: TeamAvailability = team
            .members
            .iter()
            .take(3)
            .map(|m| (m.clone(), window(6, 13..16)))
            .collect();

        let suggestions = SuggestionEngine::new().build_suggestions(&team, &snapshot);
        assert_eq!(suggestions.len(), 1);
        assert_eq!((suggestions[0].day, suggestions[0].start_slot), (6, 13));
    }

    #[test]
    fn test_scan_order_day_major() {
        let team = pair_team();
        let mut grid = window(5, 2..5);
        grid.merge_from(&window(1, 7..10));
        let snapshot: TeamAvailability = team
            .members
            .iter()
            .map(|m| (m.clone(), grid.clone()))
            .collect();

        let suggestions = SuggestionEngine::new().build_suggestions(&team, &snapshot);
        let order: Vec<(usize, usize)> = suggestions.iter().map(|s| (s.day, s.start_slot)).collect();
        assert_eq!(order, vec![(1, 7), (5, 2)]);
    }

    #[test]
    fn test_blank_and_missing_members_never_listed() {
        let team = pair_team();
        let mut snapshot = first_n_available(&team, 3);
        snapshot.insert("Meeuwesen", WeekGrid::new());
        // Baltissen has no entry at all

        let suggestions = SuggestionEngine::new().build_suggestions(&team, &snapshot);
        assert_eq!(suggestions.len(), 1);
        assert!(!suggestions[0].members.contains(&"Meeuwesen".to_string()));
        assert!(!suggestions[0].members.contains(&"Baltissen".to_string()));

        snapshot.remove("Meeuwesen");
        assert_eq!(
            SuggestionEngine::new().build_suggestions(&team, &snapshot),
            suggestions
        );
    }

    #[test]
    fn test_window_longer_than_day() {
        let team = pair_team();
        let snapshot = first_n_available(&team, 5);
        let engine = SuggestionEngine::new().with_window(17);
        assert!(engine.build_suggestions(&team, &snapshot).is_empty());
        assert!(SuggestionEngine::new()
            .with_window(0)
            .build_suggestions(&team, &snapshot)
            .is_empty());
    }

    #[test]
    fn test_custom_dimensions_and_policy() {
        let team = pair_team();
        let dims = GridDimensions::new(2, 4);
        let snapshot: TeamAvailability = team
            .members
            .iter()
            .take(2)
            .map(|m| (m.clone(), window(1, 0..4)))
            .collect();

        let engine = SuggestionEngine::new().with_dimensions(dims).with_window(2);
        let policy = TeamPolicy {
            kind: TeamKind::Pair,
            threshold: 2,
        };
        let suggestions = engine.build_with_policy(&team, &snapshot, policy);
        let starts: Vec<usize> = suggestions.iter().map(|s| s.start_slot).collect();
        assert_eq!(starts, vec![0, 1, 2]);
    }

    #[test]
    fn test_suggest_assigns_lanes() {
        let team = pair_team();
        let snapshot: TeamAvailability = team
            .members
            .iter()
            .take(3)
            .map(|m| (m.clone(), window(2, 0..5)))
            .collect();

        let laned = SuggestionEngine::new().suggest(&team, &snapshot);
        let lanes: Vec<Option<usize>> = laned.iter().map(|s| s.lane).collect();
        assert_eq!(lanes, vec![Some(0), Some(1), Some(2)]);
    }

    #[test]
    fn test_plan_bundles_outputs() {
        let team = crew_team();
        let snapshot = first_n_available(&team, 6);
        let plan = SuggestionEngine::new().plan(&team, &snapshot);
        assert_eq!(plan.team_id, "4pE");
        assert_eq!(plan.policy.threshold, 6);
        assert_eq!(plan.suggestions.len(), 1);
        assert_eq!(plan.counts[&CellId::new(0, 1)], 6);
    }

    #[test]
    fn test_random_snapshots_respect_invariants() {
        let mut rng = SmallRng::seed_from_u64(11);
        let team = pair_team();
        let engine = SuggestionEngine::new();
        let dims = *engine.dimensions();

        for _ in 0..20 {
            let mut entries: Vec<(String, WeekGrid)> = team
                .members
                .iter()
                .map(|m| {
                    let grid = WeekGrid::from_available(dims.cells().filter(|_| rng.random_bool(0.6)));
                    (m.clone(), grid)
                })
                .collect();

            let snapshot: TeamAvailability = entries.clone().into_iter().collect();
            let laned = engine.suggest(&team, &snapshot);

            for s in &laned {
                assert!(s.count >= 3);
                assert_eq!(s.count, s.members.len());
                // Subset of roster, in roster order
                let positions: Vec<usize> = s
                    .members
                    .iter()
                    .map(|m| team.members.iter().position(|r| r == m).unwrap())
                    .collect();
                assert!(positions.windows(2).all(|w| w[0] < w[1]));
            }

            entries.shuffle(&mut rng);
            let reshuffled: TeamAvailability = entries.into_iter().collect();
            assert_eq!(engine.suggest(&team, &reshuffled), laned);
        }
    }
}
