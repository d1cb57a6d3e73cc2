//! Availability index over a team snapshot.
//!
//! Answers the two read-only questions everything else is built on:
//!
//! - **Heatmap**: how many members are available in each cell.
//! - **Window membership**: which roster members are available for every
//!   slot of a given window.
//!
//! Neither query mutates the snapshot, and both are independent of the
//! snapshot's map iteration order: counts are summed per cell and window
//! membership follows the roster.

use std::collections::BTreeMap;

use crate::models::{CellId, GridDimensions, Team};
use crate::snapshot::TeamAvailability;

/// Cell → number of members available there.
///
/// Cells nobody marked are absent rather than zero.
pub type HeatmapCounts = BTreeMap<CellId, usize>;

/// Read-only queries over availability snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AvailabilityIndex {
    dims: GridDimensions,
}

impl AvailabilityIndex {
    /// Creates an index for the given grid shape.
    pub fn new(dims: GridDimensions) -> Self {
        Self { dims }
    }

    /// Grid shape used to screen heatmap cells.
    pub fn dimensions(&self) -> &GridDimensions {
        &self.dims
    }

    /// Per-cell participation counts.
    ///
    /// Every `true` cell of every grid adds one. Cells outside the grid
    /// dimensions are skipped.
    pub fn counts_for(&self, snapshot: &TeamAvailability) -> HeatmapCounts {
        let mut counts = HeatmapCounts::new();
        let mut ignored = 0usize;

        for grid in snapshot.grids() {
            for cell in grid.available_cells() {
                if !self.dims.contains(cell) {
                    ignored += 1;
                    continue;
                }
                *counts.entry(cell).or_insert(0) += 1;
            }
        }

        if ignored > 0 {
            tracing::warn!(ignored, "ignored out-of-range cells while counting");
        }
        counts
    }

    /// Roster members available for all of `[start_slot, start_slot + window_length)` on `day`.
    ///
    /// Result preserves roster order. Members without a grid never qualify.
    /// Windows running past the end of the day are evaluated as given and
    /// fail for anyone lacking the missing slots.
    pub fn members_available(
        &self,
        team: &Team,
        snapshot: &TeamAvailability,
        day: usize,
        start_slot: usize,
        window_length: usize,
    ) -> Vec<String> {
        team.members
            .iter()
            .filter(|name| {
                snapshot
                    .grid(name)
                    .is_some_and(|grid| grid.covers_window(day, start_slot, window_length))
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeekGrid;
    use rand::rngs::SmallRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    fn window_grid(day: usize, slots: &[usize]) -> WeekGrid {
        WeekGrid::from_available(slots.iter().map(|&t| CellId::new(day, t)))
    }

    fn sample_team() -> Team {
        Team::new("2xA")
            .with_name("2x Herfst Ploeg A")
            .with_members(["Pelt", "Wolfelaar", "Tangelder", "Meeuwesen", "Baltissen"])
    }

    #[test]
    fn test_counts_sum_grids() {
        let snapshot = TeamAvailability::new()
            .with_grid("Pelt", window_grid(0, &[0, 1]))
            .with_grid("Wolfelaar", window_grid(0, &[1, 2]))
            .with_grid("Tangelder", WeekGrid::new());

        let counts = AvailabilityIndex::default().counts_for(&snapshot);
        assert_eq!(counts.get(&CellId::new(0, 0)), Some(&1));
        assert_eq!(counts.get(&CellId::new(0, 1)), Some(&2));
        assert_eq!(counts.get(&CellId::new(0, 2)), Some(&1));
        assert_eq!(counts.len(), 3); // zero cells absent
    }

    #[test]
    fn test_counts_ignore_false_and_out_of_range() {
        let mut grid = window_grid(0, &[0]);
        grid.set(CellId::new(0, 1), false);
        grid.set(CellId::new(8, 0), true);
        grid.set(CellId::new(0, 16), true);
        let snapshot = TeamAvailability::new().with_grid("Pelt", grid);

        let counts = AvailabilityIndex::default().counts_for(&snapshot);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[&CellId::new(0, 0)], 1);
    }

    #[test]
    fn test_counts_bounded_by_grid_count() {
        let mut rng = SmallRng::seed_from_u64(7);
        let dims = GridDimensions::default();
        let mut snapshot = TeamAvailability::new();
        for m in 0..12 {
            let grid = WeekGrid::from_available(dims.cells().filter(|_| rng.random_bool(0.4)));
            snapshot.insert(format!("m{m}"), grid);
        }

        let counts = AvailabilityIndex::new(dims).counts_for(&snapshot);
        for (cell, &count) in &counts {
            assert!(count >= 1 && count <= snapshot.len());
            assert!(snapshot.grids().any(|g| g.is_available(*cell)));
        }
    }

    #[test]
    fn test_members_in_roster_order() {
        let team = sample_team();
        let snapshot = TeamAvailability::new()
            .with_grid("Baltissen", window_grid(1, &[4, 5, 6]))
            .with_grid("Pelt", window_grid(1, &[4, 5, 6]))
            .with_grid("Tangelder", window_grid(1, &[4, 5, 6]));

        let members = AvailabilityIndex::default().members_available(&team, &snapshot, 1, 4, 3);
        assert_eq!(members, vec!["Pelt", "Tangelder", "Baltissen"]);
    }

    #[test]
    fn test_partial_window_does_not_qualify() {
        let team = sample_team();
        let snapshot = TeamAvailability::new()
            .with_grid("Pelt", window_grid(1, &[4, 5, 6]))
            .with_grid("Wolfelaar", window_grid(1, &[4, 6]));

        let members = AvailabilityIndex::default().members_available(&team, &snapshot, 1, 4, 3);
        assert_eq!(members, vec!["Pelt"]);
    }

    #[test]
    fn test_missing_and_blank_grids_equivalent() {
        let team = sample_team();
        let with_blank = TeamAvailability::new()
            .with_grid("Pelt", window_grid(0, &[0, 1, 2]))
            .with_grid("Wolfelaar", WeekGrid::new());
        let without = TeamAvailability::new().with_grid("Pelt", window_grid(0, &[0, 1, 2]));

        let index = AvailabilityIndex::default();
        assert_eq!(
            index.members_available(&team, &with_blank, 0, 0, 3),
            index.members_available(&team, &without, 0, 0, 3)
        );
    }

    #[test]
    fn test_window_past_end_of_day() {
        let team = sample_team();
        let snapshot = TeamAvailability::new()
            .with_grid("Pelt", window_grid(0, &[14, 15]))
            .with_grid("Klei", window_grid(0, &[14, 15, 16]));

        let index = AvailabilityIndex::default();
        assert!(index.members_available(&team, &snapshot, 0, 14, 3).is_empty());
    }

    #[test]
    fn test_window_start_overflow_never_qualifies() {
        let team = sample_team();
        let snapshot = TeamAvailability::new().with_grid("Pelt", window_grid(0, &[0]));
        let index = AvailabilityIndex::default();
        assert!(index.members_available(&team, &snapshot, 0, usize::MAX, 3).is_empty());
    }

    #[test]
    fn test_non_roster_grids_ignored() {
        let team = sample_team();
        let snapshot = TeamAvailability::new().with_grid("Stranger", window_grid(0, &[0, 1, 2]));
        let members = AvailabilityIndex::default().members_available(&team, &snapshot, 0, 0, 3);
        assert!(members.is_empty());
    }

    #[test]
    fn test_insertion_order_irrelevant() {
        let team = sample_team();
        let mut rng = SmallRng::seed_from_u64(42);
        let mut entries: Vec<(String, WeekGrid)> = team
            .members
            .iter()
            .map(|m| (m.clone(), window_grid(3, &[2, 3, 4])))
            .collect();

        let index = AvailabilityIndex::default();
        let baseline: TeamAvailability = entries.clone().into_iter().collect();
        for _ in 0..5 {
            entries.shuffle(&mut rng);
            let shuffled: TeamAvailability = entries.clone().into_iter().collect();
            assert_eq!(index.counts_for(&shuffled), index.counts_for(&baseline));
            assert_eq!(
                index.members_available(&team, &shuffled, 3, 2, 3),
                team.members
            );
        }
    }
}
