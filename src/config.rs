//! Planner configuration.
//!
//! Grid shape, window length and the team roster are read from a TOML
//! file. Every grid field has a default, so a file may consist of
//! `[[teams]]` entries only.
//!
//! ```toml
//! [grid]
//! days = 7
//! slots_per_day = 16
//! start_hour = 9
//! slot_minutes = 30
//! window_slots = 3
//!
//! [[teams]]
//! id = "2xA"
//! name = "2x Herfst Ploeg A"
//! members = ["Pelt", "Wolfelaar", "Tangelder"]
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::availability::AvailabilityIndex;
use crate::error::{Error, Result};
use crate::models::{GridDimensions, Team};
use crate::suggest::{SuggestionEngine, DEFAULT_WINDOW_SLOTS};

/// Full planner configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub grid: GridSettings,
    #[serde(default)]
    pub teams: Vec<Team>,
}

/// Grid and window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSettings {
    #[serde(default = "default_days")]
    pub days: usize,
    #[serde(default = "default_slots_per_day")]
    pub slots_per_day: usize,
    #[serde(default = "default_start_hour")]
    pub start_hour: u32,
    #[serde(default = "default_slot_minutes")]
    pub slot_minutes: u32,
    #[serde(default = "default_window_slots")]
    pub window_slots: usize,
}

fn default_days() -> usize {
    7
}

fn default_slots_per_day() -> usize {
    16
}

fn default_start_hour() -> u32 {
    9
}

fn default_slot_minutes() -> u32 {
    30
}

fn default_window_slots() -> usize {
    DEFAULT_WINDOW_SLOTS
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            days: default_days(),
            slots_per_day: default_slots_per_day(),
            start_hour: default_start_hour(),
            slot_minutes: default_slot_minutes(),
            window_slots: default_window_slots(),
        }
    }
}

impl GridSettings {
    /// Grid shape described by these settings.
    pub fn dimensions(&self) -> GridDimensions {
        GridDimensions::new(self.days, self.slots_per_day)
            .with_clock(self.start_hour, self.slot_minutes)
    }
}

impl PlannerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            teams = config.teams.len(),
            "loaded planner config"
        );
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Grid shape.
    pub fn dimensions(&self) -> GridDimensions {
        self.grid.dimensions()
    }

    /// Looks up a team by id.
    pub fn team(&self, id: &str) -> Result<&Team> {
        self.teams
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::UnknownTeam(id.to_string()))
    }

    /// Availability index for the configured grid.
    pub fn index(&self) -> AvailabilityIndex {
        AvailabilityIndex::new(self.dimensions())
    }

    /// Suggestion engine for the configured grid and window.
    pub fn engine(&self) -> SuggestionEngine {
        SuggestionEngine::new()
            .with_dimensions(self.dimensions())
            .with_window(self.grid.window_slots)
    }
}
