//! Input validation for teams and availability snapshots.
//!
//! The engine tolerates messy input (it skips out-of-range cells and
//! ignores grids for unknown members), so these checks are advisory:
//! collaborators can run them to surface data problems before they turn
//! into silently missing suggestions. Detects:
//! - Empty team ids and rosters
//! - Duplicate roster names
//! - Grid cells outside the configured dimensions
//! - Grids for names not on the roster

use crate::models::{GridDimensions, Team};
use crate::snapshot::TeamAvailability;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Team id is empty.
    EmptyId,
    /// Team has no members.
    EmptyRoster,
    /// A name appears more than once on the roster.
    DuplicateMember,
    /// A grid marks a cell outside the grid dimensions.
    CellOutOfRange,
    /// A grid belongs to someone not on the roster.
    UnknownMember,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a team definition.
///
/// Checks:
/// 1. Non-empty id
/// 2. At least one member
/// 3. No duplicate member names
pub fn validate_team(team: &Team) -> ValidationResult {
    let mut errors = Vec::new();

    if team.id.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyId,
            format!("Team '{}' has an empty id", team.name),
        ));
    }

    if team.members.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyRoster,
            format!("Team '{}' has no members", team.id),
        ));
    }

    let mut seen = HashSet::new();
    for member in &team.members {
        if !seen.insert(member.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateMember,
                format!("Duplicate member '{}' in team '{}'", member, team.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a snapshot against a team and grid shape.
///
/// Checks:
/// 1. Every stored cell (true or false) lies inside `dims`
/// 2. Every grid belongs to a roster member
///
/// Errors are reported in member-name order.
pub fn validate_snapshot(
    team: &Team,
    snapshot: &TeamAvailability,
    dims: &GridDimensions,
) -> ValidationResult {
    let mut errors = Vec::new();

    for member in snapshot.member_names() {
        if !team.has_member(member) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownMember,
                format!("Grid for '{}' who is not on team '{}'", member, team.id),
            ));
        }

        if let Some(grid) = snapshot.grid(member) {
            for (cell, _) in grid.entries().filter(|(c, _)| !dims.contains(*c)) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::CellOutOfRange,
                    format!("Grid for '{member}' has cell {cell} outside the grid"),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
