//! Team model and kind/threshold policy.
//!
//! A team's kind is not stored: it is read from the team's name (or its id
//! when the name is empty). The mapping is total; text that names no kind
//! falls back to the large-crew policy.

use serde::{Deserialize, Serialize};

/// Minimum participants for a large-crew training.
pub const LARGE_CREW_THRESHOLD: usize = 6;
/// Minimum participants for a pair-boat training.
pub const PAIR_THRESHOLD: usize = 3;

/// A team with an ordered roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Unique team identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Member names in roster order.
    #[serde(default)]
    pub members: Vec<String>,
}

impl Team {
    /// Creates a team with no name and no members.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            members: Vec::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Appends a member.
    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        self.members.push(member.into());
        self
    }

    /// Appends several members.
    pub fn with_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members.extend(members.into_iter().map(Into::into));
        self
    }

    /// Number of roster entries.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Whether a name is on the roster.
    pub fn has_member(&self, name: &str) -> bool {
        self.members.iter().any(|m| m == name)
    }

    /// Text the policy is derived from: the name, or the id if the name is empty.
    pub fn policy_label(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }

    /// Derived kind and threshold.
    pub fn policy(&self) -> TeamPolicy {
        TeamPolicy::for_team(self)
    }
}

/// Boat class of a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TeamKind {
    /// Coxed four and larger crews.
    LargeCrew,
    /// Double sculls.
    Pair,
}

impl TeamKind {
    /// Short label shown on suggestion cards.
    pub fn label(&self) -> &'static str {
        match self {
            TeamKind::LargeCrew => "4+",
            TeamKind::Pair => "2x",
        }
    }

    /// Minimum participants needed for a training of this kind.
    pub fn threshold(&self) -> usize {
        match self {
            TeamKind::LargeCrew => LARGE_CREW_THRESHOLD,
            TeamKind::Pair => PAIR_THRESHOLD,
        }
    }
}

/// Kind and minimum-participant threshold for one team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamPolicy {
    /// Derived team kind.
    pub kind: TeamKind,
    /// Minimum members available for a window to be suggested.
    pub threshold: usize,
}

impl TeamPolicy {
    /// Policy with the kind's standard threshold.
    pub fn new(kind: TeamKind) -> Self {
        Self {
            kind,
            threshold: kind.threshold(),
        }
    }

    /// Derives the policy from a team's label.
    pub fn for_team(team: &Team) -> Self {
        Self::from_label(team.policy_label())
    }

    /// Derives the policy from free text.
    ///
    /// Case-insensitive substring match, first hit wins:
    ///
    /// | Text contains | Kind | Threshold |
    /// |---------------|------|-----------|
    /// | `4+` | large crew | 6 |
    /// | `2x` | pair | 3 |
    /// | anything else | large crew | 6 |
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        if label.contains("4+") {
            Self::new(TeamKind::LargeCrew)
        } else if label.contains("2x") {
            Self::new(TeamKind::Pair)
        } else {
            Self::new(TeamKind::LargeCrew)
        }
    }

    /// Human-readable policy line, e.g. `Team: 2x • min. 3 people`.
    pub fn describe(&self) -> String {
        format!("Team: {} • min. {} people", self.kind.label(), self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_large_crew_marker() {
        let team = Team::new("4pE").with_name("4+ Herfst Ploeg E");
        let policy = team.policy();
        assert_eq!(policy.kind, TeamKind::LargeCrew);
        assert_eq!(policy.threshold, 6);
    }

    #[test]
    fn test_pair_marker_case_insensitive() {
        let policy = TeamPolicy::from_label("2X Herfst Ploeg A");
        assert_eq!(policy.kind, TeamKind::Pair);
        assert_eq!(policy.threshold, 3);
    }

    #[test]
    fn test_large_crew_checked_first() {
        let policy = TeamPolicy::from_label("2x and 4+ combined");
        assert_eq!(policy.kind, TeamKind::LargeCrew);
    }

    #[test]
    fn test_default_branch() {
        // Name wins over id, so the "2x" in the id is never consulted.
        let team = Team::new("2xH").with_name("de ORC");
        assert_eq!(team.policy(), TeamPolicy::new(TeamKind::LargeCrew));
        assert_eq!(TeamPolicy::from_label(""), TeamPolicy::new(TeamKind::LargeCrew));
    }

    #[test]
    fn test_id_used_when_name_empty() {
        let team = Team::new("2xH");
        assert_eq!(team.policy_label(), "2xH");
        assert_eq!(team.policy().kind, TeamKind::Pair);
    }

    #[test]
    fn test_labels() {
        assert_eq!(TeamKind::LargeCrew.label(), "4+");
        assert_eq!(TeamKind::Pair.label(), "2x");
        assert_eq!(
            TeamPolicy::new(TeamKind::Pair).describe(),
            "Team: 2x • min. 3 people"
        );
    }

    #[test]
    fn test_roster_builders() {
        let team = Team::new("t")
            .with_member("Pelt")
            .with_members(["Klei", "Smit"]);
        assert_eq!(team.member_count(), 3);
        assert!(team.has_member("Klei"));
        assert!(!team.has_member("klei"));
        assert_eq!(team.members, vec!["Pelt", "Klei", "Smit"]);
    }
}
