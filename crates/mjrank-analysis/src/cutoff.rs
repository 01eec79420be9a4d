//! Promotion cutoff line for the team table
//!
//! The cutoff margin of a team is its total minus the total of a reference
//! team. Which team is the reference depends on which side of the promotion
//! boundary the team stands.

use serde::{Deserialize, Serialize};

/// Chooses the reference team for each team's cutoff margin.
///
/// All ranks are 1-based positions in the team table. Teams ranked strictly
/// above `boundary_rank` are compared against `upper_reference_rank`, the
/// others against `lower_reference_rank`.
///
/// When deserialized, a missing reference rank falls back to
/// `boundary_rank`, and a missing `boundary_rank` to the default rule's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "PartialCutoffRule")]
pub struct CutoffRule {
    pub boundary_rank: usize,
    pub upper_reference_rank: usize,
    pub lower_reference_rank: usize,
}

impl Default for CutoffRule {
    /// Every team is measured against the 6th-ranked team.
    fn default() -> Self {
        Self::uniform(6)
    }
}

#[derive(Debug, Deserialize)]
struct PartialCutoffRule {
    boundary_rank: Option<usize>,
    upper_reference_rank: Option<usize>,
    lower_reference_rank: Option<usize>,
}

impl From<PartialCutoffRule> for CutoffRule {
    fn from(rule: PartialCutoffRule) -> Self {
        let boundary_rank = rule
            .boundary_rank
            .unwrap_or(Self::default().boundary_rank);
        Self {
            boundary_rank,
            upper_reference_rank: rule.upper_reference_rank.unwrap_or(boundary_rank),
            lower_reference_rank: rule.lower_reference_rank.unwrap_or(boundary_rank),
        }
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum StandingsError {
    #[display("cutoff rank {name} must be at least 1")]
    ZeroRank { name: &'static str },
    #[display("cutoff {name} is {rank} but only {team_count} teams are ranked")]
    RankOutOfRange {
        name: &'static str,
        rank: usize,
        team_count: usize,
    },
}

impl CutoffRule {
    /// Measures every team against the team at `reference_rank`.
    #[must_use]
    pub const fn uniform(reference_rank: usize) -> Self {
        Self {
            boundary_rank: reference_rank,
            upper_reference_rank: reference_rank,
            lower_reference_rank: reference_rank,
        }
    }

    /// Promotion zone of `zone_size` teams.
    ///
    /// Teams inside the zone are measured against the first team outside it
    /// (how far ahead they are); the rest against the last team inside it
    /// (how far behind they are).
    #[must_use]
    pub const fn split(zone_size: usize) -> Self {
        Self {
            boundary_rank: zone_size + 1,
            upper_reference_rank: zone_size + 1,
            lower_reference_rank: zone_size,
        }
    }

    /// Reference rank for the team at 1-based `rank`.
    #[must_use]
    pub fn reference_rank(&self, rank: usize) -> usize {
        if rank < self.boundary_rank {
            self.upper_reference_rank
        } else {
            self.lower_reference_rank
        }
    }

    /// Checks that every rank is positive and every reference rank names an
    /// existing team.
    ///
    /// A boundary past the last team is allowed: everyone is then above it.
    pub fn validate(&self, team_count: usize) -> Result<(), StandingsError> {
        let ranks = [
            ("boundary rank", self.boundary_rank, false),
            ("upper reference rank", self.upper_reference_rank, true),
            ("lower reference rank", self.lower_reference_rank, true),
        ];
        for (name, rank, is_reference) in ranks {
            if rank == 0 {
                return Err(StandingsError::ZeroRank { name });
            }
            if is_reference && rank > team_count {
                return Err(StandingsError::RankOutOfRange {
                    name,
                    rank,
                    team_count,
                });
            }
        }
        Ok(())
    }
}
