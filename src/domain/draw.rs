//! Draw results: teams and timestamped draw records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Player;

/// An ordered group of players produced by one draw.
///
/// Teams are snapshots: they hold copies of the player records as they
/// were at draw time, so later roster edits do not rewrite past results.
/// A team has no identity beyond its position in the draw's team list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(transparent)]
pub struct Team(
    /// Members in draw order.
    pub Vec<Player>,
);

impl Team {
    /// Number of members on the team.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the team has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The team's members in draw order.
    #[must_use]
    pub fn members(&self) -> &[Player] {
        &self.0
    }
}

/// One completed draw: the produced teams plus the time it ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DrawRecord {
    /// When the draw was computed.
    pub drawn_at: DateTime<Utc>,
    /// Teams in draw order.
    pub teams: Vec<Team>,
}

impl DrawRecord {
    /// Creates a record stamped with the current time.
    #[must_use]
    pub fn new(teams: Vec<Team>) -> Self {
        Self {
            drawn_at: Utc::now(),
            teams,
        }
    }

    /// Total number of players across all teams.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.teams.iter().map(Team::len).sum()
    }
}
