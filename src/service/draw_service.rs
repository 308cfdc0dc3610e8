//! Draw service: team draws over the present roster plus draw history.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::RwLock;

use crate::domain::{
    DrawHistory, DrawRecord, Player, TeamSizing, partition_teams, presence, rolling_preview,
};

/// Orchestrates team draws and owns the in-process draw history.
///
/// The history is session state for this single-tenant service. It is
/// independent of the player table and does not survive a restart.
/// Draw eligibility always comes from the unfiltered present set of the
/// roster handed in by the caller.
#[derive(Debug)]
pub struct DrawService {
    history: RwLock<DrawHistory>,
}

impl DrawService {
    /// Creates a service retaining at most `history_capacity` draws.
    #[must_use]
    pub fn new(history_capacity: usize) -> Self {
        Self {
            history: RwLock::new(DrawHistory::new(history_capacity)),
        }
    }

    /// Draws teams from the present subset of `roster` and records the
    /// result in the history.
    pub async fn draw(&self, roster: &[Player], sizing: TeamSizing) -> DrawRecord {
        let mut rng = StdRng::from_entropy();
        self.draw_with(roster, sizing, &mut rng).await
    }

    /// Seedable variant of [`DrawService::draw`]: all randomness flows
    /// through `rng`, making the draw reproducible in tests.
    pub async fn draw_with<R: Rng + ?Sized>(
        &self,
        roster: &[Player],
        sizing: TeamSizing,
        rng: &mut R,
    ) -> DrawRecord {
        let eligible = presence::present_of(roster);
        let teams = partition_teams(&eligible, sizing, rng);
        let record = DrawRecord::new(teams);

        self.history.write().await.append(record.clone());
        tracing::info!(
            eligible = eligible.len(),
            teams = record.teams.len(),
            "draw recorded"
        );
        record
    }

    /// Produces the rolling-name reveal sequence from the present subset
    /// of `roster`. Presentation only: never touches the history.
    #[must_use]
    pub fn reveal(&self, roster: &[Player], steps: usize) -> Vec<String> {
        let eligible = presence::present_of(roster);
        let mut rng = rand::thread_rng();
        rolling_preview(&eligible, steps, &mut rng)
    }

    /// Recorded draws, newest first.
    pub async fn history(&self) -> Vec<DrawRecord> {
        self.history.read().await.list()
    }
}
