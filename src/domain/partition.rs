//! Random team partitioning.
//!
//! [`partition_teams`] splits a list of eligible players into teams
//! under one of two sizing policies: a fixed team size or a fixed team
//! count. The algorithm is a uniform shuffle followed by consecutive
//! chunking, so every permutation of the input is equally likely and
//! each team is an arbitrary sample of the eligible set.
//!
//! All randomness flows through the caller-supplied [`Rng`], which makes
//! a draw reproducible from a seeded [`rand::rngs::StdRng`].

use rand::Rng;
use rand::seq::SliceRandom;

use super::draw::Team;
use super::player::Player;

/// Sizing policy for a draw.
///
/// Non-positive parameters are clamped to 1 during resolution. Invalid
/// sizing input is never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamSizing {
    /// Fixed team size; the team count follows from the player count.
    Size(i64),
    /// Fixed team count; the team size follows from the player count.
    Count(i64),
}

impl TeamSizing {
    /// Resolves the effective `(size, count)` pair for `n` players.
    ///
    /// - `Size(s)`: `size = max(1, s)`, `count = ceil(n / size)`.
    /// - `Count(c)`: `count = max(1, c)`, `size = ceil(n / count)`.
    #[must_use]
    pub fn resolve(self, n: usize) -> (usize, usize) {
        match self {
            Self::Size(requested) => {
                let size = clamp_positive(requested);
                (size, n.div_ceil(size))
            }
            Self::Count(requested) => {
                let count = clamp_positive(requested);
                (n.div_ceil(count), count)
            }
        }
    }
}

/// Clamps a requested sizing parameter to the minimum valid value of 1.
fn clamp_positive(requested: i64) -> usize {
    usize::try_from(requested).unwrap_or(0).max(1)
}

/// Randomly partitions `players` into teams under the given sizing policy.
///
/// An empty input yields an empty team list. Otherwise the players are
/// uniformly shuffled, split into consecutive chunks of the resolved
/// size (the final chunk may be shorter), and the chunk list is
/// truncated to the resolved count. Every player lands in exactly one
/// team unless dropped by that truncation; no player is duplicated.
#[must_use]
pub fn partition_teams<R: Rng + ?Sized>(
    players: &[Player],
    sizing: TeamSizing,
    rng: &mut R,
) -> Vec<Team> {
    if players.is_empty() {
        return Vec::new();
    }

    let (size, count) = sizing.resolve(players.len());

    let mut shuffled = players.to_vec();
    shuffled.shuffle(rng);

    shuffled
        .chunks(size)
        .take(count)
        .map(|chunk| Team(chunk.to_vec()))
        .collect()
}

/// Produces the "rolling name" reveal sequence for a draw countdown.
///
/// Returns `steps` names drawn uniformly (with replacement) from
/// `players`. Purely presentational: the sequence has no effect on any
/// partition and can be skipped entirely by passing zero steps.
#[must_use]
pub fn rolling_preview<R: Rng + ?Sized>(
    players: &[Player],
    steps: usize,
    rng: &mut R,
) -> Vec<String> {
    (0..steps)
        .filter_map(|_| players.choose(rng).map(|p| p.name.clone()))
        .collect()
}
