//! Domain layer: roster types, presence derivation, team partitioning,
//! and the bounded draw history.
//!
//! Everything here is plain data and pure logic. Persistence and HTTP
//! concerns live in their own layers; randomness enters only through an
//! explicit [`rand::Rng`] argument.

pub mod draw;
pub mod history;
pub mod partition;
pub mod player;
pub mod player_id;
pub mod presence;

pub use draw::{DrawRecord, Team};
pub use history::{DEFAULT_HISTORY_CAPACITY, DrawHistory};
pub use partition::{TeamSizing, partition_teams, rolling_preview};
pub use player::Player;
pub use player_id::PlayerId;
