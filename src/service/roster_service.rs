//! Roster service: validation and orchestration over the player store.

use crate::domain::{Player, PlayerId};
use crate::error::ApiError;
use crate::persistence::PlayerStore;

/// Orchestration layer for all roster operations.
///
/// Stateless coordinator: owns a handle to the [`PlayerStore`] and
/// enforces the validation and merge rules on top of it. Every mutation
/// method returns only after the store has durably persisted the change.
#[derive(Debug, Clone)]
pub struct RosterService {
    store: PlayerStore,
}

impl RosterService {
    /// Creates a new `RosterService`.
    #[must_use]
    pub fn new(store: PlayerStore) -> Self {
        Self { store }
    }

    /// Returns a reference to the underlying store.
    #[must_use]
    pub fn store(&self) -> &PlayerStore {
        &self.store
    }

    /// Returns the full roster.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn list(&self) -> Result<Vec<Player>, ApiError> {
        self.store.list().await
    }

    /// Creates a player. Presence defaults to `true`; an id is generated
    /// when the caller does not supply one.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when `name` is missing or empty,
    /// or [`ApiError::Persistence`] on database failure.
    pub async fn create(
        &self,
        name: Option<String>,
        present: Option<bool>,
        id: Option<PlayerId>,
    ) -> Result<Player, ApiError> {
        let name = match name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(ApiError::Validation("name required".to_string())),
        };

        let player = Player {
            id: id.unwrap_or_else(PlayerId::generate),
            name,
            present: present.unwrap_or(true),
        };
        self.store.insert(&player).await?;

        tracing::info!(id = %player.id, name = %player.name, "player created");
        Ok(player)
    }

    /// Merges the provided fields into an existing player and persists
    /// the result. Absent fields retain their prior values.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::PlayerNotFound`] when the id is unknown, or
    /// [`ApiError::Persistence`] on database failure.
    pub async fn update(
        &self,
        id: &PlayerId,
        name: Option<String>,
        present: Option<bool>,
    ) -> Result<Player, ApiError> {
        let existing = self
            .store
            .get(id)
            .await?
            .ok_or_else(|| ApiError::PlayerNotFound(id.to_string()))?;

        let merged = Player {
            id: existing.id,
            name: name.unwrap_or(existing.name),
            present: present.unwrap_or(existing.present),
        };
        self.store.update(&merged).await?;

        tracing::info!(id = %merged.id, "player updated");
        Ok(merged)
    }

    /// Deletes the player if present. Unknown ids succeed silently.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn remove(&self, id: &PlayerId) -> Result<(), ApiError> {
        self.store.delete(id).await?;
        tracing::info!(%id, "player deleted");
        Ok(())
    }

    /// Sets every player's presence flag in one atomic step and returns
    /// the updated roster.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn set_all_presence(&self, present: bool) -> Result<Vec<Player>, ApiError> {
        self.store.set_all_presence(present).await?;
        tracing::info!(present, "presence toggled for all players");
        self.store.list().await
    }

    /// Atomically replaces the whole roster with the given players,
    /// preserving caller-supplied ids and presence values.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure (prior
    /// state is left untouched).
    pub async fn replace_all(&self, players: Vec<Player>) -> Result<(), ApiError> {
        self.store.replace_all(&players).await?;
        tracing::info!(count = players.len(), "roster replaced");
        Ok(())
    }
}
