//! SQLite implementation of the player store.

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

use crate::domain::{Player, PlayerId};
use crate::error::ApiError;

/// Names inserted on first initialization when the table is empty.
const DEFAULT_ROSTER: [&str; 4] = ["Alice", "Bob", "Charly", "Dora"];

/// SQLite-backed player store using `sqlx::SqlitePool`.
///
/// Sole owner of the `players` table. Every mutating method has durably
/// committed before it returns `Ok`.
#[derive(Debug, Clone)]
pub struct PlayerStore {
    pool: SqlitePool,
}

impl PlayerStore {
    /// Creates a store over an existing connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens (creating if missing) the database at `url` and returns a
    /// store over a fresh pool.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] if the URL is malformed or the
    /// database cannot be opened.
    pub async fn connect(
        url: &str,
        max_connections: u32,
        connect_timeout: Duration,
    ) -> Result<Self, ApiError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| ApiError::Persistence(e.to_string()))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(connect_timeout)
            .connect_with(options)
            .await?;

        Ok(Self::new(pool))
    }

    /// Creates the `players` table if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn init_schema(&self) -> Result<(), ApiError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS players (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                present INTEGER NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Inserts the default roster when the table is empty.
    ///
    /// Returns `true` if the defaults were inserted.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn seed_defaults(&self) -> Result<bool, ApiError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM players")
            .fetch_one(&self.pool)
            .await?;
        if count > 0 {
            return Ok(false);
        }

        for name in DEFAULT_ROSTER {
            let player = Player {
                id: PlayerId::generate(),
                name: name.to_string(),
                present: true,
            };
            self.insert(&player).await?;
        }
        Ok(true)
    }

    /// Returns all players.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn list(&self) -> Result<Vec<Player>, ApiError> {
        let rows = sqlx::query_as::<_, (String, String, bool)>(
            "SELECT id, name, present FROM players",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name, present)| Player {
                id: PlayerId::from(id),
                name,
                present,
            })
            .collect())
    }

    /// Returns the player with the given id, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn get(&self, id: &PlayerId) -> Result<Option<Player>, ApiError> {
        let row = sqlx::query_as::<_, (String, String, bool)>(
            "SELECT id, name, present FROM players WHERE id = ?1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(id, name, present)| Player {
            id: PlayerId::from(id),
            name,
            present,
        }))
    }

    /// Inserts a new player row.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure, including
    /// a duplicate id.
    pub async fn insert(&self, player: &Player) -> Result<(), ApiError> {
        sqlx::query("INSERT INTO players (id, name, present) VALUES (?1, ?2, ?3)")
            .bind(player.id.as_str())
            .bind(&player.name)
            .bind(player.present)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Writes the full row for an existing player.
    ///
    /// Returns the number of rows affected (0 when the id is unknown).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn update(&self, player: &Player) -> Result<u64, ApiError> {
        let result = sqlx::query("UPDATE players SET name = ?1, present = ?2 WHERE id = ?3")
            .bind(&player.name)
            .bind(player.present)
            .bind(player.id.as_str())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Deletes the player row if it exists. Missing ids are a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn delete(&self, id: &PlayerId) -> Result<(), ApiError> {
        sqlx::query("DELETE FROM players WHERE id = ?1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Sets every row's presence flag in one statement.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn set_all_presence(&self, present: bool) -> Result<(), ApiError> {
        sqlx::query("UPDATE players SET present = ?1")
            .bind(present)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Atomically replaces the whole collection with the given players.
    ///
    /// Runs delete-all plus the inserts in a single transaction, so a
    /// failure partway leaves the prior roster untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn replace_all(&self, players: &[Player]) -> Result<(), ApiError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM players").execute(&mut *tx).await?;
        for player in players {
            sqlx::query("INSERT INTO players (id, name, present) VALUES (?1, ?2, ?3)")
                .bind(player.id.as_str())
                .bind(&player.name)
                .bind(player.present)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}
