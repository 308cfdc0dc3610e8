//! Persistence layer: SQLite-backed player storage.
//!
//! The `players` table is the sole durable collection. The concrete
//! implementation uses `sqlx::SqlitePool` for async SQLite access.

pub mod sqlite;

pub use sqlite::PlayerStore;
