//! # teamdraw
//!
//! Self-hosted REST service for managing a player roster and drawing
//! random teams. A single SQLite table holds the roster; draws shuffle
//! the present players into teams by fixed size or fixed count, and a
//! bounded in-process history keeps the most recent results.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── RosterService / DrawService (service/)
//!     │
//!     ├── Player, partition, presence, DrawHistory (domain/)
//!     │
//!     └── SQLite persistence (persistence/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
