//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::{DrawService, RosterService};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Roster service for all player store operations.
    pub roster_service: Arc<RosterService>,
    /// Draw service owning the partitioner entry point and history.
    pub draw_service: Arc<DrawService>,
}
