//! Service layer: business logic orchestration.
//!
//! [`RosterService`] coordinates roster mutations against the player
//! store; [`DrawService`] runs team draws and owns the draw history.

pub mod draw_service;
pub mod roster_service;

pub use draw_service::DrawService;
pub use roster_service::RosterService;
