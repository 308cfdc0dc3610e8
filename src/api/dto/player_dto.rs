//! Roster-related request bodies.
//!
//! Responses echo [`crate::domain::Player`] directly; only the inbound
//! shapes need their own types.

use serde::Deserialize;

/// Query parameters for `GET /api/players`.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListPlayersParams {
    /// Case-insensitive substring filter on names. Display-only: a draw
    /// always uses the unfiltered roster.
    #[serde(default)]
    pub q: Option<String>,
}

/// Request body for `POST /api/players`.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreatePlayerRequest {
    /// Display name. Required and non-empty.
    #[serde(default)]
    pub name: Option<String>,
    /// Initial presence flag. Defaults to `true`.
    #[serde(default)]
    pub present: Option<bool>,
    /// Caller-supplied identifier. Generated when absent.
    #[serde(default)]
    pub id: Option<String>,
}

/// Request body for `PATCH /api/players/{id}`.
///
/// Absent fields retain their stored values.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdatePlayerRequest {
    /// New display name, if changing.
    #[serde(default)]
    pub name: Option<String>,
    /// New presence flag, if changing.
    #[serde(default)]
    pub present: Option<bool>,
}

/// Request body for `POST /api/players/toggleAll`.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct TogglePresenceRequest {
    /// Presence value applied to every player.
    pub present: bool,
}
