//! Roster endpoints: list, create, update, delete, toggle-all, replace-all.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{
    CreatePlayerRequest, ListPlayersParams, TogglePresenceRequest, UpdatePlayerRequest,
};
use crate::app_state::AppState;
use crate::domain::{Player, PlayerId, presence};
use crate::error::{ApiError, ErrorResponse};

/// `GET /api/players` — Full roster, optionally filtered for display.
///
/// # Errors
///
/// Returns [`ApiError::Persistence`] on database failure.
#[utoipa::path(
    get,
    path = "/api/players",
    tag = "Players",
    summary = "List all players",
    description = "Returns the roster. The optional `q` parameter narrows the listing by case-insensitive name substring; it never affects draw eligibility.",
    params(ListPlayersParams),
    responses(
        (status = 200, description = "The (possibly filtered) roster", body = Vec<Player>),
    )
)]
pub async fn list_players(
    State(state): State<AppState>,
    Query(params): Query<ListPlayersParams>,
) -> Result<impl IntoResponse, ApiError> {
    let roster = state.roster_service.list().await?;
    let roster = match params.q {
        Some(query) => presence::filter_by_text(&roster, &query),
        None => roster,
    };
    Ok(Json(roster))
}

/// `POST /api/players` — Create a player.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] when `name` is missing or empty.
#[utoipa::path(
    post,
    path = "/api/players",
    tag = "Players",
    summary = "Create a player",
    description = "Creates a player with presence defaulting to true. An id is generated unless the caller supplies one.",
    request_body = CreatePlayerRequest,
    responses(
        (status = 200, description = "The created player", body = Player),
        (status = 400, description = "Missing or empty name", body = ErrorResponse),
    )
)]
pub async fn create_player(
    State(state): State<AppState>,
    Json(req): Json<CreatePlayerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let player = state
        .roster_service
        .create(req.name, req.present, req.id.map(PlayerId::from))
        .await?;
    Ok(Json(player))
}

/// `PATCH /api/players/{id}` — Merge fields into an existing player.
///
/// # Errors
///
/// Returns [`ApiError::PlayerNotFound`] when the id is unknown.
#[utoipa::path(
    patch,
    path = "/api/players/{id}",
    tag = "Players",
    summary = "Update a player",
    description = "Merges the provided fields into the stored record; absent fields keep their prior values.",
    params(
        ("id" = String, Path, description = "Player identifier"),
    ),
    request_body = UpdatePlayerRequest,
    responses(
        (status = 200, description = "The merged player", body = Player),
        (status = 404, description = "Unknown player id", body = ErrorResponse),
    )
)]
pub async fn update_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdatePlayerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let player = state
        .roster_service
        .update(&PlayerId::from(id), req.name, req.present)
        .await?;
    Ok(Json(player))
}

/// `DELETE /api/players/{id}` — Remove a player.
///
/// Succeeds unconditionally: deleting an unknown id is a no-op.
///
/// # Errors
///
/// Returns [`ApiError::Persistence`] on database failure.
#[utoipa::path(
    delete,
    path = "/api/players/{id}",
    tag = "Players",
    summary = "Delete a player",
    params(
        ("id" = String, Path, description = "Player identifier"),
    ),
    responses(
        (status = 204, description = "Player removed (or was already absent)"),
    )
)]
pub async fn delete_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.roster_service.remove(&PlayerId::from(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /api/players/toggleAll` — Set presence for every player.
///
/// # Errors
///
/// Returns [`ApiError::Persistence`] on database failure.
#[utoipa::path(
    post,
    path = "/api/players/toggleAll",
    tag = "Players",
    summary = "Set presence for all players",
    request_body = TogglePresenceRequest,
    responses(
        (status = 200, description = "The full updated roster", body = Vec<Player>),
    )
)]
pub async fn toggle_all(
    State(state): State<AppState>,
    Json(req): Json<TogglePresenceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let roster = state.roster_service.set_all_presence(req.present).await?;
    Ok(Json(roster))
}

/// `PUT /api/players` — Atomically replace the whole roster.
///
/// The payload is hand-parsed so that any non-array body maps to a 400
/// validation error rather than a generic rejection.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] when the payload is not an array of
/// well-formed player records.
#[utoipa::path(
    put,
    path = "/api/players",
    tag = "Players",
    summary = "Replace the roster",
    description = "Discards the entire collection and inserts the supplied players, preserving caller ids and presence values. Atomic: a malformed record leaves the prior roster untouched.",
    request_body = Vec<Player>,
    responses(
        (status = 204, description = "Roster replaced"),
        (status = 400, description = "Payload is not an array of player records", body = ErrorResponse),
    )
)]
pub async fn replace_players(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> Result<impl IntoResponse, ApiError> {
    let players = parse_roster(&payload)?;
    state.roster_service.replace_all(players).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Roster routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/players",
            get(list_players).post(create_player).put(replace_players),
        )
        .route("/players/toggleAll", post(toggle_all))
        .route(
            "/players/{id}",
            axum::routing::patch(update_player).delete(delete_player),
        )
}

// ── Payload Parsing Helpers ─────────────────────────────────────────────

/// Parses the `PUT /api/players` payload into player records.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] when the payload is not an array or
/// any element is missing `id` or `name`.
fn parse_roster(payload: &serde_json::Value) -> Result<Vec<Player>, ApiError> {
    let items = payload.as_array().ok_or_else(|| {
        ApiError::Validation("payload must be an array of players".to_string())
    })?;
    items.iter().map(parse_player_record).collect()
}

/// Parses one bulk-replace element. `present` is optional and defaults
/// to `false` when absent or not a boolean.
fn parse_player_record(val: &serde_json::Value) -> Result<Player, ApiError> {
    let id = val
        .get("id")
        .and_then(|v| v.as_str())
        .ok_or_else(|| ApiError::Validation("missing player id".to_string()))?;
    let name = val
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| ApiError::Validation("missing player name".to_string()))?;
    let present = val
        .get("present")
        .and_then(serde_json::Value::as_bool)
        .unwrap_or(false);

    Ok(Player {
        id: PlayerId::from(id),
        name: name.to_string(),
        present,
    })
}
