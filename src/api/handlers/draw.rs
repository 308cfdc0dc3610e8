//! Draw endpoints: run a draw, read the history.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{DrawRequest, DrawResponse, HistoryResponse};
use crate::app_state::AppState;
use crate::error::ApiError;

/// `POST /api/draw` — Partition the present players into random teams.
///
/// Eligibility is the unfiltered present set of the stored roster. The
/// optional reveal sequence is presentational and computed separately
/// from the partition.
///
/// # Errors
///
/// Returns [`ApiError::Persistence`] when the roster cannot be read.
#[utoipa::path(
    post,
    path = "/api/draw",
    tag = "Draws",
    summary = "Draw random teams",
    description = "Shuffles the present players and splits them into teams by fixed size or fixed count. The result is appended to the draw history. Non-positive sizing parameters behave as 1.",
    request_body = DrawRequest,
    responses(
        (status = 200, description = "The drawn teams", body = DrawResponse),
    )
)]
pub async fn run_draw(
    State(state): State<AppState>,
    Json(req): Json<DrawRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let roster = state.roster_service.list().await?;

    let reveal_steps = req.reveal_steps.unwrap_or(0);
    let reveal = (reveal_steps > 0).then(|| state.draw_service.reveal(&roster, reveal_steps));

    let record = state.draw_service.draw(&roster, req.sizing()).await;

    Ok(Json(DrawResponse {
        drawn_at: record.drawn_at,
        teams: record.teams,
        reveal,
    }))
}

/// `GET /api/draw/history` — Recorded draws, newest first.
#[utoipa::path(
    get,
    path = "/api/draw/history",
    tag = "Draws",
    summary = "List past draws",
    description = "Returns the bounded in-process draw history (most recent first).",
    responses(
        (status = 200, description = "Past draws", body = HistoryResponse),
    )
)]
pub async fn get_history(State(state): State<AppState>) -> impl IntoResponse {
    let entries = state.draw_service.history().await;
    Json(HistoryResponse { entries })
}

/// Draw routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/draw", post(run_draw))
        .route("/draw/history", get(get_history))
}
