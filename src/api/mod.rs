//! REST API layer: route handlers, DTOs, and router composition.
//!
//! Roster and draw endpoints are mounted under `/api`; system endpoints
//! live at the root.

pub mod dto;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI document covering every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    paths(
        handlers::player::list_players,
        handlers::player::create_player,
        handlers::player::update_player,
        handlers::player::delete_player,
        handlers::player::toggle_all,
        handlers::player::replace_players,
        handlers::draw::run_draw,
        handlers::draw::get_history,
        handlers::system::health_handler,
    ),
    components(schemas(
        crate::domain::Player,
        crate::domain::PlayerId,
        crate::domain::Team,
        crate::domain::DrawRecord,
        crate::error::ErrorResponse,
        crate::error::ErrorBody,
        dto::CreatePlayerRequest,
        dto::UpdatePlayerRequest,
        dto::TogglePresenceRequest,
        dto::DrawMode,
        dto::DrawRequest,
        dto::DrawResponse,
        dto::HistoryResponse,
    )),
    tags(
        (name = "Players", description = "Roster management"),
        (name = "Draws", description = "Random team draws and history"),
        (name = "System", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
///
/// With the `swagger-ui` feature enabled (the default), the interactive
/// documentation is served at `/swagger-ui` backed by
/// `/api-docs/openapi.json`.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .nest("/api", handlers::routes())
        .merge(handlers::system::routes());

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    router
}
