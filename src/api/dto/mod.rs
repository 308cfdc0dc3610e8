//! Request/response body types for the REST API.

pub mod draw_dto;
pub mod player_dto;

pub use draw_dto::{DrawMode, DrawRequest, DrawResponse, HistoryResponse};
pub use player_dto::{
    CreatePlayerRequest, ListPlayersParams, TogglePresenceRequest, UpdatePlayerRequest,
};
