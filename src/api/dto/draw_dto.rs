//! Draw-related request and response bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DrawRecord, Team, TeamSizing};

/// Sizing mode discriminator for a draw request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum DrawMode {
    /// Fixed team size; team count follows from the player count.
    Size,
    /// Fixed team count; team size follows from the player count.
    Count,
}

/// Request body for `POST /api/draw`.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct DrawRequest {
    /// Which sizing parameter drives the partition.
    pub mode: DrawMode,
    /// Team size under `SIZE` mode. Non-positive values behave as 1.
    #[serde(default)]
    pub team_size: Option<i64>,
    /// Team count under `COUNT` mode. Non-positive values behave as 1.
    #[serde(default)]
    pub team_count: Option<i64>,
    /// Number of rolling-name reveal steps to include. Defaults to 0
    /// (no reveal sequence).
    #[serde(default)]
    pub reveal_steps: Option<usize>,
}

impl DrawRequest {
    /// Resolves the sizing policy, falling back to 1 for an absent
    /// parameter (the partitioner clamps non-positive values itself).
    #[must_use]
    pub fn sizing(&self) -> TeamSizing {
        match self.mode {
            DrawMode::Size => TeamSizing::Size(self.team_size.unwrap_or(1)),
            DrawMode::Count => TeamSizing::Count(self.team_count.unwrap_or(1)),
        }
    }
}

/// Response body for `POST /api/draw`.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct DrawResponse {
    /// When the draw was computed.
    pub drawn_at: DateTime<Utc>,
    /// Teams in draw order.
    pub teams: Vec<Team>,
    /// Rolling-name reveal sequence, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reveal: Option<Vec<String>>,
}

/// Response body for `GET /api/draw/history`.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HistoryResponse {
    /// Recorded draws, newest first.
    pub entries: Vec<DrawRecord>,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn mode_strings_are_uppercase() {
        let req: Option<DrawRequest> =
            serde_json::from_str(r#"{"mode":"SIZE","team_size":2}"#).ok();
        let Some(req) = req else {
            panic!("deserialization failed");
        };
        assert_eq!(req.sizing(), TeamSizing::Size(2));

        let req: Option<DrawRequest> =
            serde_json::from_str(r#"{"mode":"COUNT","team_count":3}"#).ok();
        let Some(req) = req else {
            panic!("deserialization failed");
        };
        assert_eq!(req.sizing(), TeamSizing::Count(3));
    }

    #[test]
    fn absent_parameter_falls_back_to_one() {
        let req: Option<DrawRequest> = serde_json::from_str(r#"{"mode":"SIZE"}"#).ok();
        let Some(req) = req else {
            panic!("deserialization failed");
        };
        assert_eq!(req.sizing(), TeamSizing::Size(1));
        assert_eq!(req.reveal_steps, None);
    }
}
