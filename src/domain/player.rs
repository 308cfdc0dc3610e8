//! Roster player record.

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// A single roster entry.
///
/// `id` is assigned at creation and immutable thereafter. `present`
/// defaults to `true` for newly created players and marks eligibility
/// for team draws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Player {
    /// Unique identifier (immutable after creation).
    pub id: PlayerId,
    /// Display name. Non-empty for every stored record.
    pub name: String,
    /// Whether the player is present and eligible for draws.
    pub present: bool,
}

impl Player {
    /// Creates a new player with a freshly generated id.
    #[must_use]
    pub fn new(name: String, present: bool) -> Self {
        Self {
            id: PlayerId::generate(),
            name,
            present,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_assigns_distinct_ids() {
        let a = Player::new("Alice".to_string(), true);
        let b = Player::new("Alice".to_string(), true);
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, b.name);
    }

    #[test]
    fn serde_shape_matches_wire_contract() {
        let player = Player {
            id: PlayerId::from("abc123xy"),
            name: "Alice".to_string(),
            present: true,
        };
        let json = serde_json::to_value(&player).ok();
        assert_eq!(
            json,
            Some(serde_json::json!({
                "id": "abc123xy",
                "name": "Alice",
                "present": true,
            }))
        );
    }
}
