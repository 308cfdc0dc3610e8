//! End-to-end API tests: boot the server on an ephemeral port and drive
//! it over real HTTP.

// `serde_json::Value` indexing yields Null rather than panicking.
#![allow(clippy::indexing_slicing)]

use std::sync::Arc;

use serde_json::{Value, json};
use sqlx::sqlite::SqlitePoolOptions;

use teamdraw::api;
use teamdraw::app_state::AppState;
use teamdraw::persistence::PlayerStore;
use teamdraw::service::{DrawService, RosterService};

/// Boots a server over a fresh seeded in-memory database and returns
/// its base URL.
async fn spawn_server() -> anyhow::Result<String> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    let store = PlayerStore::new(pool);
    store.init_schema().await?;
    store.seed_defaults().await?;

    let state = AppState {
        roster_service: Arc::new(RosterService::new(store)),
        draw_service: Arc::new(DrawService::new(20)),
    };

    let app = api::build_router().with_state(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(format!("http://{addr}"))
}

#[tokio::test]
async fn health_reports_healthy() -> anyhow::Result<()> {
    let base = spawn_server().await?;
    let body: Value = reqwest::get(format!("{base}/health")).await?.json().await?;
    assert_eq!(body["status"], "healthy");
    Ok(())
}

#[tokio::test]
async fn roster_starts_with_the_seeded_defaults() -> anyhow::Result<()> {
    let base = spawn_server().await?;
    let roster: Vec<Value> = reqwest::get(format!("{base}/api/players"))
        .await?
        .json()
        .await?;

    assert_eq!(roster.len(), 4);
    let mut names: Vec<&str> = roster.iter().filter_map(|p| p["name"].as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, ["Alice", "Bob", "Charly", "Dora"]);
    assert!(roster.iter().all(|p| p["present"] == json!(true)));
    Ok(())
}

#[tokio::test]
async fn create_update_delete_round_trip() -> anyhow::Result<()> {
    let base = spawn_server().await?;
    let client = reqwest::Client::new();

    let created: Value = client
        .post(format!("{base}/api/players"))
        .json(&json!({"name": "Julien"}))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(created["name"], "Julien");
    assert_eq!(created["present"], json!(true));
    let id = created["id"].as_str().unwrap_or_default().to_string();
    assert!(!id.is_empty());

    let merged: Value = client
        .patch(format!("{base}/api/players/{id}"))
        .json(&json!({"present": false}))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(merged["name"], "Julien", "name kept on partial update");
    assert_eq!(merged["present"], json!(false));

    let roster: Vec<Value> = client
        .get(format!("{base}/api/players"))
        .send()
        .await?
        .json()
        .await?;
    let julien = roster.iter().find(|p| p["id"] == json!(id.as_str()));
    assert_eq!(julien.map(|p| p["present"].clone()), Some(json!(false)));
    assert_eq!(
        roster.iter().filter(|p| p["present"] == json!(true)).count(),
        4,
        "other players untouched"
    );

    let deleted = client
        .delete(format!("{base}/api/players/{id}"))
        .send()
        .await?;
    assert_eq!(deleted.status(), reqwest::StatusCode::NO_CONTENT);

    // Deleting again still succeeds.
    let again = client
        .delete(format!("{base}/api/players/{id}"))
        .send()
        .await?;
    assert_eq!(again.status(), reqwest::StatusCode::NO_CONTENT);
    Ok(())
}

#[tokio::test]
async fn create_without_name_is_a_validation_error() -> anyhow::Result<()> {
    let base = spawn_server().await?;
    let client = reqwest::Client::new();

    for payload in [json!({}), json!({"name": ""})] {
        let response = client
            .post(format!("{base}/api/players"))
            .json(&payload)
            .send()
            .await?;
        assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
        let body: Value = response.json().await?;
        assert_eq!(body["error"]["code"], json!(1001));
    }
    Ok(())
}

#[tokio::test]
async fn update_unknown_id_is_not_found() -> anyhow::Result<()> {
    let base = spawn_server().await?;
    let response = reqwest::Client::new()
        .patch(format!("{base}/api/players/ghost"))
        .json(&json!({"present": true}))
        .send()
        .await?;
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    let body: Value = response.json().await?;
    assert_eq!(body["error"]["code"], json!(2001));
    Ok(())
}

#[tokio::test]
async fn list_filter_narrows_by_name_substring() -> anyhow::Result<()> {
    let base = spawn_server().await?;
    let filtered: Vec<Value> = reqwest::get(format!("{base}/api/players?q=ob"))
        .await?
        .json()
        .await?;
    let names: Vec<&str> = filtered.iter().filter_map(|p| p["name"].as_str()).collect();
    assert_eq!(names, ["Bob"]);

    // Blank query returns everything.
    let all: Vec<Value> = reqwest::get(format!("{base}/api/players?q="))
        .await?
        .json()
        .await?;
    assert_eq!(all.len(), 4);
    Ok(())
}

#[tokio::test]
async fn toggle_all_returns_the_updated_roster() -> anyhow::Result<()> {
    let base = spawn_server().await?;
    let roster: Vec<Value> = reqwest::Client::new()
        .post(format!("{base}/api/players/toggleAll"))
        .json(&json!({"present": false}))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(roster.len(), 4);
    assert!(roster.iter().all(|p| p["present"] == json!(false)));
    Ok(())
}

#[tokio::test]
async fn replace_all_swaps_and_clears_the_roster() -> anyhow::Result<()> {
    let base = spawn_server().await?;
    let client = reqwest::Client::new();

    let replaced = client
        .put(format!("{base}/api/players"))
        .json(&json!([
            {"id": "n1", "name": "New One", "present": true},
            {"id": "n2", "name": "New Two", "present": false},
        ]))
        .send()
        .await?;
    assert_eq!(replaced.status(), reqwest::StatusCode::NO_CONTENT);

    let roster: Vec<Value> = client
        .get(format!("{base}/api/players"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(roster.len(), 2);

    let cleared = client
        .put(format!("{base}/api/players"))
        .json(&json!([]))
        .send()
        .await?;
    assert_eq!(cleared.status(), reqwest::StatusCode::NO_CONTENT);

    let roster: Vec<Value> = client
        .get(format!("{base}/api/players"))
        .send()
        .await?
        .json()
        .await?;
    assert!(roster.is_empty());
    Ok(())
}

#[tokio::test]
async fn replace_all_rejects_non_array_payloads() -> anyhow::Result<()> {
    let base = spawn_server().await?;
    let response = reqwest::Client::new()
        .put(format!("{base}/api/players"))
        .json(&json!({"not": "an array"}))
        .send()
        .await?;
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: Value = response.json().await?;
    assert_eq!(body["error"]["code"], json!(1001));
    Ok(())
}

#[tokio::test]
async fn draw_partitions_the_present_players() -> anyhow::Result<()> {
    let base = spawn_server().await?;
    let client = reqwest::Client::new();

    let draw: Value = client
        .post(format!("{base}/api/draw"))
        .json(&json!({"mode": "SIZE", "team_size": 2}))
        .send()
        .await?
        .json()
        .await?;

    let teams = draw["teams"].as_array().cloned().unwrap_or_default();
    assert_eq!(teams.len(), 2, "4 present players at size 2");
    assert!(
        teams
            .iter()
            .all(|t| t.as_array().map(Vec::len) == Some(2))
    );
    assert!(draw.get("reveal").is_none(), "no reveal unless requested");

    let history: Value = client
        .get(format!("{base}/api/draw/history"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(
        history["entries"].as_array().map(Vec::len),
        Some(1),
        "draw recorded"
    );
    Ok(())
}

#[tokio::test]
async fn draw_with_reveal_includes_the_name_sequence() -> anyhow::Result<()> {
    let base = spawn_server().await?;
    let draw: Value = reqwest::Client::new()
        .post(format!("{base}/api/draw"))
        .json(&json!({"mode": "COUNT", "team_count": 2, "reveal_steps": 5}))
        .send()
        .await?
        .json()
        .await?;

    assert_eq!(draw["reveal"].as_array().map(Vec::len), Some(5));
    let teams = draw["teams"].as_array().cloned().unwrap_or_default();
    let sizes: Vec<usize> = teams
        .iter()
        .filter_map(|t| t.as_array().map(Vec::len))
        .collect();
    assert_eq!(sizes, [2, 2], "4 present players split into 2 teams");
    Ok(())
}
