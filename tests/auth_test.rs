//! Shared-secret gate on mutating requests.

mod common;

use serde_json::{json, Value};

#[tokio::test]
async fn mutation_without_key_is_rejected() {
    let app = common::spawn_app().await;

    let resp = app
        .client
        .post(app.url("/api/players"))
        .json(&json!({ "name": "Sneaky", "handicap": 5.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["kind"], "Unauthorized");

    let players = app.get_json("/api/players").await;
    assert_eq!(players.as_array().unwrap().len(), 0, "Nothing should be created");
}

#[tokio::test]
async fn mutation_with_wrong_key_is_rejected() {
    let app = common::spawn_app().await;
    let player_id = app.create_player("Ann Lee", 12.0).await;

    let resp = app
        .client
        .put(app.url(&format!("/api/players/{player_id}")))
        .header("x-api-key", "not-the-key")
        .json(&json!({ "handicap": 1.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);

    let player = app.get_json(&format!("/api/players/{player_id}")).await;
    assert_eq!(player["handicap"], 12.0);
}

#[tokio::test]
async fn reads_need_no_key() {
    let app = common::spawn_app().await;
    for path in [
        "/health",
        "/api/players",
        "/api/courses",
        "/api/competitions",
        "/api/leaderboards/overall",
        "/api/leaderboards/twos",
    ] {
        let resp = app.get(path).await;
        assert_eq!(resp.status(), 200, "GET {path} should not need a key");
    }
}

#[tokio::test]
async fn update_with_key_succeeds() {
    let app = common::spawn_app().await;
    let player_id = app.create_player("Ann Lee", 12.0).await;

    let resp = app
        .client
        .put(app.url(&format!("/api/players/{player_id}")))
        .header("x-api-key", common::API_KEY)
        .json(&json!({ "handicap": 10.4 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["handicap"], 10.4);
}
