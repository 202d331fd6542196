//! Season standings built from recorded cards.

mod common;

use common::round_with_bogeys;
use golf_core::TieSplit;
use serde_json::Value;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Eight players; the first two share 36 points, the rest finish 35, 34, .. 30.
async fn eight_player_field(app: &common::TestApp) -> (i64, Vec<i64>) {
    let course_id = app.create_course().await;
    let competition_id = app.create_competition(course_id, "plain").await;

    let mut player_ids = Vec::new();
    for i in 0..8usize {
        let player_id = app.create_player(&format!("Player {}", i + 1), 10.0).await;
        let bogeys = i.saturating_sub(1);
        let resp = app
            .record_score(player_id, competition_id, &round_with_bogeys(bogeys))
            .await;
        assert_eq!(resp.status(), 200);
        player_ids.push(player_id);
    }
    (competition_id, player_ids)
}

fn points_for(board: &Value, player_id: i64) -> f64 {
    board
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["playerId"] == player_id)
        .and_then(|s| s["grandPrixPoints"].as_f64())
        .unwrap()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

/// Two tied for first split (10 + 8) evenly under the default slot-sum rule.
#[tokio::test]
async fn tie_for_first_splits_slot_sum() {
    let app = common::spawn_app().await;
    let (competition_id, players) = eight_player_field(&app).await;

    let board = app.get_json("/api/leaderboards/overall").await;
    assert_eq!(points_for(&board, players[0]), 9.0);
    assert_eq!(points_for(&board, players[1]), 9.0);
    assert_eq!(points_for(&board, players[2]), 6.0);
    assert_eq!(points_for(&board, players[7]), 1.0);

    let placements = app
        .get_json(&format!("/api/competitions/{competition_id}/grand-prix"))
        .await;
    let placements = placements.as_array().unwrap();
    assert_eq!(placements[0]["rank"], 1);
    assert_eq!(placements[1]["rank"], 1);
    assert_eq!(placements[1]["tied"], true);
    assert_eq!(placements[2]["rank"], 3);
}

/// The legacy rule hands both tied players the full first-place value.
#[tokio::test]
async fn tie_for_first_legacy_flag() {
    let app = common::spawn_app().await;
    let (_, players) = eight_player_field(&app).await;

    let board = app
        .get_json("/api/leaderboards/overall?tieSplit=legacy")
        .await;
    assert_eq!(points_for(&board, players[0]), 10.0);
    assert_eq!(points_for(&board, players[1]), 10.0);
    assert_eq!(points_for(&board, players[2]), 6.0);
}

/// The configured default applies when no query flag is given.
#[tokio::test]
async fn configured_legacy_default() {
    let app = common::spawn_app_with(TieSplit::Legacy).await;
    let (_, players) = eight_player_field(&app).await;

    let board = app.get_json("/api/leaderboards/overall").await;
    assert_eq!(points_for(&board, players[0]), 10.0);

    let board = app.get_json("/api/leaderboards/overall?tieSplit=sum").await;
    assert_eq!(points_for(&board, players[0]), 9.0);
}

/// Re-running the aggregation without new cards changes nothing.
#[tokio::test]
async fn standings_are_idempotent() {
    let app = common::spawn_app().await;
    eight_player_field(&app).await;

    let first = app.get_json("/api/leaderboards/overall").await;
    let second = app.get_json("/api/leaderboards/overall").await;
    assert_eq!(first, second);
}

/// A new competition only adds the points it awards.
#[tokio::test]
async fn new_competition_adds_only_its_points() {
    let app = common::spawn_app().await;
    let (_, players) = eight_player_field(&app).await;
    let before = app.get_json("/api/leaderboards/overall").await;

    let course_id = app.create_course().await;
    let second = app.create_competition(course_id, "plain").await;
    // Player 8 wins outright, player 3 comes second; nobody else plays.
    app.record_score(players[7], second, &round_with_bogeys(0)).await;
    app.record_score(players[2], second, &round_with_bogeys(3)).await;

    let after = app.get_json("/api/leaderboards/overall").await;
    assert_eq!(points_for(&after, players[7]) - points_for(&before, players[7]), 10.0);
    assert_eq!(points_for(&after, players[2]) - points_for(&before, players[2]), 8.0);
    for &player_id in &[players[0], players[1], players[4]] {
        assert_eq!(points_for(&after, player_id), points_for(&before, player_id));
    }

    // Overall board is sorted by Grand-Prix points
    let values: Vec<f64> = after
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["grandPrixPoints"].as_f64().unwrap())
        .collect();
    assert!(values.windows(2).all(|w| w[0] >= w[1]));
}

/// Player records expose the derived Grand-Prix total.
#[tokio::test]
async fn player_view_includes_grand_prix() {
    let app = common::spawn_app().await;
    let (_, players) = eight_player_field(&app).await;

    let player = app.get_json(&format!("/api/players/{}", players[0])).await;
    assert_eq!(player["grandPrixPoints"], 9.0);
    assert_eq!(player["rounds"], 1);
    assert_eq!(player["pars"], 18);
}
