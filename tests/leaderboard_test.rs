//! Per-competition and twos leaderboards.

mod common;

use common::{round_with_bogeys, PARS};
use serde_json::Value;

fn names(board: &Value) -> Vec<String> {
    board
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["player"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn competition_leaderboard_sorted_by_points() {
    let app = common::spawn_app().await;
    let course_id = app.create_course().await;
    let competition_id = app.create_competition(course_id, "plain").await;

    let ann = app.create_player("Ann", 12.0).await;
    let bob = app.create_player("Bob", 8.0).await;
    let cal = app.create_player("Cal", 20.0).await;

    app.record_score(ann, competition_id, &round_with_bogeys(4)).await;
    app.record_score(bob, competition_id, &round_with_bogeys(0)).await;
    app.record_score(cal, competition_id, &round_with_bogeys(4)).await;

    let board = app
        .get_json(&format!("/api/competitions/{competition_id}/leaderboard"))
        .await;
    // Ann and Cal are level; storage order is kept
    assert_eq!(names(&board), vec!["Bob", "Ann", "Cal"]);
    assert_eq!(board[0]["points"], 36);
    assert_eq!(board[1]["points"], 32);
}

#[tokio::test]
async fn twos_leaderboard_counts_every_two() {
    let app = common::spawn_app().await;
    let course_id = app.create_course().await;
    let first = app.create_competition(course_id, "plain").await;
    let second = app.create_competition(course_id, "shots_adjusted_super_par").await;

    let ann = app.create_player("Ann", 12.0).await;
    let bob = app.create_player("Bob", 8.0).await;
    app.create_player("Cal", 20.0).await;

    // Holes 3, 7, 12 and 17 are par 3s
    let mut one_two = PARS.to_vec();
    one_two[2] = 2;
    let mut two_twos = PARS.to_vec();
    two_twos[6] = 2;
    two_twos[11] = 2;

    app.record_score(ann, first, &one_two).await;
    app.record_score(bob, first, &two_twos).await;
    app.record_score(ann, second, &two_twos).await;

    let board = app.get_json("/api/leaderboards/twos").await;
    assert_eq!(names(&board), vec!["Ann", "Bob", "Cal"]);
    assert_eq!(board[0]["twos"], 3);
    assert_eq!(board[1]["twos"], 2);
    assert_eq!(board[2]["twos"], 0);

    let player = app.get_json(&format!("/api/players/{ann}")).await;
    assert_eq!(player["twos"], 3);
    assert_eq!(player["birdies"], 3);
    assert_eq!(player["rounds"], 2);
}
