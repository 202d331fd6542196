#![allow(dead_code)]

use golf_core::TieSplit;
use reqwest::{Client, Response};
use serde_json::{json, Value};
use server::config::Config;
use server::db::Db;

pub const API_KEY: &str = "test-society-key";

/// Par 71 layout used by most tests.
pub const PARS: [i32; 18] = [4, 4, 3, 5, 4, 4, 3, 5, 4, 4, 4, 3, 4, 4, 4, 5, 3, 4];
pub const STROKE_INDEXES: [i32; 18] = [7, 15, 11, 3, 1, 13, 17, 5, 9, 8, 16, 12, 4, 2, 14, 18, 6, 10];
pub const YARDAGES: [i32; 18] = [
    410, 385, 165, 520, 440, 360, 150, 505, 395, 420, 375, 180, 430, 455, 340, 530, 175, 400,
];

pub struct TestApp {
    pub base_url: String,
    pub client: Client,
}

/// Start a server on an ephemeral port with a fresh in-memory store.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(TieSplit::SlotSum).await
}

pub async fn spawn_app_with(tie_split: TieSplit) -> TestApp {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();

    let config = Config {
        database_url: None,
        api_key: API_KEY.to_string(),
        tie_split,
        host: addr.ip().to_string(),
        port: addr.port(),
    };
    tokio::spawn(server::serve(listener, Db::memory(), config));

    TestApp {
        base_url: format!("http://{addr}"),
        client: Client::new(),
    }
}

/// All pars, with the first `n` holes dropped to bogeys.
pub fn round_with_bogeys(n: usize) -> Vec<i32> {
    PARS.iter()
        .enumerate()
        .map(|(i, &p)| if i < n { p + 1 } else { p })
        .collect()
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET")
    }

    pub async fn get_json(&self, path: &str) -> Value {
        let resp = self.get(path).await;
        assert_eq!(resp.status(), 200, "GET {path} should succeed");
        resp.json().await.unwrap()
    }

    pub async fn post(&self, path: &str, body: &Value) -> Response {
        self.client
            .post(self.url(path))
            .header("x-api-key", API_KEY)
            .json(body)
            .send()
            .await
            .expect("Failed to send POST")
    }

    pub async fn post_ok(&self, path: &str, body: &Value) -> Value {
        let resp = self.post(path, body).await;
        assert_eq!(resp.status(), 200, "POST {path} should succeed");
        resp.json().await.unwrap()
    }

    pub async fn create_player(&self, name: &str, handicap: f64) -> i64 {
        let body = self
            .post_ok("/api/players", &json!({ "name": name, "handicap": handicap }))
            .await;
        body["id"].as_i64().unwrap()
    }

    pub async fn create_course(&self) -> i64 {
        let body = self
            .post_ok(
                "/api/courses",
                &json!({
                    "name": "Parkland",
                    "location": "Yorkshire",
                    "parValues": PARS,
                    "strokeIndexes": STROKE_INDEXES,
                    "holeYardages": YARDAGES,
                    "courseRating": 72.0,
                    "slopeRating": 113.0,
                }),
            )
            .await;
        body["id"].as_i64().unwrap()
    }

    pub async fn create_competition(&self, course_id: i64, scoring_mode: &str) -> i64 {
        let body = self
            .post_ok(
                "/api/competitions",
                &json!({
                    "name": "Monthly Medal",
                    "date": "2025-05-17",
                    "courseId": course_id,
                    "competitionType": "Stableford",
                    "scoringMode": scoring_mode,
                }),
            )
            .await;
        body["id"].as_i64().unwrap()
    }

    pub async fn record_score(&self, player_id: i64, competition_id: i64, strokes: &[i32]) -> Response {
        self.post(
            "/api/scores",
            &json!({
                "playerId": player_id,
                "competitionId": competition_id,
                "holeByHoleScores": strokes,
            }),
        )
        .await
    }
}
