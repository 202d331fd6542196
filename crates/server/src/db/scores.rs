use golf_core::{CompetitionResult, RoundScore, ScoringMode};
use serde::Serialize;
use sqlx::PgPool;

use crate::error::AppError;

/// A recorded card. Immutable once stored.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub id: i64,
    pub player_id: i64,
    pub competition_id: i64,
    #[sqlx(try_from = "String")]
    pub scoring_mode: ScoringMode,
    pub hole_scores: Vec<i32>,
    pub shots_received: Vec<i32>,
    pub total_strokes: i32,
    pub stableford_points: i32,
    pub super_par_points: i32,
    pub points: i32,
    pub eagles: i32,
    pub birdies: i32,
    pub pars: i32,
    pub bogeys: i32,
    pub doubles_or_worse: i32,
    pub twos: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Score {
    pub fn round(&self) -> RoundScore {
        RoundScore {
            mode: self.scoring_mode,
            total_strokes: self.total_strokes,
            stableford_points: self.stableford_points,
            super_par_points: self.super_par_points,
            points: self.points,
            eagles: self.eagles,
            birdies: self.birdies,
            pars: self.pars,
            bogeys: self.bogeys,
            doubles_or_worse: self.doubles_or_worse,
            twos: self.twos,
        }
    }

    pub fn result(&self) -> CompetitionResult {
        CompetitionResult {
            competition_id: self.competition_id,
            player_id: self.player_id,
            points: self.points,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewScore {
    pub player_id: i64,
    pub competition_id: i64,
    pub hole_scores: Vec<i32>,
    pub shots_received: Vec<i32>,
    pub round: RoundScore,
}

const SCORE_COLUMNS: &str = r#"id, player_id, competition_id, scoring_mode, hole_scores, shots_received,
    total_strokes, stableford_points, super_par_points, points,
    eagles, birdies, pars, bogeys, doubles_or_worse, twos, created_at"#;

pub async fn create_score(pool: &PgPool, score: &NewScore) -> Result<Score, AppError> {
    let r = &score.round;
    let query = format!(
        r#"INSERT INTO scores (
               player_id, competition_id, scoring_mode, hole_scores, shots_received,
               total_strokes, stableford_points, super_par_points, points,
               eagles, birdies, pars, bogeys, doubles_or_worse, twos
           )
           VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
           RETURNING {SCORE_COLUMNS}"#
    );
    sqlx::query_as::<_, Score>(&query)
        .bind(score.player_id)
        .bind(score.competition_id)
        .bind(r.mode.as_str())
        .bind(&score.hole_scores)
        .bind(&score.shots_received)
        .bind(r.total_strokes)
        .bind(r.stableford_points)
        .bind(r.super_par_points)
        .bind(r.points)
        .bind(r.eagles)
        .bind(r.birdies)
        .bind(r.pars)
        .bind(r.bogeys)
        .bind(r.doubles_or_worse)
        .bind(r.twos)
        .fetch_one(pool)
        .await
        .map_err(AppError::Storage)
}

pub async fn get_score(pool: &PgPool, id: i64) -> Result<Option<Score>, AppError> {
    let query = format!("SELECT {SCORE_COLUMNS} FROM scores WHERE id = $1");
    sqlx::query_as::<_, Score>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(AppError::Storage)
}

pub async fn scores_for_competition(
    pool: &PgPool,
    competition_id: i64,
) -> Result<Vec<Score>, AppError> {
    let query = format!("SELECT {SCORE_COLUMNS} FROM scores WHERE competition_id = $1 ORDER BY id");
    sqlx::query_as::<_, Score>(&query)
        .bind(competition_id)
        .fetch_all(pool)
        .await
        .map_err(AppError::Storage)
}

pub async fn scores_for_player(pool: &PgPool, player_id: i64) -> Result<Vec<Score>, AppError> {
    let query = format!("SELECT {SCORE_COLUMNS} FROM scores WHERE player_id = $1 ORDER BY id");
    sqlx::query_as::<_, Score>(&query)
        .bind(player_id)
        .fetch_all(pool)
        .await
        .map_err(AppError::Storage)
}

pub async fn list_scores(pool: &PgPool) -> Result<Vec<Score>, AppError> {
    let query = format!("SELECT {SCORE_COLUMNS} FROM scores ORDER BY id");
    sqlx::query_as::<_, Score>(&query)
        .fetch_all(pool)
        .await
        .map_err(AppError::Storage)
}
