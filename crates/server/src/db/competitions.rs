use chrono::NaiveDate;
use golf_core::ScoringMode;
use serde::Serialize;
use sqlx::PgPool;

use crate::error::AppError;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
    pub course_id: i64,
    /// Free-form label, e.g. "Stableford" or "Stroke Play".
    pub competition_type: String,
    #[sqlx(try_from = "String")]
    pub scoring_mode: ScoringMode,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCompetition {
    pub name: String,
    pub date: NaiveDate,
    pub course_id: i64,
    pub competition_type: String,
    pub scoring_mode: ScoringMode,
}

const COMPETITION_COLUMNS: &str =
    "id, name, date, course_id, competition_type, scoring_mode, created_at";

pub async fn create_competition(
    pool: &PgPool,
    competition: &NewCompetition,
) -> Result<Competition, AppError> {
    let query = format!(
        r#"INSERT INTO competitions (name, date, course_id, competition_type, scoring_mode)
           VALUES ($1, $2, $3, $4, $5)
           RETURNING {COMPETITION_COLUMNS}"#
    );
    sqlx::query_as::<_, Competition>(&query)
        .bind(&competition.name)
        .bind(competition.date)
        .bind(competition.course_id)
        .bind(&competition.competition_type)
        .bind(competition.scoring_mode.as_str())
        .fetch_one(pool)
        .await
        .map_err(AppError::Storage)
}

pub async fn get_competition(pool: &PgPool, id: i64) -> Result<Option<Competition>, AppError> {
    let query = format!("SELECT {COMPETITION_COLUMNS} FROM competitions WHERE id = $1");
    sqlx::query_as::<_, Competition>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(AppError::Storage)
}

pub async fn list_competitions(pool: &PgPool) -> Result<Vec<Competition>, AppError> {
    let query = format!("SELECT {COMPETITION_COLUMNS} FROM competitions ORDER BY date, id");
    sqlx::query_as::<_, Competition>(&query)
        .fetch_all(pool)
        .await
        .map_err(AppError::Storage)
}
