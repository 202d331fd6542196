use serde::Serialize;
use sqlx::PgPool;

use crate::error::AppError;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub handicap: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

pub async fn create_player(pool: &PgPool, name: &str, handicap: f64) -> Result<Player, AppError> {
    sqlx::query_as::<_, Player>(
        r#"INSERT INTO players (name, handicap)
           VALUES ($1, $2)
           RETURNING id, name, handicap, created_at"#,
    )
    .bind(name)
    .bind(handicap)
    .fetch_one(pool)
    .await
    .map_err(AppError::Storage)
}

pub async fn get_player(pool: &PgPool, id: i64) -> Result<Option<Player>, AppError> {
    sqlx::query_as::<_, Player>("SELECT id, name, handicap, created_at FROM players WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(AppError::Storage)
}

pub async fn list_players(pool: &PgPool) -> Result<Vec<Player>, AppError> {
    sqlx::query_as::<_, Player>("SELECT id, name, handicap, created_at FROM players ORDER BY id")
        .fetch_all(pool)
        .await
        .map_err(AppError::Storage)
}

pub async fn name_exists(pool: &PgPool, name: &str) -> Result<bool, AppError> {
    let row: (bool,) = sqlx::query_as(
        "SELECT EXISTS(SELECT 1 FROM players WHERE LOWER(name) = LOWER($1))",
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .map_err(AppError::Storage)?;
    Ok(row.0)
}

pub async fn update_handicap(
    pool: &PgPool,
    id: i64,
    handicap: f64,
) -> Result<Option<Player>, AppError> {
    sqlx::query_as::<_, Player>(
        r#"UPDATE players SET handicap = $1 WHERE id = $2
           RETURNING id, name, handicap, created_at"#,
    )
    .bind(handicap)
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(AppError::Storage)
}
