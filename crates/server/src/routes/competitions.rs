use std::collections::HashMap;

use axum::{extract::Path, extract::Query, Extension, Json};
use chrono::NaiveDate;
use golf_core::grand_prix;
use golf_core::leaderboard::{self, CompetitionStanding};
use golf_core::{CompetitionResult, ScoringMode};
use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::config::Config;
use crate::db::competitions::{Competition, NewCompetition};
use crate::db::scores::Score;
use crate::db::Db;
use crate::error::AppError;
use crate::routes::leaderboards::GrandPrixQuery;
use crate::routes::players::validate_name;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompetitionRequest {
    pub name: String,
    pub date: NaiveDate,
    pub course_id: i64,
    pub competition_type: String,
    pub scoring_mode: Option<ScoringMode>,
}

async fn find_competition(db: &Db, competition_id: i64) -> Result<Competition, AppError> {
    db.get_competition(competition_id)
        .await?
        .ok_or(AppError::NotFound("Competition not found".into()))
}

async fn player_names(db: &Db) -> Result<HashMap<i64, String>, AppError> {
    Ok(db
        .list_players()
        .await?
        .into_iter()
        .map(|p| (p.id, p.name))
        .collect())
}

/// POST /api/competitions
pub async fn create_competition(
    Extension(db): Extension<Db>,
    Json(req): Json<CreateCompetitionRequest>,
) -> Result<Json<Competition>, AppError> {
    let name = validate_name(&req.name, "Competition")?;
    let competition_type = req.competition_type.trim().to_string();
    if competition_type.is_empty() {
        return Err(AppError::InvalidInput("Competition type cannot be empty".into()));
    }

    db.get_course(req.course_id)
        .await?
        .ok_or(AppError::NotFound("Course not found".into()))?;

    let competition = db
        .create_competition(&NewCompetition {
            name,
            date: req.date,
            course_id: req.course_id,
            competition_type,
            scoring_mode: req.scoring_mode.unwrap_or_default(),
        })
        .await?;

    tracing::info!(
        competition_id = competition.id,
        course_id = competition.course_id,
        mode = %competition.scoring_mode,
        "Created competition {}",
        competition.name
    );
    Ok(Json(competition))
}

/// GET /api/competitions
pub async fn list_competitions(
    Extension(db): Extension<Db>,
) -> Result<Json<Vec<Competition>>, AppError> {
    Ok(Json(db.list_competitions().await?))
}

/// GET /api/competitions/{competition_id}
pub async fn get_competition(
    Extension(db): Extension<Db>,
    Path(competition_id): Path<i64>,
) -> Result<Json<Competition>, AppError> {
    Ok(Json(find_competition(&db, competition_id).await?))
}

/// GET /api/competitions/{competition_id}/scores
pub async fn get_competition_scores(
    Extension(db): Extension<Db>,
    Path(competition_id): Path<i64>,
) -> Result<Json<Vec<Score>>, AppError> {
    find_competition(&db, competition_id).await?;
    Ok(Json(db.scores_for_competition(competition_id).await?))
}

/// GET /api/competitions/{competition_id}/leaderboard
/// Every card in the competition by points under the competition's scoring mode.
pub async fn get_competition_leaderboard(
    Extension(db): Extension<Db>,
    Path(competition_id): Path<i64>,
) -> Result<Json<Vec<CompetitionStanding>>, AppError> {
    find_competition(&db, competition_id).await?;
    let scores = db.scores_for_competition(competition_id).await?;
    let names = player_names(&db).await?;

    let entries = scores
        .iter()
        .map(|s| CompetitionStanding {
            player_id: s.player_id,
            player: names.get(&s.player_id).cloned().unwrap_or_default(),
            points: s.points,
        })
        .collect();

    Ok(Json(leaderboard::competition_leaderboard(entries)))
}

/// GET /api/competitions/{competition_id}/grand-prix
/// Placement points this competition contributes to the season standings.
pub async fn get_competition_grand_prix(
    Extension(db): Extension<Db>,
    Extension(config): Extension<Config>,
    Path(competition_id): Path<i64>,
    Query(q): Query<GrandPrixQuery>,
) -> Result<Json<Vec<JsonValue>>, AppError> {
    let split = q.resolve(&config)?;
    find_competition(&db, competition_id).await?;
    let results: Vec<CompetitionResult> = db
        .scores_for_competition(competition_id)
        .await?
        .iter()
        .map(Score::result)
        .collect();
    let names = player_names(&db).await?;

    let placements = grand_prix::rank_competition(&results, split)
        .into_iter()
        .map(|p| {
            serde_json::json!({
                "rank": p.rank,
                "tied": p.tied,
                "playerId": p.player_id,
                "player": names.get(&p.player_id),
                "points": p.points,
                "grandPrixPoints": p.grand_prix_points,
            })
        })
        .collect();

    Ok(Json(placements))
}
