use axum::{extract::Path, Extension, Json};
use golf_core::PlayerStats;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::db::players::Player;
use crate::db::scores::Score;
use crate::db::Db;
use crate::error::AppError;
use crate::standings::{self, Season};

const MAX_NAME_LEN: usize = 100;
const MIN_HANDICAP: f64 = -10.0;
const MAX_HANDICAP: f64 = 54.0;

#[derive(Deserialize)]
pub struct CreatePlayerRequest {
    pub name: String,
    pub handicap: Option<f64>,
}

#[derive(Deserialize)]
pub struct UpdatePlayerRequest {
    pub handicap: f64,
}

/// A player with the counters derived from their recorded rounds.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    #[serde(flatten)]
    pub player: Player,
    #[serde(flatten)]
    pub stats: PlayerStats,
    pub grand_prix_points: f64,
}

impl PlayerResponse {
    fn from_season(player: Player, season: &Season) -> Self {
        let stats = season.stats_for(player.id);
        let grand_prix_points = season.totals_for(player.id).grand_prix_points;
        Self {
            player,
            stats,
            grand_prix_points,
        }
    }
}

pub(crate) fn validate_name(name: &str, what: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::InvalidInput(format!("{what} name cannot be empty")));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::InvalidInput(format!(
            "{what} name must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(name.to_string())
}

fn validate_handicap(handicap: f64) -> Result<f64, AppError> {
    if !handicap.is_finite() || !(MIN_HANDICAP..=MAX_HANDICAP).contains(&handicap) {
        return Err(AppError::InvalidInput(format!(
            "Handicap must be between {MIN_HANDICAP} and {MAX_HANDICAP}"
        )));
    }
    Ok(handicap)
}

/// POST /api/players
pub async fn create_player(
    Extension(db): Extension<Db>,
    Json(req): Json<CreatePlayerRequest>,
) -> Result<Json<PlayerResponse>, AppError> {
    let name = validate_name(&req.name, "Player")?;
    let handicap = validate_handicap(req.handicap.unwrap_or(0.0))?;

    if db.player_name_exists(&name).await? {
        return Err(AppError::Conflict(format!("Player '{name}' already exists")));
    }

    let player = db.create_player(&name, handicap).await?;
    tracing::info!(player_id = player.id, "Created player {}", player.name);

    Ok(Json(PlayerResponse {
        player,
        stats: PlayerStats::default(),
        grand_prix_points: 0.0,
    }))
}

/// GET /api/players
pub async fn list_players(
    Extension(db): Extension<Db>,
    Extension(config): Extension<Config>,
) -> Result<Json<Vec<PlayerResponse>>, AppError> {
    let season = standings::load(&db, config.tie_split).await?;
    let players = season
        .players
        .iter()
        .cloned()
        .map(|p| PlayerResponse::from_season(p, &season))
        .collect();
    Ok(Json(players))
}

/// GET /api/players/{player_id}
pub async fn get_player(
    Extension(db): Extension<Db>,
    Extension(config): Extension<Config>,
    Path(player_id): Path<i64>,
) -> Result<Json<PlayerResponse>, AppError> {
    let season = standings::load(&db, config.tie_split).await?;
    let player = season
        .players
        .iter()
        .find(|p| p.id == player_id)
        .cloned()
        .ok_or(AppError::NotFound("Player not found".into()))?;
    Ok(Json(PlayerResponse::from_season(player, &season)))
}

/// PUT /api/players/{player_id}
pub async fn update_player(
    Extension(db): Extension<Db>,
    Path(player_id): Path<i64>,
    Json(req): Json<UpdatePlayerRequest>,
) -> Result<Json<Player>, AppError> {
    let handicap = validate_handicap(req.handicap)?;
    let player = db
        .update_player_handicap(player_id, handicap)
        .await?
        .ok_or(AppError::NotFound("Player not found".into()))?;
    tracing::info!(player_id, handicap, "Updated handicap");
    Ok(Json(player))
}

/// GET /api/players/{player_id}/scores
pub async fn get_player_scores(
    Extension(db): Extension<Db>,
    Path(player_id): Path<i64>,
) -> Result<Json<Vec<Score>>, AppError> {
    db.get_player(player_id)
        .await?
        .ok_or(AppError::NotFound("Player not found".into()))?;
    Ok(Json(db.scores_for_player(player_id).await?))
}
