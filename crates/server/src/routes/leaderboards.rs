use axum::{extract::Query, Extension, Json};
use golf_core::leaderboard::{self, GrandPrixStanding, TwosStanding};
use golf_core::TieSplit;
use serde::Deserialize;

use crate::config::Config;
use crate::db::Db;
use crate::error::AppError;
use crate::standings;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrandPrixQuery {
    /// `sum` (default) or `legacy`.
    pub tie_split: Option<String>,
}

impl GrandPrixQuery {
    pub fn resolve(&self, config: &Config) -> Result<TieSplit, AppError> {
        match self.tie_split.as_deref() {
            Some(s) => Ok(s.parse()?),
            None => Ok(config.tie_split),
        }
    }
}

/// GET /api/leaderboards/overall
pub async fn overall_leaderboard(
    Extension(db): Extension<Db>,
    Extension(config): Extension<Config>,
    Query(q): Query<GrandPrixQuery>,
) -> Result<Json<Vec<GrandPrixStanding>>, AppError> {
    let split = q.resolve(&config)?;
    let season = standings::load(&db, split).await?;
    Ok(Json(leaderboard::grand_prix_leaderboard(
        season.player_names(),
        &season.totals,
    )))
}

/// GET /api/leaderboards/twos
pub async fn twos_leaderboard(
    Extension(db): Extension<Db>,
    Extension(config): Extension<Config>,
) -> Result<Json<Vec<TwosStanding>>, AppError> {
    let season = standings::load(&db, config.tie_split).await?;
    Ok(Json(leaderboard::twos_leaderboard(
        season.player_names(),
        &season.stats,
    )))
}
