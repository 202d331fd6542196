use axum::{extract::Query, Json};
use golf_core::handicap;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::error::AppError;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandicapQuery {
    pub player_handicap: f64,
    pub course_rating: f64,
    pub slope_rating: f64,
}

/// GET /api/handicap?playerHandicap=..&courseRating=..&slopeRating=..
pub async fn course_handicap(Query(q): Query<HandicapQuery>) -> Result<Json<JsonValue>, AppError> {
    let course_handicap =
        handicap::course_handicap(q.player_handicap, q.course_rating, q.slope_rating)?;
    Ok(Json(serde_json::json!({
        "courseHandicap": course_handicap,
        "playingHandicap": handicap::playing_handicap(course_handicap),
    })))
}
