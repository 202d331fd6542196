use axum::{extract::Path, Extension, Json};
use golf_core::{handicap, round};
use serde::Deserialize;

use crate::db::courses::Course;
use crate::db::players::Player;
use crate::db::scores::{NewScore, Score};
use crate::db::Db;
use crate::error::AppError;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordScoreRequest {
    pub player_id: i64,
    pub competition_id: i64,
    pub hole_by_hole_scores: Vec<i32>,
    /// Overrides the allocation derived from the player's handicap.
    pub shots_received: Option<Vec<i32>>,
}

/// Handicap shots per hole from the player's handicap and the course setup.
fn derive_shots(player: &Player, course: &Course) -> Result<Vec<i32>, AppError> {
    let course_handicap =
        handicap::course_handicap(player.handicap, course.course_rating, course.slope_rating)?;
    let playing = handicap::playing_handicap(course_handicap);
    Ok(handicap::shots_received(playing, &course.stroke_indexes)?)
}

/// POST /api/scores
pub async fn record_score(
    Extension(db): Extension<Db>,
    Json(req): Json<RecordScoreRequest>,
) -> Result<Json<Score>, AppError> {
    let competition = db
        .get_competition(req.competition_id)
        .await?
        .ok_or(AppError::NotFound("Competition not found".into()))?;
    let player = db
        .get_player(req.player_id)
        .await?
        .ok_or(AppError::NotFound("Player not found".into()))?;
    let course = db
        .get_course(competition.course_id)
        .await?
        .ok_or(AppError::NotFound("Course for competition not found".into()))?;

    let shots_received = match req.shots_received {
        Some(shots) => shots,
        None => derive_shots(&player, &course)?,
    };

    // Everything is validated before the single insert below.
    let round = round::score_round(
        &req.hole_by_hole_scores,
        &course.par_values,
        competition.scoring_mode,
        Some(&shots_received),
    )?;

    let score = db
        .create_score(&NewScore {
            player_id: player.id,
            competition_id: competition.id,
            hole_scores: req.hole_by_hole_scores,
            shots_received,
            round,
        })
        .await?;

    tracing::info!(
        score_id = score.id,
        player_id = score.player_id,
        competition_id = score.competition_id,
        strokes = score.total_strokes,
        points = score.points,
        "Recorded score"
    );
    Ok(Json(score))
}

/// GET /api/scores/{score_id}
pub async fn get_score(
    Extension(db): Extension<Db>,
    Path(score_id): Path<i64>,
) -> Result<Json<Score>, AppError> {
    let score = db
        .get_score(score_id)
        .await?
        .ok_or(AppError::NotFound("Score not found".into()))?;
    Ok(Json(score))
}
