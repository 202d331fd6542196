//! Course handicap and per-hole shot allocation.

use crate::error::ScoringError;

/// Slope of a course of standard difficulty.
pub const STANDARD_SLOPE: f64 = 113.0;

/// Course rating the handicap formula is normalised against.
pub const SCRATCH_RATING: f64 = 72.0;

/// `round(handicap * slope / 113 + (rating - 72), 1)`.
///
/// Rounds half away from zero at one decimal place.
pub fn course_handicap(
    player_handicap: f64,
    course_rating: f64,
    slope_rating: f64,
) -> Result<f64, ScoringError> {
    for (field, value) in [
        ("Player handicap", player_handicap),
        ("Course rating", course_rating),
    ] {
        if !value.is_finite() {
            return Err(ScoringError::NotFinite { field, value });
        }
    }
    if !slope_rating.is_finite() || slope_rating <= 0.0 {
        return Err(ScoringError::InvalidSlope(slope_rating));
    }
    let raw = player_handicap * (slope_rating / STANDARD_SLOPE) + (course_rating - SCRATCH_RATING);
    Ok((raw * 10.0).round() / 10.0)
}

/// Whole strokes a player receives over the round. Plus handicaps receive none.
pub fn playing_handicap(course_handicap: f64) -> i32 {
    course_handicap.round().max(0.0) as i32
}

/// Stroke indexes must rank every hole exactly once, 1 being the hardest.
pub fn validate_stroke_indexes(stroke_indexes: &[i32]) -> Result<(), ScoringError> {
    let holes = stroke_indexes.len();
    if holes == 0 {
        return Err(ScoringError::NoHoles);
    }
    let mut sorted = stroke_indexes.to_vec();
    sorted.sort_unstable();
    let is_permutation = sorted
        .iter()
        .enumerate()
        .all(|(i, &si)| si == i as i32 + 1);
    if !is_permutation {
        return Err(ScoringError::InvalidStrokeIndexes { holes });
    }
    Ok(())
}

/// Shots received on each hole, in hole order.
///
/// Every hole gets `playing_handicap / holes`; the remaining
/// `playing_handicap % holes` shots go to the holes with the lowest stroke
/// index.
pub fn shots_received(playing_handicap: i32, stroke_indexes: &[i32]) -> Result<Vec<i32>, ScoringError> {
    validate_stroke_indexes(stroke_indexes)?;
    let holes = stroke_indexes.len() as i32;
    let strokes = playing_handicap.max(0);
    let base = strokes / holes;
    let extra = strokes % holes;

    Ok(stroke_indexes
        .iter()
        .map(|&si| base + i32::from(si <= extra))
        .collect())
}
