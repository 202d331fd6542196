//! Round scorer: folds the per-hole classifier over a full card.

use serde::{Deserialize, Serialize};

use crate::error::ScoringError;
use crate::scoring::{HoleOutcome, HoleResult, ScoreCategory, ScoringMode};

/// Summary of one round.
///
/// Category counts and twos are always gross (plain convention). The mode
/// decides how `super_par_points` is computed and which total is `points`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundScore {
    pub mode: ScoringMode,
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
}

impl RoundScore {
    pub fn holes_scored(&self) -> i32 {
        self.eagles + self.birdies + self.pars + self.bogeys + self.doubles_or_worse
    }

    fn record(
        &mut self,
        strokes: i32,
        outcome: &HoleOutcome,
        super_par: i32,
    ) -> Result<(), ScoringError> {
        self.total_strokes = self
            .total_strokes
            .checked_add(strokes)
            .ok_or(ScoringError::TotalOverflow)?;
        self.stableford_points += outcome.stableford;
        self.super_par_points += super_par;
        match outcome.category {
            ScoreCategory::EagleOrBetter => self.eagles += 1,
            ScoreCategory::Birdie => self.birdies += 1,
            ScoreCategory::Par => self.pars += 1,
            ScoreCategory::Bogey => self.bogeys += 1,
            ScoreCategory::DoubleOrWorse => self.doubles_or_worse += 1,
        }
        if outcome.is_two {
            self.twos += 1;
        }
        Ok(())
    }
}

/// Score a card of holes in order.
pub fn score_holes(holes: &[HoleResult], mode: ScoringMode) -> Result<RoundScore, ScoringError> {
    if holes.is_empty() {
        return Err(ScoringError::NoHoles);
    }

    let mut round = RoundScore {
        mode,
        ..RoundScore::default()
    };

    for (i, hole) in holes.iter().enumerate() {
        let outcome = hole.plain().map_err(|e| e.at_hole(i + 1))?;
        let super_par = match mode {
            ScoringMode::Plain => outcome.super_par,
            ScoringMode::ShotsAdjustedSuperPar => {
                hole.super_par_adjusted().map_err(|e| e.at_hole(i + 1))?
            }
        };
        round.record(hole.strokes, &outcome, super_par)?;
    }

    round.points = match mode {
        ScoringMode::Plain => round.stableford_points,
        ScoringMode::ShotsAdjustedSuperPar => round.super_par_points,
    };
    Ok(round)
}

/// Score raw strokes against the course's pars.
///
/// `shots_received`, when given, must line up with the pars. It only affects
/// the shots-adjusted mode.
pub fn score_round(
    strokes: &[i32],
    pars: &[i32],
    mode: ScoringMode,
    shots_received: Option<&[i32]>,
) -> Result<RoundScore, ScoringError> {
    if pars.is_empty() {
        return Err(ScoringError::NoHoles);
    }
    if strokes.len() != pars.len() {
        return Err(ScoringError::HoleCountMismatch {
            expected: pars.len(),
            actual: strokes.len(),
        });
    }
    if let Some(shots) = shots_received {
        if shots.len() != pars.len() {
            return Err(ScoringError::HoleCountMismatch {
                expected: pars.len(),
                actual: shots.len(),
            });
        }
    }

    let holes: Vec<HoleResult> = strokes
        .iter()
        .zip(pars)
        .enumerate()
        .map(|(i, (&s, &p))| {
            let shots = shots_received.map_or(0, |sr| sr[i]);
            HoleResult::new(p, s).with_shots(shots)
        })
        .collect();

    score_holes(&holes, mode)
}
