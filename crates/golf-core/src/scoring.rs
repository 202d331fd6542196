//! Per-hole scoring.
//!
//! Two conventions live side by side and are never merged:
//! - plain (gross) differential scoring, which yields a category, Stableford
//!   points, Super Par points and the "twos" flag;
//! - shots-adjusted Super Par, which only looks at par / one under / two or
//!   more under and doubles the points on holes where a handicap shot is
//!   received.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScoringError;

/// Gross result of a hole relative to par. Exactly one per scored hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    EagleOrBetter,
    Birdie,
    Par,
    Bogey,
    DoubleOrWorse,
}

impl ScoreCategory {
    /// Category from `strokes - par`.
    pub fn from_diff(diff: i32) -> Self {
        match diff {
            d if d <= -2 => ScoreCategory::EagleOrBetter,
            -1 => ScoreCategory::Birdie,
            0 => ScoreCategory::Par,
            1 => ScoreCategory::Bogey,
            _ => ScoreCategory::DoubleOrWorse,
        }
    }

    pub fn stableford(self) -> i32 {
        match self {
            ScoreCategory::EagleOrBetter => 4,
            ScoreCategory::Birdie => 3,
            ScoreCategory::Par => 2,
            ScoreCategory::Bogey => 1,
            ScoreCategory::DoubleOrWorse => 0,
        }
    }

    pub fn super_par(self) -> i32 {
        match self {
            ScoreCategory::EagleOrBetter => 4,
            ScoreCategory::Birdie => 2,
            ScoreCategory::Par => 1,
            ScoreCategory::Bogey | ScoreCategory::DoubleOrWorse => 0,
        }
    }
}

/// Which points value a competition ranks on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// Gross Stableford.
    #[default]
    Plain,
    /// Super Par with points doubled on holes where a shot is received.
    ShotsAdjustedSuperPar,
}

impl ScoringMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringMode::Plain => "plain",
            ScoringMode::ShotsAdjustedSuperPar => "shots_adjusted_super_par",
        }
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoringMode {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(ScoringMode::Plain),
            "shots_adjusted_super_par" => Ok(ScoringMode::ShotsAdjustedSuperPar),
            other => Err(ScoringError::UnknownScoringMode(other.to_string())),
        }
    }
}

impl TryFrom<String> for ScoringMode {
    type Error = ScoringError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One hole as played: par, gross strokes, and handicap shots received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoleResult {
    pub par: i32,
    pub strokes: i32,
    #[serde(default)]
    pub shots_received: i32,
}

/// Plain-convention classification of a single hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoleOutcome {
    pub category: ScoreCategory,
    pub stableford: i32,
    pub super_par: i32,
    /// Holed in exactly two strokes, whatever the par.
    pub is_two: bool,
}

impl HoleResult {
    pub fn new(par: i32, strokes: i32) -> Self {
        Self {
            par,
            strokes,
            shots_received: 0,
        }
    }

    pub fn with_shots(mut self, shots_received: i32) -> Self {
        self.shots_received = shots_received;
        self
    }

    pub fn validate(&self) -> Result<(), ScoringError> {
        if self.strokes <= 0 {
            return Err(ScoringError::InvalidStrokes(self.strokes));
        }
        if self.par <= 0 {
            return Err(ScoringError::InvalidPar(self.par));
        }
        if self.shots_received < 0 {
            return Err(ScoringError::InvalidShotsReceived(self.shots_received));
        }
        Ok(())
    }

    pub fn diff(&self) -> i32 {
        self.strokes - self.par
    }

    /// Plain differential scoring. Shots received are ignored.
    pub fn plain(&self) -> Result<HoleOutcome, ScoringError> {
        self.validate()?;
        let category = ScoreCategory::from_diff(self.diff());
        Ok(HoleOutcome {
            category,
            stableford: category.stableford(),
            super_par: category.super_par(),
            is_two: self.strokes == 2,
        })
    }

    /// Shots-adjusted Super Par points for this hole.
    pub fn super_par_adjusted(&self) -> Result<i32, ScoringError> {
        self.validate()?;
        let base = match self.diff() {
            0 => 1,
            -1 => 2,
            d if d <= -2 => 4,
            _ => 0,
        };
        Ok(if self.shots_received > 0 { base * 2 } else { base })
    }
}

/// Classify a hole with the plain convention.
pub fn classify_plain(strokes: i32, par: i32) -> Result<HoleOutcome, ScoringError> {
    HoleResult::new(par, strokes).plain()
}

/// Super Par points for a hole, doubled when `shots_received > 0`.
pub fn super_par_adjusted(strokes: i32, par: i32, shots_received: i32) -> Result<i32, ScoringError> {
    HoleResult::new(par, strokes)
        .with_shots(shots_received)
        .super_par_adjusted()
}
