//! Grand-Prix season standings.
//!
//! Each competition ranks its field by points (descending). Players on equal
//! points share a placement and split the placement points of the slots they
//! occupy, rounded down to the nearest half point. Season totals are always
//! rebuilt from the full result history, so re-running the aggregation over
//! the same results gives the same standings.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScoringError;

/// Placement points for 1st..8th. Anything lower scores nothing.
pub const PLACEMENT_POINTS: [i64; 8] = [10, 8, 6, 5, 4, 3, 2, 1];

/// Table value of a 0-based finishing slot.
pub fn slot_value(position: usize) -> i64 {
    PLACEMENT_POINTS.get(position).copied().unwrap_or(0)
}

/// How a tied group's placement points are computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieSplit {
    /// Sum the table value of every slot the group occupies.
    #[default]
    SlotSum,
    /// Every member contributes the value of the group's first slot, as the
    /// earliest standings sheets did. Kept for comparing against old results.
    Legacy,
}

impl TieSplit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TieSplit::SlotSum => "sum",
            TieSplit::Legacy => "legacy",
        }
    }

    /// Points each member of a tied group receives.
    ///
    /// `start` is the group's first 0-based slot and `size` the number of
    /// players in it.
    pub fn share(self, start: usize, size: usize) -> f64 {
        if size == 0 {
            return 0.0;
        }
        let total: i64 = match self {
            TieSplit::SlotSum => (start..start + size).map(slot_value).sum(),
            TieSplit::Legacy => slot_value(start.min(PLACEMENT_POINTS.len())) * size as i64,
        };
        // floor(total / size * 2) / 2 in integer arithmetic
        ((total * 2) / size as i64) as f64 / 2.0
    }
}

impl fmt::Display for TieSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TieSplit {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sum" | "slot_sum" => Ok(TieSplit::SlotSum),
            "legacy" => Ok(TieSplit::Legacy),
            other => Err(ScoringError::UnknownTieSplit(other.to_string())),
        }
    }
}

/// A player's points in one competition, as stored on their score card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionResult {
    pub competition_id: i64,
    pub player_id: i64,
    pub points: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub player_id: i64,
    pub points: i32,
    /// 1-indexed; tied players share the rank of the group's first slot.
    pub rank: usize,
    pub tied: bool,
    pub grand_prix_points: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSeasonTotals {
    pub competition_points: i64,
    pub grand_prix_points: f64,
    pub competitions_played: u32,
}

/// Rank one competition's field and award placement points.
///
/// A player with several cards in the same competition is ranked on their
/// best one.
pub fn rank_competition(results: &[CompetitionResult], split: TieSplit) -> Vec<Placement> {
    let mut best: BTreeMap<i64, i32> = BTreeMap::new();
    for r in results {
        best.entry(r.player_id)
            .and_modify(|p| *p = (*p).max(r.points))
            .or_insert(r.points);
    }

    let mut field: Vec<(i64, i32)> = best.into_iter().collect();
    field.sort_by(|a, b| b.1.cmp(&a.1));

    let mut placements = Vec::with_capacity(field.len());
    let mut start = 0;
    while start < field.len() {
        let points = field[start].1;
        let end = field[start..]
            .iter()
            .position(|&(_, p)| p != points)
            .map_or(field.len(), |offset| start + offset);
        let size = end - start;
        let share = split.share(start, size);

        for &(player_id, points) in &field[start..end] {
            placements.push(Placement {
                player_id,
                points,
                rank: start + 1,
                tied: size > 1,
                grand_prix_points: share,
            });
        }
        start = end;
    }
    placements
}

/// Rebuild every player's season totals from the complete result history.
pub fn season_totals(
    results: &[CompetitionResult],
    split: TieSplit,
) -> BTreeMap<i64, PlayerSeasonTotals> {
    let mut by_competition: BTreeMap<i64, Vec<CompetitionResult>> = BTreeMap::new();
    for r in results {
        by_competition.entry(r.competition_id).or_default().push(*r);
    }

    let mut totals: BTreeMap<i64, PlayerSeasonTotals> = BTreeMap::new();
    for field in by_competition.values() {
        for placement in rank_competition(field, split) {
            let entry = totals.entry(placement.player_id).or_default();
            entry.competition_points += i64::from(placement.points);
            entry.grand_prix_points += placement.grand_prix_points;
            entry.competitions_played += 1;
        }
    }
    totals
}
