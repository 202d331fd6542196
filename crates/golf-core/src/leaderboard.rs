//! Read-side leaderboard projections.
//!
//! All sorts are stable and descending; players level on the sorted value keep
//! the order they were supplied in.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::grand_prix::PlayerSeasonTotals;
use crate::round::RoundScore;

/// Per-player counters summed over recorded rounds. Never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub rounds: i32,
    pub twos: i32,
    pub eagles: i32,
    pub birdies: i32,
    pub pars: i32,
    pub bogeys: i32,
    pub doubles_or_worse: i32,
}

impl PlayerStats {
    pub fn add_round(&mut self, round: &RoundScore) {
        self.rounds = self.rounds.saturating_add(1);
        self.twos = self.twos.saturating_add(round.twos);
        self.eagles = self.eagles.saturating_add(round.eagles);
        self.birdies = self.birdies.saturating_add(round.birdies);
        self.pars = self.pars.saturating_add(round.pars);
        self.bogeys = self.bogeys.saturating_add(round.bogeys);
        self.doubles_or_worse = self.doubles_or_worse.saturating_add(round.doubles_or_worse);
    }
}

/// Stats for every player appearing in `(player_id, round)` pairs.
pub fn stats_by_player<'a>(
    rounds: impl IntoIterator<Item = (i64, &'a RoundScore)>,
) -> HashMap<i64, PlayerStats> {
    let mut stats: HashMap<i64, PlayerStats> = HashMap::new();
    for (player_id, round) in rounds {
        stats.entry(player_id).or_default().add_round(round);
    }
    stats
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrandPrixStanding {
    pub player_id: i64,
    pub player: String,
    pub grand_prix_points: f64,
    pub competition_points: i64,
    pub competitions_played: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TwosStanding {
    pub player_id: i64,
    pub player: String,
    pub twos: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionStanding {
    pub player_id: i64,
    pub player: String,
    pub points: i32,
}

/// Every player, by accumulated Grand-Prix points.
pub fn grand_prix_leaderboard<'a>(
    players: impl IntoIterator<Item = (i64, &'a str)>,
    totals: &BTreeMap<i64, PlayerSeasonTotals>,
) -> Vec<GrandPrixStanding> {
    let mut standings: Vec<GrandPrixStanding> = players
        .into_iter()
        .map(|(player_id, name)| {
            let t = totals.get(&player_id).cloned().unwrap_or_default();
            GrandPrixStanding {
                player_id,
                player: name.to_string(),
                grand_prix_points: t.grand_prix_points,
                competition_points: t.competition_points,
                competitions_played: t.competitions_played,
            }
        })
        .collect();
    standings.sort_by(|a, b| b.grand_prix_points.total_cmp(&a.grand_prix_points));
    standings
}

/// Every player, by number of holes completed in two strokes.
pub fn twos_leaderboard<'a>(
    players: impl IntoIterator<Item = (i64, &'a str)>,
    stats: &HashMap<i64, PlayerStats>,
) -> Vec<TwosStanding> {
    let mut standings: Vec<TwosStanding> = players
        .into_iter()
        .map(|(player_id, name)| TwosStanding {
            player_id,
            player: name.to_string(),
            twos: stats.get(&player_id).map_or(0, |s| s.twos),
        })
        .collect();
    standings.sort_by(|a, b| b.twos.cmp(&a.twos));
    standings
}

/// One competition's cards, by points.
pub fn competition_leaderboard(mut entries: Vec<CompetitionStanding>) -> Vec<CompetitionStanding> {
    entries.sort_by(|a, b| b.points.cmp(&a.points));
    entries
}
