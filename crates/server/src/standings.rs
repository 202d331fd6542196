//! Season-wide projections rebuilt from the stored cards on every call.

use std::collections::{BTreeMap, HashMap};

use golf_core::grand_prix::{self, PlayerSeasonTotals};
use golf_core::leaderboard::{self, PlayerStats};
use golf_core::{CompetitionResult, TieSplit};

use crate::db::players::Player;
use crate::db::scores::Score;
use crate::db::Db;
use crate::error::AppError;

pub struct Season {
    pub players: Vec<Player>,
    pub totals: BTreeMap<i64, PlayerSeasonTotals>,
    pub stats: HashMap<i64, PlayerStats>,
}

impl Season {
    pub fn from_records(players: Vec<Player>, scores: &[Score], split: TieSplit) -> Self {
        let results: Vec<CompetitionResult> = scores.iter().map(Score::result).collect();
        let rounds: Vec<(i64, golf_core::RoundScore)> =
            scores.iter().map(|s| (s.player_id, s.round())).collect();

        Self {
            players,
            totals: grand_prix::season_totals(&results, split),
            stats: leaderboard::stats_by_player(rounds.iter().map(|(id, r)| (*id, r))),
        }
    }

    pub fn player_names(&self) -> impl Iterator<Item = (i64, &str)> {
        self.players.iter().map(|p| (p.id, p.name.as_str()))
    }

    pub fn stats_for(&self, player_id: i64) -> PlayerStats {
        self.stats.get(&player_id).copied().unwrap_or_default()
    }

    pub fn totals_for(&self, player_id: i64) -> PlayerSeasonTotals {
        self.totals.get(&player_id).cloned().unwrap_or_default()
    }
}

/// Read every player and card and aggregate from scratch.
///
/// Reflects whatever is committed at call time; safe to call repeatedly.
pub async fn load(db: &Db, split: TieSplit) -> Result<Season, AppError> {
    let players = db.list_players().await?;
    let scores = db.list_scores().await?;
    tracing::debug!(
        players = players.len(),
        scores = scores.len(),
        tie_split = %split,
        "Rebuilding season standings"
    );
    Ok(Season::from_records(players, &scores, split))
}
