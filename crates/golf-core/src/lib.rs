//! Golf society scoring and ranking engine.
//!
//! Pure functions that turn raw hole-by-hole strokes into Stableford and
//! Super Par totals, allocate handicap shots by stroke index, and build the
//! season-long Grand-Prix standings. No I/O happens here; the server crate
//! feeds stored rounds in and serializes the results.

pub mod error;
pub mod grand_prix;
pub mod handicap;
pub mod leaderboard;
pub mod round;
pub mod scoring;

pub use error::ScoringError;
pub use grand_prix::{CompetitionResult, Placement, PlayerSeasonTotals, TieSplit};
pub use leaderboard::PlayerStats;
pub use round::RoundScore;
pub use scoring::{HoleOutcome, HoleResult, ScoreCategory, ScoringMode};
