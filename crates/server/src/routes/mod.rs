pub mod competitions;
pub mod courses;
pub mod handicap;
pub mod health;
pub mod leaderboards;
pub mod players;
pub mod scores;
