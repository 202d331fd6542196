pub mod competitions;
pub mod courses;
pub mod memory;
pub mod players;
pub mod pool;
pub mod scores;

use std::sync::Arc;

use sqlx::PgPool;

use crate::error::AppError;
use competitions::{Competition, NewCompetition};
use courses::{Course, NewCourse};
use memory::MemoryStore;
use players::Player;
use scores::{NewScore, Score};

/// Storage handle shared by every handler.
///
/// Each call is one short read or one single-row write; nothing is held
/// between calls.
#[derive(Clone)]
pub enum Db {
    Postgres(PgPool),
    Memory(Arc<MemoryStore>),
}

impl Db {
    pub fn memory() -> Self {
        Db::Memory(Arc::new(MemoryStore::new()))
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            Db::Postgres(_) => "postgres",
            Db::Memory(_) => "memory",
        }
    }

    // Players

    pub async fn create_player(&self, name: &str, handicap: f64) -> Result<Player, AppError> {
        match self {
            Db::Postgres(pool) => players::create_player(pool, name, handicap).await,
            Db::Memory(store) => store.create_player(name, handicap),
        }
    }

    pub async fn get_player(&self, id: i64) -> Result<Option<Player>, AppError> {
        match self {
            Db::Postgres(pool) => players::get_player(pool, id).await,
            Db::Memory(store) => store.get_player(id),
        }
    }

    pub async fn list_players(&self) -> Result<Vec<Player>, AppError> {
        match self {
            Db::Postgres(pool) => players::list_players(pool).await,
            Db::Memory(store) => store.list_players(),
        }
    }

    pub async fn player_name_exists(&self, name: &str) -> Result<bool, AppError> {
        match self {
            Db::Postgres(pool) => players::name_exists(pool, name).await,
            Db::Memory(store) => store.player_name_exists(name),
        }
    }

    pub async fn update_player_handicap(
        &self,
        id: i64,
        handicap: f64,
    ) -> Result<Option<Player>, AppError> {
        match self {
            Db::Postgres(pool) => players::update_handicap(pool, id, handicap).await,
            Db::Memory(store) => store.update_player_handicap(id, handicap),
        }
    }

    // Courses

    pub async fn create_course(&self, course: &NewCourse) -> Result<Course, AppError> {
        match self {
            Db::Postgres(pool) => courses::create_course(pool, course).await,
            Db::Memory(store) => store.create_course(course),
        }
    }

    pub async fn get_course(&self, id: i64) -> Result<Option<Course>, AppError> {
        match self {
            Db::Postgres(pool) => courses::get_course(pool, id).await,
            Db::Memory(store) => store.get_course(id),
        }
    }

    pub async fn list_courses(&self) -> Result<Vec<Course>, AppError> {
        match self {
            Db::Postgres(pool) => courses::list_courses(pool).await,
            Db::Memory(store) => store.list_courses(),
        }
    }

    // Competitions

    pub async fn create_competition(
        &self,
        competition: &NewCompetition,
    ) -> Result<Competition, AppError> {
        match self {
            Db::Postgres(pool) => competitions::create_competition(pool, competition).await,
            Db::Memory(store) => store.create_competition(competition),
        }
    }

    pub async fn get_competition(&self, id: i64) -> Result<Option<Competition>, AppError> {
        match self {
            Db::Postgres(pool) => competitions::get_competition(pool, id).await,
            Db::Memory(store) => store.get_competition(id),
        }
    }

    pub async fn list_competitions(&self) -> Result<Vec<Competition>, AppError> {
        match self {
            Db::Postgres(pool) => competitions::list_competitions(pool).await,
            Db::Memory(store) => store.list_competitions(),
        }
    }

    // Scores

    pub async fn create_score(&self, score: &NewScore) -> Result<Score, AppError> {
        match self {
            Db::Postgres(pool) => scores::create_score(pool, score).await,
            Db::Memory(store) => store.create_score(score),
        }
    }

    pub async fn get_score(&self, id: i64) -> Result<Option<Score>, AppError> {
        match self {
            Db::Postgres(pool) => scores::get_score(pool, id).await,
            Db::Memory(store) => store.get_score(id),
        }
    }

    pub async fn scores_for_competition(&self, competition_id: i64) -> Result<Vec<Score>, AppError> {
        match self {
            Db::Postgres(pool) => scores::scores_for_competition(pool, competition_id).await,
            Db::Memory(store) => store.scores_where(|s| s.competition_id == competition_id),
        }
    }

    pub async fn scores_for_player(&self, player_id: i64) -> Result<Vec<Score>, AppError> {
        match self {
            Db::Postgres(pool) => scores::scores_for_player(pool, player_id).await,
            Db::Memory(store) => store.scores_where(|s| s.player_id == player_id),
        }
    }

    pub async fn list_scores(&self) -> Result<Vec<Score>, AppError> {
        match self {
            Db::Postgres(pool) => scores::list_scores(pool).await,
            Db::Memory(store) => store.scores_where(|_| true),
        }
    }
}
