//! In-process store used when no `DATABASE_URL` is configured.
//!
//! Mirrors the Postgres schema's guarantees: ids are assigned sequentially,
//! player names are unique case-insensitively, and foreign keys are checked on
//! insert.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use crate::db::competitions::{Competition, NewCompetition};
use crate::db::courses::{Course, NewCourse};
use crate::db::players::Player;
use crate::db::scores::{NewScore, Score};
use crate::error::AppError;

#[derive(Debug, Default)]
struct Tables {
    players: Vec<Player>,
    courses: Vec<Course>,
    competitions: Vec<Competition>,
    scores: Vec<Score>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, AppError> {
        self.tables
            .read()
            .map_err(|_| AppError::Internal("Memory store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, AppError> {
        self.tables
            .write()
            .map_err(|_| AppError::Internal("Memory store lock poisoned".into()))
    }

    // Players

    pub fn create_player(&self, name: &str, handicap: f64) -> Result<Player, AppError> {
        let mut t = self.write()?;
        if t.players.iter().any(|p| p.name.eq_ignore_ascii_case(name)) {
            return Err(AppError::Conflict(format!("Player '{name}' already exists")));
        }
        let player = Player {
            id: t.players.len() as i64 + 1,
            name: name.to_string(),
            handicap,
            created_at: Utc::now(),
        };
        t.players.push(player.clone());
        Ok(player)
    }

    pub fn get_player(&self, id: i64) -> Result<Option<Player>, AppError> {
        Ok(self.read()?.players.iter().find(|p| p.id == id).cloned())
    }

    pub fn list_players(&self) -> Result<Vec<Player>, AppError> {
        Ok(self.read()?.players.clone())
    }

    pub fn player_name_exists(&self, name: &str) -> Result<bool, AppError> {
        Ok(self
            .read()?
            .players
            .iter()
            .any(|p| p.name.eq_ignore_ascii_case(name)))
    }

    pub fn update_player_handicap(&self, id: i64, handicap: f64) -> Result<Option<Player>, AppError> {
        let mut t = self.write()?;
        Ok(t.players.iter_mut().find(|p| p.id == id).map(|p| {
            p.handicap = handicap;
            p.clone()
        }))
    }

    // Courses

    pub fn create_course(&self, new: &NewCourse) -> Result<Course, AppError> {
        let mut t = self.write()?;
        let course = Course {
            id: t.courses.len() as i64 + 1,
            name: new.name.clone(),
            location: new.location.clone(),
            par_values: new.par_values.clone(),
            stroke_indexes: new.stroke_indexes.clone(),
            hole_yardages: new.hole_yardages.clone(),
            course_rating: new.course_rating,
            slope_rating: new.slope_rating,
            created_at: Utc::now(),
        };
        t.courses.push(course.clone());
        Ok(course)
    }

    pub fn get_course(&self, id: i64) -> Result<Option<Course>, AppError> {
        Ok(self.read()?.courses.iter().find(|c| c.id == id).cloned())
    }

    pub fn list_courses(&self) -> Result<Vec<Course>, AppError> {
        Ok(self.read()?.courses.clone())
    }

    // Competitions

    pub fn create_competition(&self, new: &NewCompetition) -> Result<Competition, AppError> {
        let mut t = self.write()?;
        if !t.courses.iter().any(|c| c.id == new.course_id) {
            return Err(AppError::NotFound("Course not found".into()));
        }
        let competition = Competition {
            id: t.competitions.len() as i64 + 1,
            name: new.name.clone(),
            date: new.date,
            course_id: new.course_id,
            competition_type: new.competition_type.clone(),
            scoring_mode: new.scoring_mode,
            created_at: Utc::now(),
        };
        t.competitions.push(competition.clone());
        Ok(competition)
    }

    pub fn get_competition(&self, id: i64) -> Result<Option<Competition>, AppError> {
        Ok(self.read()?.competitions.iter().find(|c| c.id == id).cloned())
    }

    pub fn list_competitions(&self) -> Result<Vec<Competition>, AppError> {
        let mut competitions = self.read()?.competitions.clone();
        competitions.sort_by_key(|c| (c.date, c.id));
        Ok(competitions)
    }

    // Scores

    pub fn create_score(&self, new: &NewScore) -> Result<Score, AppError> {
        let mut t = self.write()?;
        if !t.players.iter().any(|p| p.id == new.player_id) {
            return Err(AppError::NotFound("Player not found".into()));
        }
        if !t.competitions.iter().any(|c| c.id == new.competition_id) {
            return Err(AppError::NotFound("Competition not found".into()));
        }
        let r = &new.round;
        let score = Score {
            id: t.scores.len() as i64 + 1,
            player_id: new.player_id,
            competition_id: new.competition_id,
            scoring_mode: r.mode,
            hole_scores: new.hole_scores.clone(),
            shots_received: new.shots_received.clone(),
            total_strokes: r.total_strokes,
            stableford_points: r.stableford_points,
            super_par_points: r.super_par_points,
            points: r.points,
            eagles: r.eagles,
            birdies: r.birdies,
            pars: r.pars,
            bogeys: r.bogeys,
            doubles_or_worse: r.doubles_or_worse,
            twos: r.twos,
            created_at: Utc::now(),
        };
        t.scores.push(score.clone());
        Ok(score)
    }

    pub fn get_score(&self, id: i64) -> Result<Option<Score>, AppError> {
        Ok(self.read()?.scores.iter().find(|s| s.id == id).cloned())
    }

    pub fn scores_where(&self, predicate: impl Fn(&Score) -> bool) -> Result<Vec<Score>, AppError> {
        Ok(self
            .read()?
            .scores
            .iter()
            .filter(|s| predicate(s))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use golf_core::{RoundScore, ScoringMode};

    fn course() -> NewCourse {
        NewCourse {
            name: "Links".into(),
            location: None,
            par_values: vec![4, 3, 5],
            stroke_indexes: vec![2, 3, 1],
            hole_yardages: vec![400, 160, 520],
            course_rating: 72.0,
            slope_rating: 113.0,
        }
    }

    fn competition(course_id: i64) -> NewCompetition {
        NewCompetition {
            name: "Spring Medal".into(),
            date: chrono::NaiveDate::from_ymd_opt(2025, 4, 12).unwrap(),
            course_id,
            competition_type: "Stableford".into(),
            scoring_mode: ScoringMode::Plain,
        }
    }

    fn score(player_id: i64, competition_id: i64) -> NewScore {
        NewScore {
            player_id,
            competition_id,
            hole_scores: vec![4, 3, 5],
            shots_received: vec![0, 0, 0],
            round: RoundScore::default(),
        }
    }

    #[test]
    fn test_sequential_ids() {
        let store = MemoryStore::new();
        assert_eq!(store.create_player("Ann", 12.0).unwrap().id, 1);
        assert_eq!(store.create_player("Bob", 4.5).unwrap().id, 2);
        assert_eq!(store.list_players().unwrap().len(), 2);
    }

    #[test]
    fn test_duplicate_name_conflicts() {
        let store = MemoryStore::new();
        store.create_player("Ann", 12.0).unwrap();
        assert!(store.player_name_exists("ANN").unwrap());
        assert!(matches!(
            store.create_player("ann", 3.0),
            Err(AppError::Conflict(_))
        ));
    }

    #[test]
    fn test_update_handicap() {
        let store = MemoryStore::new();
        let player = store.create_player("Ann", 12.0).unwrap();
        let updated = store.update_player_handicap(player.id, 10.4).unwrap().unwrap();
        assert_eq!(updated.handicap, 10.4);
        assert!(store.update_player_handicap(99, 1.0).unwrap().is_none());
    }

    #[test]
    fn test_foreign_keys_checked() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.create_competition(&competition(1)),
            Err(AppError::NotFound(_))
        ));

        let course = store.create_course(&course()).unwrap();
        let comp = store.create_competition(&competition(course.id)).unwrap();
        assert!(matches!(
            store.create_score(&score(7, comp.id)),
            Err(AppError::NotFound(_))
        ));
        assert!(store.scores_where(|_| true).unwrap().is_empty());
    }

    #[test]
    fn test_filter_scores_by_competition() {
        let store = MemoryStore::new();
        let course = store.create_course(&course()).unwrap();
        let a = store.create_competition(&competition(course.id)).unwrap();
        let b = store.create_competition(&competition(course.id)).unwrap();
        let player = store.create_player("Ann", 12.0).unwrap();

        store.create_score(&score(player.id, a.id)).unwrap();
        store.create_score(&score(player.id, b.id)).unwrap();
        store.create_score(&score(player.id, a.id)).unwrap();

        let in_a = store.scores_where(|s| s.competition_id == a.id).unwrap();
        let ids: Vec<i64> = in_a.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
