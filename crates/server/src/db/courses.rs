use serde::Serialize;
use sqlx::PgPool;

use crate::error::AppError;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub location: Option<String>,
    pub par_values: Vec<i32>,
    pub stroke_indexes: Vec<i32>,
    pub hole_yardages: Vec<i32>,
    pub course_rating: f64,
    pub slope_rating: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Course {
    pub fn holes(&self) -> usize {
        self.par_values.len()
    }

    pub fn total_par(&self) -> i64 {
        self.par_values.iter().map(|&p| i64::from(p)).sum()
    }
}

/// A validated course ready to insert.
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub name: String,
    pub location: Option<String>,
    pub par_values: Vec<i32>,
    pub stroke_indexes: Vec<i32>,
    pub hole_yardages: Vec<i32>,
    pub course_rating: f64,
    pub slope_rating: f64,
}

const COURSE_COLUMNS: &str = "id, name, location, par_values, stroke_indexes, hole_yardages, course_rating, slope_rating, created_at";

pub async fn create_course(pool: &PgPool, course: &NewCourse) -> Result<Course, AppError> {
    let query = format!(
        r#"INSERT INTO courses (name, location, par_values, stroke_indexes, hole_yardages, course_rating, slope_rating)
           VALUES ($1, $2, $3, $4, $5, $6, $7)
           RETURNING {COURSE_COLUMNS}"#
    );
    sqlx::query_as::<_, Course>(&query)
        .bind(&course.name)
        .bind(&course.location)
        .bind(&course.par_values)
        .bind(&course.stroke_indexes)
        .bind(&course.hole_yardages)
        .bind(course.course_rating)
        .bind(course.slope_rating)
        .fetch_one(pool)
        .await
        .map_err(AppError::Storage)
}

pub async fn get_course(pool: &PgPool, id: i64) -> Result<Option<Course>, AppError> {
    let query = format!("SELECT {COURSE_COLUMNS} FROM courses WHERE id = $1");
    sqlx::query_as::<_, Course>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(AppError::Storage)
}

pub async fn list_courses(pool: &PgPool) -> Result<Vec<Course>, AppError> {
    let query = format!("SELECT {COURSE_COLUMNS} FROM courses ORDER BY id");
    sqlx::query_as::<_, Course>(&query)
        .fetch_all(pool)
        .await
        .map_err(AppError::Storage)
}
