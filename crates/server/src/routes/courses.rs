use axum::{extract::Path, Extension, Json};
use golf_core::handicap::{self, SCRATCH_RATING, STANDARD_SLOPE};
use golf_core::ScoringError;
use serde::Deserialize;

use crate::db::courses::{Course, NewCourse};
use crate::db::Db;
use crate::error::AppError;
use crate::routes::players::validate_name;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    pub name: String,
    pub location: Option<String>,
    pub par_values: Vec<i32>,
    pub stroke_indexes: Vec<i32>,
    #[serde(default)]
    pub hole_yardages: Vec<i32>,
    pub course_rating: Option<f64>,
    pub slope_rating: Option<f64>,
}

impl CreateCourseRequest {
    fn validate(self) -> Result<NewCourse, AppError> {
        let name = validate_name(&self.name, "Course")?;

        let holes = self.par_values.len();
        if holes == 0 {
            return Err(ScoringError::NoHoles.into());
        }
        if let Some(i) = self.par_values.iter().position(|&p| p <= 0) {
            return Err(ScoringError::InvalidPar(self.par_values[i]).at_hole(i + 1).into());
        }

        if self.stroke_indexes.len() != holes {
            return Err(ScoringError::HoleCountMismatch {
                expected: holes,
                actual: self.stroke_indexes.len(),
            }
            .into());
        }
        handicap::validate_stroke_indexes(&self.stroke_indexes)?;

        if !self.hole_yardages.is_empty() {
            if self.hole_yardages.len() != holes {
                return Err(ScoringError::HoleCountMismatch {
                    expected: holes,
                    actual: self.hole_yardages.len(),
                }
                .into());
            }
            if let Some(i) = self.hole_yardages.iter().position(|&y| y <= 0) {
                return Err(AppError::InvalidInput(format!(
                    "Hole {}: yardage must be positive",
                    i + 1
                )));
            }
        }

        let course_rating = self.course_rating.unwrap_or(SCRATCH_RATING);
        if !course_rating.is_finite() || course_rating <= 0.0 {
            return Err(AppError::InvalidInput("Course rating must be positive".into()));
        }
        let slope_rating = self.slope_rating.unwrap_or(STANDARD_SLOPE);
        if !slope_rating.is_finite() || slope_rating <= 0.0 {
            return Err(ScoringError::InvalidSlope(slope_rating).into());
        }

        Ok(NewCourse {
            name,
            location: self
                .location
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty()),
            par_values: self.par_values,
            stroke_indexes: self.stroke_indexes,
            hole_yardages: self.hole_yardages,
            course_rating,
            slope_rating,
        })
    }
}

/// POST /api/courses
pub async fn create_course(
    Extension(db): Extension<Db>,
    Json(req): Json<CreateCourseRequest>,
) -> Result<Json<Course>, AppError> {
    let new_course = req.validate()?;
    let course = db.create_course(&new_course).await?;
    tracing::info!(
        course_id = course.id,
        holes = course.holes(),
        par = course.total_par(),
        "Created course {}",
        course.name
    );
    Ok(Json(course))
}

/// GET /api/courses
pub async fn list_courses(Extension(db): Extension<Db>) -> Result<Json<Vec<Course>>, AppError> {
    Ok(Json(db.list_courses().await?))
}

/// GET /api/courses/{course_id}
pub async fn get_course(
    Extension(db): Extension<Db>,
    Path(course_id): Path<i64>,
) -> Result<Json<Course>, AppError> {
    let course = db
        .get_course(course_id)
        .await?
        .ok_or(AppError::NotFound("Course not found".into()))?;
    Ok(Json(course))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateCourseRequest {
        CreateCourseRequest {
            name: "Old Course".into(),
            location: Some("  ".into()),
            par_values: vec![4, 3, 5],
            stroke_indexes: vec![1, 3, 2],
            hole_yardages: vec![410, 170, 505],
            course_rating: None,
            slope_rating: None,
        }
    }

    #[test]
    fn test_defaults_applied() {
        let course = request().validate().unwrap();
        assert_eq!(course.course_rating, 72.0);
        assert_eq!(course.slope_rating, 113.0);
        assert_eq!(course.location, None);
    }

    #[test]
    fn test_rejects_mismatched_arrays() {
        let mut req = request();
        req.stroke_indexes = vec![1, 2];
        assert!(matches!(req.validate(), Err(AppError::Scoring(_))));

        let mut req = request();
        req.hole_yardages = vec![400];
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut req = request();
        req.par_values = vec![4, 0, 5];
        assert!(req.validate().is_err());

        let mut req = request();
        req.stroke_indexes = vec![1, 1, 2];
        assert!(req.validate().is_err());

        let mut req = request();
        req.slope_rating = Some(0.0);
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_yardages_optional() {
        let mut req = request();
        req.hole_yardages = Vec::new();
        assert!(req.validate().is_ok());
    }
}
