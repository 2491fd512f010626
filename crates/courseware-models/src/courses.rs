//! Course domain models and DTOs.
//!
//! A course carries its enrolled students as a list of ids, mirroring the
//! `course_students` join table.

use chrono::{DateTime, Utc};
use courseware_core::serde::{deserialize_optional_csv, deserialize_optional_string};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::ids::{CourseId, StudentId};

/// A course offering.
///
/// `students` is sorted ascending; the order carries no meaning.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub students: Vec<StudentId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCourseDto {
    #[validate(length(min = 1, max = 200, message = "name must be between 1 and 200 characters"))]
    pub name: String,
    /// Existing students to enroll on creation
    #[serde(default)]
    pub students: Vec<StudentId>,
}

/// Partial update. Supplied `students` are added to the existing set.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCourseDto {
    #[validate(length(min = 1, max = 200, message = "name must be between 1 and 200 characters"))]
    pub name: Option<String>,
    pub students: Option<Vec<StudentId>>,
}

/// Query parameters for `GET /api/v1/courses/`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CourseFilterParams {
    /// One or more course ids, comma-separated (`?id=3,7`) or repeated (`?id=3&id=7`)
    #[serde(default, deserialize_with = "deserialize_optional_csv")]
    #[param(value_type = Option<String>)]
    pub id: Option<Vec<CourseId>>,
    /// Exact course name
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_course_dto_students_default_empty() {
        let dto: CreateCourseDto = serde_json::from_str(r#"{"name": "Python_course"}"#).unwrap();
        assert_eq!(dto.name, "Python_course");
        assert!(dto.students.is_empty());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_course_dto_name_too_long() {
        let dto = CreateCourseDto {
            name: "x".repeat(201),
            students: vec![],
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_update_course_dto_partial() {
        let dto: UpdateCourseDto = serde_json::from_str(r#"{"students": [4]}"#).unwrap();
        assert!(dto.name.is_none());
        assert_eq!(dto.students, Some(vec![StudentId::new(4)]));
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_update_course_dto_rejects_blank_name() {
        let dto = UpdateCourseDto {
            name: Some(String::new()),
            students: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_course_serializes_student_ids() {
        let course = Course {
            id: CourseId::new(1),
            name: "Rust".into(),
            students: vec![StudentId::new(2), StudentId::new(5)],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let value = serde_json::to_value(&course).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["students"], serde_json::json!([2, 5]));
    }
}
