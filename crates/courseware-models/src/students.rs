//! Student domain models and DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use courseware_core::serde::deserialize_optional_string;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::ids::StudentId;

/// A learner that can be enrolled in any number of courses.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStudentDto {
    #[validate(length(min = 1, max = 200, message = "name must be between 1 and 200 characters"))]
    pub name: String,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
}

/// Query parameters for `GET /api/v1/students/`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StudentFilterParams {
    /// Exact student name
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_student_dto_birth_date_optional() {
        let dto: CreateStudentDto = serde_json::from_str(r#"{"name": "Ada"}"#).unwrap();
        assert_eq!(dto.name, "Ada");
        assert!(dto.birth_date.is_none());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_student_dto_parses_birth_date() {
        let dto: CreateStudentDto =
            serde_json::from_str(r#"{"name": "Ada", "birth_date": "2001-12-10"}"#).unwrap();
        assert_eq!(dto.birth_date, NaiveDate::from_ymd_opt(2001, 12, 10));
    }

    #[test]
    fn test_create_student_dto_rejects_empty_name() {
        let dto = CreateStudentDto {
            name: String::new(),
            birth_date: None,
        };
        assert!(dto.validate().is_err());
    }
}
