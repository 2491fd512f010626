use anyhow::anyhow;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use courseware_core::AppError;

use crate::metrics;
use crate::modules::students::model::{
    CreateStudentDto, Student, StudentFilterParams, StudentId,
};

pub struct StudentService;

impl StudentService {
    #[instrument(skip(db))]
    pub async fn get_students(
        db: &PgPool,
        filters: StudentFilterParams,
    ) -> Result<Vec<Student>, AppError> {
        let mut query = QueryBuilder::<Postgres>::new(
            "SELECT id, name, birth_date, created_at FROM students",
        );
        if let Some(name) = filters.name {
            query.push(" WHERE name = ").push_bind(name);
        }
        query.push(" ORDER BY id");

        let students = query.build_query_as::<Student>().fetch_all(db).await?;

        Ok(students)
    }

    #[instrument(skip(db))]
    pub async fn get_student_by_id(db: &PgPool, id: StudentId) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>(
            "SELECT id, name, birth_date, created_at FROM students WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Student not found")))
    }

    #[instrument(skip(db))]
    pub async fn create_student(db: &PgPool, dto: CreateStudentDto) -> Result<Student, AppError> {
        let student = sqlx::query_as::<_, Student>(
            r#"INSERT INTO students (name, birth_date)
               VALUES ($1, $2)
               RETURNING id, name, birth_date, created_at"#,
        )
        .bind(&dto.name)
        .bind(dto.birth_date)
        .fetch_one(db)
        .await?;

        metrics::track_student_created();

        Ok(student)
    }

    /// Deletes the student; enrollments go with it.
    #[instrument(skip(db))]
    pub async fn delete_student(db: &PgPool, id: StudentId) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("Student not found")));
        }

        Ok(())
    }
}
