use std::collections::BTreeSet;

use anyhow::anyhow;
use sqlx::{PgPool, Postgres, QueryBuilder, Transaction};
use tracing::instrument;

use courseware_core::AppError;
use courseware_core::errors::is_foreign_key_violation;

use crate::metrics;
use crate::modules::courses::model::{
    Course, CourseFilterParams, CourseId, CreateCourseDto, StudentId, UpdateCourseDto,
};

/// Selects courses with their student ids folded into a `BIGINT[]`.
///
/// Callers append `WHERE` clauses, then [`COURSE_GROUP_ORDER`].
const COURSE_SELECT: &str = r#"SELECT
        c.id,
        c.name,
        COALESCE(
            array_agg(cs.student_id ORDER BY cs.student_id) FILTER (WHERE cs.student_id IS NOT NULL),
            '{}'::BIGINT[]
        ) AS students,
        c.created_at,
        c.updated_at
       FROM courses c
       LEFT JOIN course_students cs ON cs.course_id = c.id"#;

const COURSE_GROUP_ORDER: &str =
    " GROUP BY c.id, c.name, c.created_at, c.updated_at ORDER BY c.id";

pub struct CourseService;

impl CourseService {
    #[instrument(skip(db))]
    pub async fn get_courses(
        db: &PgPool,
        filters: CourseFilterParams,
    ) -> Result<Vec<Course>, AppError> {
        let mut query = QueryBuilder::<Postgres>::new(COURSE_SELECT);
        query.push(" WHERE TRUE");

        if let Some(ids) = filters.id {
            query.push(" AND c.id = ANY(").push_bind(ids).push(")");
        }
        if let Some(name) = filters.name {
            query.push(" AND c.name = ").push_bind(name);
        }

        query.push(COURSE_GROUP_ORDER);

        let courses = query.build_query_as::<Course>().fetch_all(db).await?;

        Ok(courses)
    }

    #[instrument(skip(db))]
    pub async fn get_course_by_id(db: &PgPool, id: CourseId) -> Result<Course, AppError> {
        let mut query = QueryBuilder::<Postgres>::new(COURSE_SELECT);
        query.push(" WHERE c.id = ").push_bind(id);
        query.push(COURSE_GROUP_ORDER);

        query
            .build_query_as::<Course>()
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Course not found")))
    }

    #[instrument(skip(db))]
    pub async fn create_course(db: &PgPool, dto: CreateCourseDto) -> Result<Course, AppError> {
        let mut tx = db.begin().await?;

        let id = sqlx::query_scalar::<_, CourseId>(
            "INSERT INTO courses (name) VALUES ($1) RETURNING id",
        )
        .bind(&dto.name)
        .fetch_one(&mut *tx)
        .await?;

        Self::enroll_students(&mut tx, id, &dto.students).await?;

        tx.commit().await?;

        metrics::track_course_created();

        Self::get_course_by_id(db, id).await
    }

    /// Applies a partial update. Supplied student ids are added to the
    /// existing set; ids already enrolled are left as they are.
    #[instrument(skip(db))]
    pub async fn update_course(
        db: &PgPool,
        id: CourseId,
        dto: UpdateCourseDto,
    ) -> Result<Course, AppError> {
        let mut tx = db.begin().await?;

        // Also locks the row until commit.
        sqlx::query_scalar::<_, CourseId>(
            r#"UPDATE courses
               SET name = COALESCE($2, name), updated_at = NOW()
               WHERE id = $1
               RETURNING id"#,
        )
        .bind(id)
        .bind(&dto.name)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Course not found")))?;

        let added = match &dto.students {
            Some(students) => Self::enroll_students(&mut tx, id, students).await?,
            None => 0,
        };

        tx.commit().await?;

        metrics::track_course_students_added(added);

        Self::get_course_by_id(db, id).await
    }

    #[instrument(skip(db))]
    pub async fn delete_course(db: &PgPool, id: CourseId) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("Course not found")));
        }

        metrics::track_course_deleted();

        Ok(())
    }

    /// Links `students` to the course and returns how many links were new.
    ///
    /// Fails with 400 listing every id that has no student row.
    async fn enroll_students(
        tx: &mut Transaction<'_, Postgres>,
        course_id: CourseId,
        students: &[StudentId],
    ) -> Result<u64, AppError> {
        if students.is_empty() {
            return Ok(0);
        }

        let requested: BTreeSet<StudentId> = students.iter().copied().collect();
        let requested: Vec<StudentId> = requested.into_iter().collect();

        let existing: BTreeSet<StudentId> =
            sqlx::query_scalar::<_, StudentId>("SELECT id FROM students WHERE id = ANY($1)")
                .bind(&requested)
                .fetch_all(&mut **tx)
                .await?
                .into_iter()
                .collect();

        let missing: Vec<String> = requested
            .iter()
            .filter(|id| !existing.contains(id))
            .map(ToString::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(AppError::bad_request(anyhow!(
                "Students not found: {}",
                missing.join(", ")
            )));
        }

        let result = sqlx::query(
            r#"INSERT INTO course_students (course_id, student_id)
               SELECT $1, UNNEST($2::BIGINT[])
               ON CONFLICT DO NOTHING"#,
        )
        .bind(course_id)
        .bind(&requested)
        .execute(&mut **tx)
        .await
        .map_err(|e| {
            // A student deleted between the check and the insert
            if is_foreign_key_violation(&e) {
                return AppError::bad_request(anyhow!("One or more students do not exist"));
            }
            AppError::from(e)
        })?;

        Ok(result.rows_affected())
    }
}
