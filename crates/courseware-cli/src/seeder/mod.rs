//! Database seeding for development and manual testing.
//!
//! Generation runs in parallel with Rayon; inserts use multi-row statements
//! inside one transaction per entity type.

pub mod courses;
pub mod models;
pub mod students;

use sqlx::PgPool;
use std::time::Instant;

pub use courses::{generate_courses, plan_enrollments, seed_courses};
pub use models::{CourseSeed, SeedConfig, StudentSeed};
pub use students::{generate_students, seed_students};

use courseware_models::StudentId;

pub type SeedResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Rows per multi-value INSERT. Keeps bind parameters well under Postgres' limit.
pub(crate) const BATCH_SIZE: usize = 500;

/// Seeds students, then courses enrolled with those students.
pub async fn seed_all(db: &PgPool, config: &SeedConfig) -> SeedResult<()> {
    let start_time = Instant::now();
    println!("🌱 Starting seed: {:?}", config);

    let student_ids = seed_students(db, config.students).await?;
    seed_courses(db, config.courses, &student_ids, config.students_per_course).await?;

    println!("✅ Seeding complete in {:?}", start_time.elapsed());
    Ok(())
}

/// Loads every existing student id, oldest first.
pub async fn existing_student_ids(db: &PgPool) -> SeedResult<Vec<StudentId>> {
    let ids = sqlx::query_scalar::<_, StudentId>("SELECT id FROM students ORDER BY id")
        .fetch_all(db)
        .await?;
    Ok(ids)
}

/// Removes all courses, students and enrollments and resets id sequences.
pub async fn clear_all(db: &PgPool) -> SeedResult<()> {
    sqlx::query("TRUNCATE course_students, courses, students RESTART IDENTITY")
        .execute(db)
        .await?;
    println!("🧹 Cleared courses, students and enrollments");
    Ok(())
}
