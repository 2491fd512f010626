//! Course seeding functionality.
//!
//! Courses are created first, then each course is enrolled with a window of
//! consecutive students so enrollments spread evenly across the pool.

use courseware_models::{CourseId, StudentId};
use fake::Fake;
use fake::faker::company::en::Buzzword;
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Instant;

use super::models::CourseSeed;
use super::{BATCH_SIZE, SeedResult};

/// Generates course names such as `Synergy_course_7`
pub fn generate_courses(count: usize) -> Vec<CourseSeed> {
    (0..count)
        .into_par_iter()
        .map(|i| {
            let topic: String = Buzzword().fake();
            CourseSeed {
                name: format!("{}_course_{}", topic, i + 1),
            }
        })
        .collect()
}

/// Pairs each course with `per_course` distinct students.
///
/// Course `i` takes students starting at offset `i * per_course`, wrapping
/// around the student list. `per_course` is capped at the number of students.
pub fn plan_enrollments(
    course_ids: &[CourseId],
    student_ids: &[StudentId],
    per_course: usize,
) -> Vec<(CourseId, StudentId)> {
    if student_ids.is_empty() {
        return Vec::new();
    }
    let per_course = per_course.min(student_ids.len());

    course_ids
        .iter()
        .enumerate()
        .flat_map(|(i, &course_id)| {
            (0..per_course).map(move |j| {
                let idx = (i * per_course + j) % student_ids.len();
                (course_id, student_ids[idx])
            })
        })
        .collect()
}

/// Seeds courses and enrolls existing students into them
pub async fn seed_courses(
    db: &PgPool,
    count: usize,
    student_ids: &[StudentId],
    students_per_course: usize,
) -> SeedResult<Vec<CourseId>> {
    let start_time = Instant::now();
    println!("📘 Seeding {} courses...", count);

    let courses = generate_courses(count);
    let enrollments_per_course = students_per_course.min(student_ids.len());

    let mut tx = db.begin().await?;

    let mut course_ids = Vec::with_capacity(courses.len());
    for chunk in courses.chunks(BATCH_SIZE) {
        course_ids.extend(insert_courses_chunk(&mut tx, chunk).await?);
    }

    let enrollments = plan_enrollments(&course_ids, student_ids, students_per_course);
    for chunk in enrollments.chunks(BATCH_SIZE) {
        insert_enrollments_chunk(&mut tx, chunk).await?;
    }

    tx.commit().await?;

    println!(
        "   ✓ Inserted {} courses ({} students each) in {:?}",
        course_ids.len(),
        enrollments_per_course,
        start_time.elapsed()
    );

    Ok(course_ids)
}

async fn insert_courses_chunk(
    tx: &mut Transaction<'_, Postgres>,
    courses: &[CourseSeed],
) -> SeedResult<Vec<CourseId>> {
    if courses.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = String::from("INSERT INTO courses (name) VALUES ");
    for i in 0..courses.len() {
        if i > 0 {
            query.push_str(", ");
        }
        query.push_str(&format!("(${})", i + 1));
    }
    query.push_str(" RETURNING id");

    let mut q = sqlx::query_scalar(&query);
    for course in courses {
        q = q.bind(&course.name);
    }

    let ids: Vec<CourseId> = q.fetch_all(&mut **tx).await?;
    Ok(ids)
}

async fn insert_enrollments_chunk(
    tx: &mut Transaction<'_, Postgres>,
    enrollments: &[(CourseId, StudentId)],
) -> SeedResult<()> {
    if enrollments.is_empty() {
        return Ok(());
    }

    let (course_ids, student_ids): (Vec<CourseId>, Vec<StudentId>) =
        enrollments.iter().copied().unzip();

    sqlx::query(
        r#"INSERT INTO course_students (course_id, student_id)
           SELECT * FROM UNNEST($1::BIGINT[], $2::BIGINT[])
           ON CONFLICT DO NOTHING"#,
    )
    .bind(course_ids)
    .bind(student_ids)
    .execute(&mut **tx)
    .await?;

    Ok(())
}
