//! Student seeding functionality.

use chrono::{Duration, Utc};
use courseware_models::StudentId;
use fake::Fake;
use fake::faker::name::en::Name;
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Instant;

use super::models::StudentSeed;
use super::{BATCH_SIZE, SeedResult};

/// Generates students aged roughly 16 to 35, one in ten without a birth date
pub fn generate_students(count: usize) -> Vec<StudentSeed> {
    let today = Utc::now().date_naive();

    (0..count)
        .into_par_iter()
        .map(|i| {
            let age_days: i64 = (16 * 365..35 * 365).fake();
            StudentSeed {
                name: Name().fake(),
                birth_date: (i % 10 != 0).then(|| today - Duration::days(age_days)),
            }
        })
        .collect()
}

/// Seeds students into the database
pub async fn seed_students(db: &PgPool, count: usize) -> SeedResult<Vec<StudentId>> {
    let start_time = Instant::now();
    println!("🎓 Seeding {} students...", count);

    let students = generate_students(count);
    let ids = insert_students_batch(db, &students).await?;

    println!(
        "   ✓ Inserted {} students in {:?}",
        ids.len(),
        start_time.elapsed()
    );

    Ok(ids)
}

/// Inserts students in batches using multi-value INSERT statements
pub async fn insert_students_batch(
    db: &PgPool,
    students: &[StudentSeed],
) -> SeedResult<Vec<StudentId>> {
    let mut tx = db.begin().await?;
    let mut all_ids = Vec::with_capacity(students.len());

    for chunk in students.chunks(BATCH_SIZE) {
        let ids = insert_students_chunk(&mut tx, chunk).await?;
        all_ids.extend(ids);
    }

    tx.commit().await?;
    Ok(all_ids)
}

async fn insert_students_chunk(
    tx: &mut Transaction<'_, Postgres>,
    students: &[StudentSeed],
) -> SeedResult<Vec<StudentId>> {
    if students.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = String::from("INSERT INTO students (name, birth_date) VALUES ");
    for i in 0..students.len() {
        if i > 0 {
            query.push_str(", ");
        }
        query.push_str(&format!("(${}, ${})", i * 2 + 1, i * 2 + 2));
    }
    query.push_str(" RETURNING id");

    let mut q = sqlx::query_scalar(&query);
    for student in students {
        q = q.bind(&student.name).bind(student.birth_date);
    }

    let ids: Vec<StudentId> = q.fetch_all(&mut **tx).await?;
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_students_count_and_names() {
        let students = generate_students(25);
        assert_eq!(students.len(), 25);
        assert!(students.iter().all(|s| !s.name.is_empty()));
    }

    #[test]
    fn test_generated_birth_dates_are_in_the_past() {
        let today = Utc::now().date_naive();
        let students = generate_students(20);
        assert!(students[0].birth_date.is_none());
        assert!(
            students
                .iter()
                .filter_map(|s| s.birth_date)
                .all(|d| d < today)
        );
    }
}
