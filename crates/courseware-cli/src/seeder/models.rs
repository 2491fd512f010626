//! Seed rows and seeding configuration.

use chrono::NaiveDate;

/// Seed data for creating a student.
pub struct StudentSeed {
    pub name: String,
    pub birth_date: Option<NaiveDate>,
}

/// Seed data for creating a course.
pub struct CourseSeed {
    pub name: String,
}

/// How much data a full seed run creates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedConfig {
    pub students: usize,
    pub courses: usize,
    pub students_per_course: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            students: 100,
            courses: 30,
            students_per_course: 10,
        }
    }
}
