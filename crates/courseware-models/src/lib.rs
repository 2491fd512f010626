//! # Courseware Models
//!
//! Domain models and DTOs for the Courseware API.
//!
//! # Modules
//!
//! - [`ids`]: Strongly-typed integer identifiers
//! - [`courses`]: Course entity, DTOs and list filters
//! - [`students`]: Student entity, DTOs and list filters
//!
//! # Example
//!
//! ```ignore
//! use courseware_models::{CourseId, CreateCourseDto};
//!
//! let dto = CreateCourseDto { name: "Python_course".into(), students: vec![] };
//! ```

pub mod courses;
pub mod ids;
pub mod students;

// Re-export commonly used types at crate root for convenience
pub use courses::{Course, CourseFilterParams, CreateCourseDto, UpdateCourseDto};
pub use ids::{CourseId, StudentId};
pub use students::{CreateStudentDto, Student, StudentFilterParams};
