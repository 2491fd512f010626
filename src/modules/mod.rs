pub mod courses;
pub mod students;

pub use self::courses::model::Course;
pub use self::students::model::Student;
