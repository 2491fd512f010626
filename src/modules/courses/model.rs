//! Course data models and DTOs.
//!
//! Re-exports course models from the `courseware-models` crate.

pub use courseware_models::courses::*;
pub use courseware_models::ids::{CourseId, StudentId};
