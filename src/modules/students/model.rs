//! Student data models and DTOs.
//!
//! Re-exports student models from the `courseware-models` crate.

pub use courseware_models::ids::StudentId;
pub use courseware_models::students::*;
