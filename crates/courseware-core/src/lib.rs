//! # Courseware Core
//!
//! Core types, errors, and utilities for the Courseware API.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`serde`]: Custom serde deserialization helpers for query strings
//!
//! # Example
//!
//! ```ignore
//! use courseware_core::AppError;
//!
//! let error = AppError::not_found(anyhow::anyhow!("Course not found"));
//! ```

pub mod errors;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorResponse};
