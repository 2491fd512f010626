//! # Courseware CLI
//!
//! Database seeding utilities for Courseware testing and development.
//!
//! ## Usage
//!
//! ```ignore
//! use courseware_cli::seeder::{seed_all, SeedConfig};
//!
//! seed_all(&pool, &SeedConfig::default()).await?;
//! ```

pub mod seeder;
