//! # Casting CLI
//!
//! Database seeding utilities for Casting Agency development and testing.
//!
//! ## Usage
//!
//! ```ignore
//! use casting_cli::seeder::{seed_all, SeedConfig};
//!
//! let config = SeedConfig::new(20, 10).with_links(30);
//! seed_all(&pool, config).await?;
//! ```

pub mod seeder;
