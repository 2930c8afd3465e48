//! # Casting DB
//!
//! Storage for actors and movies.
//!
//! Handlers talk to a [`CastingStore`] trait object; two implementations exist:
//!
//! - [`PgStore`]: PostgreSQL through SQLx, schema managed by the embedded [`MIGRATOR`]
//! - [`MemoryStore`]: process-local maps, for tests and database-less runs
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use casting_db::{CastingStore, PgStore, init_db_pool};
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
//! casting_db::MIGRATOR.run(&pool).await?;
//! let store: Arc<dyn CastingStore> = Arc::new(PgStore::new(pool));
//! ```

pub mod error;
pub mod memory;
pub mod pg;
pub mod pool;
pub mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use pg::PgStore;
pub use pool::init_db_pool;
pub use store::CastingStore;

// Re-export PgPool for convenience
pub use sqlx::PgPool;

/// Schema migrations, embedded at compile time.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
