//! # Casting Config
//!
//! Configuration types for the Casting Agency API.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`auth`]: identity provider (domain, audience, client credentials, key cache)
//! - [`database`]: PostgreSQL connection settings
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: listen address and storage backend selection
//!
//! # Example
//!
//! ```ignore
//! use casting_config::{AuthConfig, CorsConfig, DatabaseConfig, ServerConfig};
//!
//! // Load all configs from environment
//! let auth_config = AuthConfig::from_env();
//! let database_config = DatabaseConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod auth;
pub mod cors;
pub mod database;
pub mod server;

// Re-export commonly used types at crate root
pub use auth::AuthConfig;
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use server::{ServerConfig, StorageBackend};
