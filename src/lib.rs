//! # Casting Agency API
//!
//! A REST API built with Rust, Axum, and PostgreSQL that manages the actors and
//! movies of a casting agency. Every endpoint is protected by a bearer token issued
//! by an external identity provider (Auth0) and a per-endpoint permission.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # Auth Gate: token and permission extractors
//! ├── modules/          # Feature modules
//! │   ├── actors/      # Actor CRUD
//! │   ├── movies/      # Movie CRUD
//! │   └── health/      # Liveness probe and unknown-route fallback
//! ├── docs.rs           # OpenAPI document
//! ├── logging.rs        # Request logging and subscriber setup
//! ├── router.rs         # Route table, CORS and response headers
//! ├── state.rs          # Shared application state
//! └── validator.rs      # Body and path extractors
//! ```
//!
//! Each feature module follows the same structure:
//!
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: business logic over a [`casting_db::CastingStore`]
//! - `router.rs`: Axum router configuration
//!
//! ## Roles
//!
//! Roles are assigned in the identity provider; the API only sees permissions.
//!
//! | Role | Permissions |
//! |------|-------------|
//! | Casting Assistant | `get:actors`, `get:movies` |
//! | Casting Director | Assistant + `post:actors`, `delete:actors`, `patch:actors`, `patch:movies` |
//! | Executive Producer | Director + `post:movies`, `delete:movies` |
//!
//! ## Quick Start
//!
//! ```bash
//! AUTH0_DOMAIN=casting.us.auth0.com
//! API_AUDIENCE=casting-agency
//! DATABASE_USERNAME=postgres
//! DATABASE_PASSWORD=postgres
//! DATABASE_NAME=casting
//! cargo run
//! ```
//!
//! Swagger UI is served at `http://localhost:3000/swagger-ui`.

pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use casting_auth;
pub use casting_config;
pub use casting_core;
pub use casting_db;
pub use casting_models;
