//! # Casting Models
//!
//! Domain models and DTOs for the Casting Agency API.
//!
//! # Modules
//!
//! - [`actors`]: actor rows, create/update DTOs and response bodies
//! - [`movies`]: movie rows, create/update DTOs and response bodies
//! - [`catalog`]: the actor/movie association row
//! - [`patch`]: [`Patch`], the partial-update field where `""` means "keep"
//! - [`date`]: `MM-DD-YYYY` release date (de)serialization
//! - [`responses`]: bodies shared by both resources
//!
//! # Example
//!
//! ```ignore
//! use casting_models::{Actor, UpdateActorDto};
//!
//! let changes: UpdateActorDto =
//!     serde_json::from_str(r#"{"name":"","age":41,"gender":""}"#)?;
//! changes.apply(&mut actor);
//! ```

pub mod actors;
pub mod catalog;
pub mod date;
pub mod movies;
pub mod patch;
pub mod responses;

pub use actors::{Actor, ActorListResponse, ActorsResponse, CreateActorDto, UpdateActorDto};
pub use catalog::CatalogEntry;
pub use date::ReleaseDate;
pub use movies::{CreateMovieDto, Movie, MovieListResponse, MoviesResponse, UpdateMovieDto};
pub use patch::Patch;
pub use responses::{DeletedResponse, HealthResponse};
