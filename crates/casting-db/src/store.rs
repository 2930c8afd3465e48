use async_trait::async_trait;
use casting_models::{Actor, CreateActorDto, CreateMovieDto, Movie};

use crate::error::StoreError;

/// Persistence for actors and movies.
///
/// Each mutating call commits on its own. Lists are ordered by id ascending.
/// `update_*` writes every column of the given row and returns `None` when no row
/// has that id; `delete_*` returns whether a row was removed.
#[async_trait]
pub trait CastingStore: Send + Sync {
    async fn list_actors(&self) -> Result<Vec<Actor>, StoreError>;
    async fn find_actor(&self, id: i64) -> Result<Option<Actor>, StoreError>;
    async fn insert_actor(&self, actor: CreateActorDto) -> Result<Actor, StoreError>;
    async fn update_actor(&self, actor: &Actor) -> Result<Option<Actor>, StoreError>;
    async fn delete_actor(&self, id: i64) -> Result<bool, StoreError>;

    async fn list_movies(&self) -> Result<Vec<Movie>, StoreError>;
    async fn find_movie(&self, id: i64) -> Result<Option<Movie>, StoreError>;
    async fn insert_movie(&self, movie: CreateMovieDto) -> Result<Movie, StoreError>;
    async fn update_movie(&self, movie: &Movie) -> Result<Option<Movie>, StoreError>;
    async fn delete_movie(&self, id: i64) -> Result<bool, StoreError>;

    /// Short backend name for logs.
    fn backend(&self) -> &'static str;
}
