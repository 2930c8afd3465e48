use std::collections::BTreeMap;

use async_trait::async_trait;
use casting_models::{Actor, CreateActorDto, CreateMovieDto, Movie};
use tokio::sync::RwLock;

use crate::{error::StoreError, store::CastingStore};

#[derive(Default)]
struct Tables {
    actors: BTreeMap<i64, Actor>,
    movies: BTreeMap<i64, Movie>,
    last_actor_id: i64,
    last_movie_id: i64,
}

/// In-process store. Ids start at 1 and are never reused.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CastingStore for MemoryStore {
    async fn list_actors(&self) -> Result<Vec<Actor>, StoreError> {
        Ok(self.tables.read().await.actors.values().cloned().collect())
    }

    async fn find_actor(&self, id: i64) -> Result<Option<Actor>, StoreError> {
        Ok(self.tables.read().await.actors.get(&id).cloned())
    }

    async fn insert_actor(&self, actor: CreateActorDto) -> Result<Actor, StoreError> {
        let mut tables = self.tables.write().await;
        tables.last_actor_id += 1;

        let actor = Actor {
            id: tables.last_actor_id,
            name: actor.name,
            age: actor.age,
            gender: actor.gender,
        };
        tables.actors.insert(actor.id, actor.clone());

        Ok(actor)
    }

    async fn update_actor(&self, actor: &Actor) -> Result<Option<Actor>, StoreError> {
        let mut tables = self.tables.write().await;
        Ok(tables.actors.get_mut(&actor.id).map(|stored| {
            stored.clone_from(actor);
            stored.clone()
        }))
    }

    async fn delete_actor(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.tables.write().await.actors.remove(&id).is_some())
    }

    async fn list_movies(&self) -> Result<Vec<Movie>, StoreError> {
        Ok(self.tables.read().await.movies.values().cloned().collect())
    }

    async fn find_movie(&self, id: i64) -> Result<Option<Movie>, StoreError> {
        Ok(self.tables.read().await.movies.get(&id).cloned())
    }

    async fn insert_movie(&self, movie: CreateMovieDto) -> Result<Movie, StoreError> {
        let mut tables = self.tables.write().await;
        tables.last_movie_id += 1;

        let movie = Movie {
            id: tables.last_movie_id,
            title: movie.title,
            release_date: movie.release_date,
        };
        tables.movies.insert(movie.id, movie.clone());

        Ok(movie)
    }

    async fn update_movie(&self, movie: &Movie) -> Result<Option<Movie>, StoreError> {
        let mut tables = self.tables.write().await;
        Ok(tables.movies.get_mut(&movie.id).map(|stored| {
            stored.clone_from(movie);
            stored.clone()
        }))
    }

    async fn delete_movie(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.tables.write().await.movies.remove(&id).is_some())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
