use anyhow::anyhow;
use casting_core::AppError;
use casting_db::CastingStore;
use casting_models::{CreateMovieDto, Movie, UpdateMovieDto};
use tracing::instrument;

use crate::validator::parse_json_body;

pub struct MovieService;

impl MovieService {
    #[instrument(skip(store))]
    pub async fn list_movies(store: &dyn CastingStore) -> Result<Vec<Movie>, AppError> {
        let movies = store.list_movies().await?;

        if movies.is_empty() {
            return Err(AppError::not_found(anyhow!("No movies stored")));
        }

        Ok(movies)
    }

    #[instrument(skip(store))]
    pub async fn create_movie(
        store: &dyn CastingStore,
        dto: CreateMovieDto,
    ) -> Result<Movie, AppError> {
        let movie = store.insert_movie(dto).await?;
        Ok(movie)
    }

    #[instrument(skip(store, body))]
    pub async fn update_movie(
        store: &dyn CastingStore,
        id: i64,
        body: &[u8],
    ) -> Result<Movie, AppError> {
        let mut movie = store
            .find_movie(id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Movie {id} not found")))?;

        let changes: UpdateMovieDto = parse_json_body(body)?;
        changes.apply(&mut movie);

        store
            .update_movie(&movie)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Movie {id} removed during update")))
    }

    #[instrument(skip(store))]
    pub async fn delete_movie(store: &dyn CastingStore, id: i64) -> Result<i64, AppError> {
        if !store.delete_movie(id).await? {
            return Err(AppError::not_found(anyhow!("Movie {id} not found")));
        }

        Ok(id)
    }
}
