use async_trait::async_trait;
use casting_models::{Actor, CatalogEntry, CreateActorDto, CreateMovieDto, Movie};
use sqlx::PgPool;
use tracing::instrument;

use crate::{MIGRATOR, error::StoreError, store::CastingStore};

#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    #[instrument(skip(self))]
    pub async fn migrate(&self) -> Result<(), StoreError> {
        MIGRATOR.run(&self.pool).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn link_actor_to_movie(
        &self,
        actor_id: i64,
        movie_id: i64,
    ) -> Result<CatalogEntry, StoreError> {
        let entry = sqlx::query_as::<_, CatalogEntry>(
            r#"INSERT INTO catalog (actor_id, movie_id)
               VALUES ($1, $2)
               ON CONFLICT (actor_id, movie_id) DO UPDATE SET actor_id = EXCLUDED.actor_id
               RETURNING id, actor_id, movie_id"#,
        )
        .bind(actor_id)
        .bind(movie_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(entry)
    }

    #[instrument(skip(self))]
    pub async fn list_catalog(&self) -> Result<Vec<CatalogEntry>, StoreError> {
        let entries = sqlx::query_as::<_, CatalogEntry>(
            "SELECT id, actor_id, movie_id FROM catalog ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    /// Deletes every row, keeping the schema. Id sequences keep counting.
    #[instrument(skip(self))]
    pub async fn clear_all(&self) -> Result<(), StoreError> {
        sqlx::query("TRUNCATE catalog, movies, actors")
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Drops every table and reruns the migrations.
    #[instrument(skip(self))]
    pub async fn drop_and_create(&self) -> Result<(), StoreError> {
        sqlx::query("DROP TABLE IF EXISTS catalog, movies, actors, _sqlx_migrations CASCADE")
            .execute(&self.pool)
            .await?;
        self.migrate().await
    }
}

#[async_trait]
impl CastingStore for PgStore {
    #[instrument(skip(self))]
    async fn list_actors(&self) -> Result<Vec<Actor>, StoreError> {
        let actors =
            sqlx::query_as::<_, Actor>("SELECT id, name, age, gender FROM actors ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(actors)
    }

    #[instrument(skip(self))]
    async fn find_actor(&self, id: i64) -> Result<Option<Actor>, StoreError> {
        let actor =
            sqlx::query_as::<_, Actor>("SELECT id, name, age, gender FROM actors WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(actor)
    }

    #[instrument(skip(self))]
    async fn insert_actor(&self, actor: CreateActorDto) -> Result<Actor, StoreError> {
        let actor = sqlx::query_as::<_, Actor>(
            r#"INSERT INTO actors (name, age, gender)
               VALUES ($1, $2, $3)
               RETURNING id, name, age, gender"#,
        )
        .bind(&actor.name)
        .bind(actor.age)
        .bind(&actor.gender)
        .fetch_one(&self.pool)
        .await?;

        Ok(actor)
    }

    #[instrument(skip(self))]
    async fn update_actor(&self, actor: &Actor) -> Result<Option<Actor>, StoreError> {
        let actor = sqlx::query_as::<_, Actor>(
            r#"UPDATE actors
               SET name = $2, age = $3, gender = $4
               WHERE id = $1
               RETURNING id, name, age, gender"#,
        )
        .bind(actor.id)
        .bind(&actor.name)
        .bind(actor.age)
        .bind(&actor.gender)
        .fetch_optional(&self.pool)
        .await?;

        Ok(actor)
    }

    #[instrument(skip(self))]
    async fn delete_actor(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM actors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn list_movies(&self) -> Result<Vec<Movie>, StoreError> {
        let movies =
            sqlx::query_as::<_, Movie>("SELECT id, title, release_date FROM movies ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(movies)
    }

    #[instrument(skip(self))]
    async fn find_movie(&self, id: i64) -> Result<Option<Movie>, StoreError> {
        let movie =
            sqlx::query_as::<_, Movie>("SELECT id, title, release_date FROM movies WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(movie)
    }

    #[instrument(skip(self))]
    async fn insert_movie(&self, movie: CreateMovieDto) -> Result<Movie, StoreError> {
        let movie = sqlx::query_as::<_, Movie>(
            r#"INSERT INTO movies (title, release_date)
               VALUES ($1, $2)
               RETURNING id, title, release_date"#,
        )
        .bind(&movie.title)
        .bind(movie.release_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(movie)
    }

    #[instrument(skip(self))]
    async fn update_movie(&self, movie: &Movie) -> Result<Option<Movie>, StoreError> {
        let movie = sqlx::query_as::<_, Movie>(
            r#"UPDATE movies
               SET title = $2, release_date = $3
               WHERE id = $1
               RETURNING id, title, release_date"#,
        )
        .bind(movie.id)
        .bind(&movie.title)
        .bind(movie.release_date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(movie)
    }

    #[instrument(skip(self))]
    async fn delete_movie(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
