use anyhow::anyhow;
use casting_core::AppError;
use casting_db::CastingStore;
use casting_models::{Actor, CreateActorDto, UpdateActorDto};
use tracing::instrument;

use crate::validator::parse_json_body;

pub struct ActorService;

impl ActorService {
    #[instrument(skip(store))]
    pub async fn list_actors(store: &dyn CastingStore) -> Result<Vec<Actor>, AppError> {
        let actors = store.list_actors().await?;

        if actors.is_empty() {
            return Err(AppError::not_found(anyhow!("No actors stored")));
        }

        Ok(actors)
    }

    #[instrument(skip(store))]
    pub async fn create_actor(
        store: &dyn CastingStore,
        dto: CreateActorDto,
    ) -> Result<Actor, AppError> {
        let actor = store.insert_actor(dto).await?;
        Ok(actor)
    }

    /// Looks the actor up before reading the body, so an unknown id is a 404 even
    /// when the body is invalid.
    #[instrument(skip(store, body))]
    pub async fn update_actor(
        store: &dyn CastingStore,
        id: i64,
        body: &[u8],
    ) -> Result<Actor, AppError> {
        let mut actor = store
            .find_actor(id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Actor {id} not found")))?;

        let changes: UpdateActorDto = parse_json_body(body)?;
        changes.apply(&mut actor);

        store
            .update_actor(&actor)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Actor {id} removed during update")))
    }

    #[instrument(skip(store))]
    pub async fn delete_actor(store: &dyn CastingStore, id: i64) -> Result<i64, AppError> {
        if !store.delete_actor(id).await? {
            return Err(AppError::not_found(anyhow!("Actor {id} not found")));
        }

        Ok(id)
    }
}
