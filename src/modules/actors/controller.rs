use axum::{Json, body::Bytes, extract::State};
use tracing::instrument;

use casting_core::{AppError, ErrorResponse};
use casting_models::{
    ActorListResponse, ActorsResponse, CreateActorDto, DeletedResponse, UpdateActorDto,
};

use crate::middleware::auth::{
    RequireDeleteActors, RequireGetActors, RequirePatchActors, RequirePostActors,
};
use crate::modules::actors::service::ActorService;
use crate::state::AppState;
use crate::validator::{ResourceId, ValidatedJson};

#[utoipa::path(
    get,
    path = "/actors",
    responses(
        (status = 200, description = "All actors, ordered by id", body = ActorListResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - requires get:actors permission", body = ErrorResponse),
        (status = 404, description = "No actors stored", body = ErrorResponse)
    ),
    tag = "Actors",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user), fields(subject = ?auth_user.subject()))]
pub async fn get_actors(
    State(state): State<AppState>,
    RequireGetActors(auth_user): RequireGetActors,
) -> Result<Json<ActorListResponse>, AppError> {
    let actors = ActorService::list_actors(state.store.as_ref()).await?;
    Ok(Json(ActorListResponse::new(actors)))
}

#[utoipa::path(
    post,
    path = "/actors",
    request_body = CreateActorDto,
    responses(
        (status = 200, description = "Actor created", body = ActorsResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - requires post:actors permission", body = ErrorResponse),
        (status = 422, description = "Missing or empty field", body = ErrorResponse)
    ),
    tag = "Actors",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user), fields(subject = ?auth_user.subject()))]
pub async fn create_actor(
    State(state): State<AppState>,
    RequirePostActors(auth_user): RequirePostActors,
    ValidatedJson(dto): ValidatedJson<CreateActorDto>,
) -> Result<Json<ActorsResponse>, AppError> {
    let actor = ActorService::create_actor(state.store.as_ref(), dto).await?;
    Ok(Json(ActorsResponse::single(actor)))
}

#[utoipa::path(
    patch,
    path = "/actors/{id}",
    params(
        ("id" = i64, Path, description = "Actor ID")
    ),
    request_body = UpdateActorDto,
    responses(
        (status = 200, description = "Actor updated", body = ActorsResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - requires patch:actors permission", body = ErrorResponse),
        (status = 404, description = "Actor not found", body = ErrorResponse),
        (status = 422, description = "Missing field or invalid value", body = ErrorResponse)
    ),
    tag = "Actors",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user, body), fields(subject = ?auth_user.subject()))]
pub async fn update_actor(
    State(state): State<AppState>,
    RequirePatchActors(auth_user): RequirePatchActors,
    ResourceId(id): ResourceId,
    body: Bytes,
) -> Result<Json<ActorsResponse>, AppError> {
    let actor = ActorService::update_actor(state.store.as_ref(), id, &body).await?;
    Ok(Json(ActorsResponse::single(actor)))
}

#[utoipa::path(
    delete,
    path = "/actors/{id}",
    params(
        ("id" = i64, Path, description = "Actor ID")
    ),
    responses(
        (status = 200, description = "Actor deleted", body = DeletedResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - requires delete:actors permission", body = ErrorResponse),
        (status = 404, description = "Actor not found", body = ErrorResponse)
    ),
    tag = "Actors",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user), fields(subject = ?auth_user.subject()))]
pub async fn delete_actor(
    State(state): State<AppState>,
    RequireDeleteActors(auth_user): RequireDeleteActors,
    ResourceId(id): ResourceId,
) -> Result<Json<DeletedResponse>, AppError> {
    let deleted = ActorService::delete_actor(state.store.as_ref(), id).await?;
    Ok(Json(DeletedResponse::new(deleted)))
}
