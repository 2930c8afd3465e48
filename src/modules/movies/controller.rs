use axum::{Json, body::Bytes, extract::State};
use tracing::instrument;

use casting_core::{AppError, ErrorResponse};
use casting_models::{
    CreateMovieDto, DeletedResponse, MovieListResponse, MoviesResponse, UpdateMovieDto,
};

use crate::middleware::auth::{
    RequireDeleteMovies, RequireGetMovies, RequirePatchMovies, RequirePostMovies,
};
use crate::modules::movies::service::MovieService;
use crate::state::AppState;
use crate::validator::{ResourceId, ValidatedJson};

#[utoipa::path(
    get,
    path = "/movies",
    responses(
        (status = 200, description = "All movies, ordered by id", body = MovieListResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - requires get:movies permission", body = ErrorResponse),
        (status = 404, description = "No movies stored", body = ErrorResponse)
    ),
    tag = "Movies",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user), fields(subject = ?auth_user.subject()))]
pub async fn get_movies(
    State(state): State<AppState>,
    RequireGetMovies(auth_user): RequireGetMovies,
) -> Result<Json<MovieListResponse>, AppError> {
    let movies = MovieService::list_movies(state.store.as_ref()).await?;
    Ok(Json(MovieListResponse::new(movies)))
}

#[utoipa::path(
    post,
    path = "/movies",
    request_body = CreateMovieDto,
    responses(
        (status = 200, description = "Movie created", body = MoviesResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - requires post:movies permission", body = ErrorResponse),
        (status = 422, description = "Missing or empty field", body = ErrorResponse)
    ),
    tag = "Movies",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user), fields(subject = ?auth_user.subject()))]
pub async fn create_movie(
    State(state): State<AppState>,
    RequirePostMovies(auth_user): RequirePostMovies,
    ValidatedJson(dto): ValidatedJson<CreateMovieDto>,
) -> Result<Json<MoviesResponse>, AppError> {
    let movie = MovieService::create_movie(state.store.as_ref(), dto).await?;
    Ok(Json(MoviesResponse::single(movie)))
}

#[utoipa::path(
    patch,
    path = "/movies/{id}",
    params(
        ("id" = i64, Path, description = "Movie ID")
    ),
    request_body = UpdateMovieDto,
    responses(
        (status = 200, description = "Movie updated", body = MoviesResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - requires patch:movies permission", body = ErrorResponse),
        (status = 404, description = "Movie not found", body = ErrorResponse),
        (status = 422, description = "Missing field or invalid value", body = ErrorResponse)
    ),
    tag = "Movies",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user, body), fields(subject = ?auth_user.subject()))]
pub async fn update_movie(
    State(state): State<AppState>,
    RequirePatchMovies(auth_user): RequirePatchMovies,
    ResourceId(id): ResourceId,
    body: Bytes,
) -> Result<Json<MoviesResponse>, AppError> {
    let movie = MovieService::update_movie(state.store.as_ref(), id, &body).await?;
    Ok(Json(MoviesResponse::single(movie)))
}

#[utoipa::path(
    delete,
    path = "/movies/{id}",
    params(
        ("id" = i64, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie deleted", body = DeletedResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - requires delete:movies permission", body = ErrorResponse),
        (status = 404, description = "Movie not found", body = ErrorResponse)
    ),
    tag = "Movies",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user), fields(subject = ?auth_user.subject()))]
pub async fn delete_movie(
    State(state): State<AppState>,
    RequireDeleteMovies(auth_user): RequireDeleteMovies,
    ResourceId(id): ResourceId,
) -> Result<Json<DeletedResponse>, AppError> {
    let deleted = MovieService::delete_movie(state.store.as_ref(), id).await?;
    Ok(Json(DeletedResponse::new(deleted)))
}
