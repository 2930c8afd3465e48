use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use casting_core::ErrorResponse;
use casting_models::{
    Actor, ActorListResponse, ActorsResponse, CreateActorDto, CreateMovieDto, DeletedResponse,
    HealthResponse, Movie, MovieListResponse, MoviesResponse, UpdateActorDto, UpdateMovieDto,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::controller::health,
        crate::modules::actors::controller::get_actors,
        crate::modules::actors::controller::create_actor,
        crate::modules::actors::controller::update_actor,
        crate::modules::actors::controller::delete_actor,
        crate::modules::movies::controller::get_movies,
        crate::modules::movies::controller::create_movie,
        crate::modules::movies::controller::update_movie,
        crate::modules::movies::controller::delete_movie,
    ),
    components(
        schemas(
            Actor,
            CreateActorDto,
            UpdateActorDto,
            ActorListResponse,
            ActorsResponse,
            Movie,
            CreateMovieDto,
            UpdateMovieDto,
            MovieListResponse,
            MoviesResponse,
            DeletedResponse,
            HealthResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Actors", description = "Actor management endpoints"),
        (name = "Movies", description = "Movie management endpoints"),
        (name = "Health", description = "Liveness probe")
    ),
    info(
        title = "Casting Agency API",
        version = "0.1.0",
        description = "Actors and movies for a casting agency, guarded by identity-provider issued bearer tokens.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
