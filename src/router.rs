use axum::http::{HeaderName, HeaderValue, Method, header};
use axum::{Router, middleware};
use casting_config::CorsConfig;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::actors::init_actors_router;
use crate::modules::health::controller::route_not_found;
use crate::modules::health::init_health_router;
use crate::modules::movies::init_movies_router;
use crate::state::AppState;

pub const ALLOW_HEADERS_VALUE: &str = "Content-Type,Authorization,true";
pub const ALLOW_METHODS_VALUE: &str = "GET,PUT,POST,PATCH,DELETE,OPTIONS";

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/health", init_health_router())
        .nest("/actors", init_actors_router())
        .nest("/movies", init_movies_router())
        .fallback(route_not_found)
        .with_state(state.clone())
        .layer(cors_layer(&state.cors_config))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS_VALUE),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS_VALUE),
        ))
        .layer(middleware::from_fn(logging_middleware))
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .expose_headers([HeaderName::from_static("x-request-id")]);

    if config.allows_any_origin() {
        return layer.allow_origin(AllowOrigin::any());
    }

    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    layer
        .allow_origin(allowed_origins)
        .allow_credentials(true)
}
