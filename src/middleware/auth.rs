use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use casting_auth::Claims;
use casting_core::{AppError, AuthError, permissions};

use crate::state::AppState;

/// Extractor that verifies the bearer token and provides its claims.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn claims(&self) -> &Claims {
        &self.0
    }

    pub fn subject(&self) -> Option<&str> {
        self.0.subject()
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.0.has_permission(permission)
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = match parts.headers.get(header::AUTHORIZATION) {
            Some(value) => Some(value.to_str().map_err(|_| {
                AuthError::MalformedHeader("Authorization header must be bearer token.".to_string())
            })?),
            None => None,
        };

        let claims = state.verifier.authenticate(auth_header).await?;

        Ok(AuthUser(claims))
    }
}

/// Generates an extractor that authenticates the request and then requires one
/// permission. Declare it before path and body extractors so authorization
/// failures are reported first.
#[macro_export]
macro_rules! require_permission {
    ($name:ident, $permission:expr) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub $crate::middleware::auth::AuthUser);

        impl axum::extract::FromRequestParts<$crate::state::AppState> for $name {
            type Rejection = casting_core::AppError;

            async fn from_request_parts(
                parts: &mut axum::http::request::Parts,
                state: &$crate::state::AppState,
            ) -> Result<Self, Self::Rejection> {
                let auth_user = <$crate::middleware::auth::AuthUser as axum::extract::FromRequestParts<
                    $crate::state::AppState,
                >>::from_request_parts(parts, state)
                .await?;

                casting_auth::check_permissions($permission, auth_user.claims())?;

                Ok($name(auth_user))
            }
        }
    };
}

// Actors permissions
require_permission!(RequireGetActors, permissions::GET_ACTORS);
require_permission!(RequirePostActors, permissions::POST_ACTORS);
require_permission!(RequirePatchActors, permissions::PATCH_ACTORS);
require_permission!(RequireDeleteActors, permissions::DELETE_ACTORS);

// Movies permissions
require_permission!(RequireGetMovies, permissions::GET_MOVIES);
require_permission!(RequirePostMovies, permissions::POST_MOVIES);
require_permission!(RequirePatchMovies, permissions::PATCH_MOVIES);
require_permission!(RequireDeleteMovies, permissions::DELETE_MOVIES);
