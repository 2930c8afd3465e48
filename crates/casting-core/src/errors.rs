//! Application error taxonomy and its HTTP mapping.
//!
//! Every failure a handler can produce is one of three classes:
//!
//! - [`AuthError`]: header, token, claim and permission failures (400/401/403)
//! - `NotFound`: the addressed entity does not exist (404)
//! - `Unprocessable`: invalid input or any storage failure (422)
//!
//! Responses always carry the same JSON shape:
//!
//! ```json
//! {"success": false, "error": 404, "message": "resource not found"}
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const NOT_FOUND_MESSAGE: &str = "resource not found";
pub const UNPROCESSABLE_MESSAGE: &str = "unprocessable";

/// Failures raised while authenticating a bearer token or authorizing a permission.
///
/// The `Display` text is the human-readable description returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Authorization header is expected.")]
    MissingHeader,

    #[error("{0}")]
    MalformedHeader(String),

    #[error("Unable to parse authentication token.")]
    MalformedToken,

    #[error("Unable to find the appropriate key.")]
    InvalidKeyId,

    #[error("Token expired.")]
    TokenExpired,

    #[error("Incorrect claims. Please, check the audience and issuer.")]
    InvalidClaims,

    #[error("Token signature is invalid.")]
    InvalidSignature,

    /// The remote key set could not be retrieved. The detail is only logged.
    #[error("Unable to fetch signing keys.")]
    KeySetUnavailable(String),

    #[error("Permissions not included in JWT.")]
    PermissionsClaimMissing,

    /// The token is valid but lacks the named permission.
    #[error("Permission not found.")]
    Unauthorized(String),
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::PermissionsClaimMissing => StatusCode::BAD_REQUEST,
            AuthError::Unauthorized(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::UNAUTHORIZED,
        }
    }

    /// Short machine-readable code, used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::MissingHeader => "authorization_header_missing",
            AuthError::MalformedHeader(_)
            | AuthError::MalformedToken
            | AuthError::InvalidKeyId => "invalid_header",
            AuthError::TokenExpired => "token_expired",
            AuthError::InvalidClaims | AuthError::PermissionsClaimMissing => "invalid_claims",
            AuthError::InvalidSignature => "invalid_signature",
            AuthError::KeySetUnavailable(_) => "jwks_unavailable",
            AuthError::Unauthorized(_) => "unauthorized",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("resource not found: {0:#}")]
    NotFound(anyhow::Error),

    #[error("unprocessable: {0:#}")]
    Unprocessable(anyhow::Error),
}

impl AppError {
    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::NotFound(err.into())
    }

    pub fn unprocessable<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::Unprocessable(err.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Auth(err) => err.status(),
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// The message clients see. Internal detail never leaks past this point.
    pub fn message(&self) -> String {
        match self {
            AppError::Auth(err) => err.to_string(),
            AppError::NotFound(_) => NOT_FOUND_MESSAGE.to_string(),
            AppError::Unprocessable(_) => UNPROCESSABLE_MESSAGE.to_string(),
        }
    }
}

/// JSON body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::Auth(err) => tracing::warn!(
                code = err.code(),
                status = status.as_u16(),
                detail = ?err,
                "Authorization failed"
            ),
            AppError::NotFound(err) => tracing::debug!(error = %err, "Resource not found"),
            AppError::Unprocessable(err) => {
                tracing::warn!(error = %format!("{err:#}"), "Unprocessable request")
            }
        }

        let body = ErrorResponse {
            success: false,
            error: status.as_u16(),
            message: self.message(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_auth_error_statuses() {
        assert_eq!(AuthError::MissingHeader.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AuthError::MalformedHeader("x".into()).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AuthError::InvalidKeyId.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::TokenExpired.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::InvalidClaims.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::InvalidSignature.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AuthError::PermissionsClaimMissing.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::Unauthorized("get:actors".into()).status(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_auth_error_codes() {
        assert_eq!(AuthError::MissingHeader.code(), "authorization_header_missing");
        assert_eq!(AuthError::TokenExpired.code(), "token_expired");
        assert_eq!(AuthError::Unauthorized("x".into()).code(), "unauthorized");
    }

    #[tokio::test]
    async fn test_not_found_body_hides_detail() {
        let (status, body) = body_of(AppError::not_found(anyhow::anyhow!("Actor 7 missing"))).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 404);
        assert_eq!(body["message"], "resource not found");
    }

    #[tokio::test]
    async fn test_unprocessable_body() {
        let (status, body) =
            body_of(AppError::unprocessable(anyhow::anyhow!("name is required"))).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], 422);
        assert_eq!(body["message"], "unprocessable");
    }

    #[tokio::test]
    async fn test_auth_error_body_uses_description() {
        let (status, body) =
            body_of(AppError::from(AuthError::Unauthorized("get:actors".into()))).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 403);
        assert_eq!(body["message"], "Permission not found.");
    }

    #[tokio::test]
    async fn test_key_set_detail_not_exposed() {
        let (_, body) = body_of(AppError::from(AuthError::KeySetUnavailable(
            "connection refused".into(),
        )))
        .await;

        assert_eq!(body["error"], 401);
        assert_eq!(body["message"], "Unable to fetch signing keys.");
    }
}
