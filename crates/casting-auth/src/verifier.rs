use casting_config::AuthConfig;
use casting_core::AuthError;
use jsonwebtoken::{Algorithm, Validation, decode, decode_header, errors::ErrorKind};
use tracing::debug;

use crate::{claims::Claims, header::bearer_token, jwks::JwksCache};

pub const ALGORITHM: Algorithm = Algorithm::RS256;

/// Verifies RS256 bearer tokens issued by the configured identity provider.
pub struct TokenVerifier {
    keys: JwksCache,
    issuer: String,
    audience: String,
}

impl TokenVerifier {
    pub fn new(keys: JwksCache, issuer: impl Into<String>, audience: impl Into<String>) -> Self {
        Self {
            keys,
            issuer: issuer.into(),
            audience: audience.into(),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        let keys = JwksCache::remote(config.jwks_url()).with_ttl(config.jwks_cache_ttl);
        Self::new(keys, config.issuer(), config.audience.clone())
    }

    pub fn keys(&self) -> &JwksCache {
        &self.keys
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    /// Checks signature, expiry, audience and issuer, and returns the payload.
    pub async fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let header = decode_header(token).map_err(|_| AuthError::MalformedToken)?;
        let kid = header.kid.ok_or(AuthError::MalformedToken)?;

        let jwk = self.keys.key(&kid).await?;
        let decoding_key = jwk.to_decoding_key()?;

        let mut validation = Validation::new(ALGORITHM);
        validation.set_audience(&[&self.audience]);
        validation.set_issuer(&[&self.issuer]);
        validation.set_required_spec_claims(&["exp", "aud", "iss"]);

        decode::<Claims>(token, &decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|err| {
                debug!(kid, error = %err, "Token rejected");
                map_jwt_error(err.kind())
            })
    }

    /// Parses the raw `Authorization` header value and verifies its token.
    pub async fn authenticate(&self, header: Option<&str>) -> Result<Claims, AuthError> {
        let token = bearer_token(header)?;
        self.verify(token).await
    }
}

fn map_jwt_error(kind: &ErrorKind) -> AuthError {
    match kind {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        ErrorKind::InvalidAudience
        | ErrorKind::InvalidIssuer
        | ErrorKind::MissingRequiredClaim(_)
        | ErrorKind::ImmatureSignature => AuthError::InvalidClaims,
        ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        _ => AuthError::MalformedToken,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{
        ROGUE_PRIVATE_KEY_PEM, TEST_AUDIENCE, TEST_ISSUER, TEST_KID, claims_with_permissions,
        sign_token, sign_with, test_verifier,
    };
    use serde_json::json;
    use std::time::Duration;

    fn now() -> i64 {
        chrono::Utc::now().timestamp()
    }

    #[tokio::test]
    async fn test_valid_token() {
        let token = sign_token(&claims_with_permissions(&["get:actors"]));
        let claims = test_verifier().verify(&token).await.unwrap();

        assert_eq!(claims.permissions, Some(vec!["get:actors".to_string()]));
        assert_eq!(claims.subject(), Some("auth0|casting-test"));
        assert_eq!(
            claims.claim("iss").and_then(|v| v.as_str()),
            Some(TEST_ISSUER)
        );
    }

    #[tokio::test]
    async fn test_audience_list_accepted() {
        let token = sign_token(&json!({
            "iss": TEST_ISSUER,
            "aud": [TEST_AUDIENCE, "https://other.example.com/userinfo"],
            "sub": "auth0|list",
            "exp": now() + 600,
            "permissions": [],
        }));
        assert!(test_verifier().verify(&token).await.is_ok());
    }

    #[tokio::test]
    async fn test_expired_token() {
        let mut claims = claims_with_permissions(&["get:actors"]);
        claims["exp"] = json!(now() - 3600);

        let err = test_verifier().verify(&sign_token(&claims)).await.unwrap_err();
        assert_eq!(err, AuthError::TokenExpired);
    }

    #[tokio::test]
    async fn test_wrong_audience() {
        let mut claims = claims_with_permissions(&["get:actors"]);
        claims["aud"] = json!("someone-else");

        let err = test_verifier().verify(&sign_token(&claims)).await.unwrap_err();
        assert_eq!(err, AuthError::InvalidClaims);
    }

    #[tokio::test]
    async fn test_wrong_issuer() {
        let mut claims = claims_with_permissions(&["get:actors"]);
        claims["iss"] = json!("https://evil.example.com/");

        let err = test_verifier().verify(&sign_token(&claims)).await.unwrap_err();
        assert_eq!(err, AuthError::InvalidClaims);
    }

    #[tokio::test]
    async fn test_missing_audience_claim() {
        let token = sign_token(&json!({
            "iss": TEST_ISSUER,
            "exp": now() + 600,
            "permissions": ["get:actors"],
        }));

        let err = test_verifier().verify(&token).await.unwrap_err();
        assert_eq!(err, AuthError::InvalidClaims);
    }

    #[tokio::test]
    async fn test_foreign_signature() {
        let token = sign_with(
            ROGUE_PRIVATE_KEY_PEM,
            TEST_KID,
            &claims_with_permissions(&["get:actors"]),
        );

        let err = test_verifier().verify(&token).await.unwrap_err();
        assert_eq!(err, AuthError::InvalidSignature);
    }

    #[tokio::test]
    async fn test_unknown_kid() {
        let token = sign_with(
            ROGUE_PRIVATE_KEY_PEM,
            "rotated-away",
            &claims_with_permissions(&["get:actors"]),
        );

        let err = test_verifier().verify(&token).await.unwrap_err();
        assert_eq!(err, AuthError::InvalidKeyId);
    }

    #[tokio::test]
    async fn test_garbage_token() {
        let err = test_verifier().verify("not-a-jwt").await.unwrap_err();
        assert_eq!(err, AuthError::MalformedToken);
    }

    #[tokio::test]
    async fn test_token_without_kid() {
        // header {"alg":"RS256","typ":"JWT"}
        let token = "eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXVCJ9.e30.c2ln";

        let err = test_verifier().verify(token).await.unwrap_err();
        assert_eq!(err, AuthError::MalformedToken);
    }

    #[tokio::test]
    async fn test_authenticate_parses_header() {
        let verifier = test_verifier();
        let token = sign_token(&claims_with_permissions(&["get:movies"]));

        let claims = verifier
            .authenticate(Some(&format!("Bearer {token}")))
            .await
            .unwrap();
        assert!(claims.has_permission("get:movies"));

        assert_eq!(
            verifier.authenticate(None).await.unwrap_err(),
            AuthError::MissingHeader
        );
    }

    #[test]
    fn test_from_config() {
        let config = AuthConfig {
            domain: "casting.us.auth0.com".to_string(),
            audience: "casting".to_string(),
            jwks_cache_ttl: Duration::from_secs(60),
            ..Default::default()
        };
        let verifier = TokenVerifier::from_config(&config);

        assert_eq!(verifier.issuer(), "https://casting.us.auth0.com/");
        assert_eq!(verifier.audience(), "casting");
        assert_eq!(
            verifier.keys().endpoint(),
            Some("https://casting.us.auth0.com/.well-known/jwks.json")
        );
        assert_eq!(verifier.keys().ttl(), Duration::from_secs(60));
    }
}
