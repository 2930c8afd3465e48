//! Identity provider configuration.
//!
//! # Environment Variables
//!
//! - `AUTH0_DOMAIN`: tenant domain, e.g. `casting.us.auth0.com`
//! - `API_AUDIENCE`: API identifier tokens must be issued for
//! - `CLIENT_ID` / `CLIENT_SECRET`: application credentials (not used for verification)
//! - `JWKS_CACHE_TTL_SECS`: how long fetched signing keys stay fresh (default: 3600)

use std::env;
use std::time::Duration;

#[derive(Clone, Debug, Default)]
pub struct AuthConfig {
    pub domain: String,
    pub audience: String,
    pub client_id: String,
    pub client_secret: String,
    pub jwks_cache_ttl: Duration,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            domain: env::var("AUTH0_DOMAIN").unwrap_or_default(),
            audience: env::var("API_AUDIENCE").unwrap_or_default(),
            client_id: env::var("CLIENT_ID").unwrap_or_default(),
            client_secret: env::var("CLIENT_SECRET").unwrap_or_default(),
            jwks_cache_ttl: Duration::from_secs(
                env::var("JWKS_CACHE_TTL_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(3600), // 1 hour
            ),
        }
    }

    /// Domain without scheme or trailing slash.
    fn host(&self) -> &str {
        self.domain
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/')
    }

    /// Expected `iss` claim.
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.host())
    }

    pub fn jwks_url(&self) -> String {
        format!("https://{}/.well-known/jwks.json", self.host())
    }

    pub fn is_configured(&self) -> bool {
        !self.host().is_empty() && !self.audience.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(domain: &str) -> AuthConfig {
        AuthConfig {
            domain: domain.to_string(),
            audience: "casting".to_string(),
            ..AuthConfig::default()
        }
    }

    #[test]
    fn test_issuer_and_jwks_url() {
        let config = config("casting.us.auth0.com");
        assert_eq!(config.issuer(), "https://casting.us.auth0.com/");
        assert_eq!(
            config.jwks_url(),
            "https://casting.us.auth0.com/.well-known/jwks.json"
        );
    }

    #[test]
    fn test_domain_with_scheme_and_slash() {
        let config = config("https://casting.us.auth0.com/");
        assert_eq!(config.issuer(), "https://casting.us.auth0.com/");
    }

    #[test]
    fn test_is_configured() {
        assert!(config("casting.us.auth0.com").is_configured());
        assert!(!config("").is_configured());
        assert!(!AuthConfig::default().is_configured());
    }
}
