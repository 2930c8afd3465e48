//! Signing key set retrieval and caching.
//!
//! Keys are fetched from the identity provider's `/.well-known/jwks.json`, cached for a
//! configurable TTL, and refetched once when a token names a key id the cache has not
//! seen (the provider may have rotated keys). A static set can be supplied instead of
//! an endpoint for tests and offline use.

use std::time::{Duration, Instant};

use casting_core::AuthError;
use jsonwebtoken::DecodingKey;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{info, warn};

const DEFAULT_TTL: Duration = Duration::from_secs(600);
const DEFAULT_REFRESH_COOLDOWN: Duration = Duration::from_secs(30);

/// A single JSON Web Key. Only RSA keys are usable for verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwk {
    pub kty: String,

    #[serde(default)]
    pub kid: Option<String>,

    #[serde(default, rename = "use")]
    pub key_use: Option<String>,

    #[serde(default)]
    pub alg: Option<String>,

    /// RSA modulus (base64url)
    #[serde(default)]
    pub n: Option<String>,

    /// RSA exponent (base64url)
    #[serde(default)]
    pub e: Option<String>,
}

impl Jwk {
    pub fn to_decoding_key(&self) -> Result<DecodingKey, AuthError> {
        if self.kty != "RSA" {
            return Err(AuthError::InvalidKeyId);
        }

        let (Some(n), Some(e)) = (self.n.as_deref(), self.e.as_deref()) else {
            return Err(AuthError::InvalidKeyId);
        };

        DecodingKey::from_rsa_components(n, e).map_err(|_| AuthError::InvalidKeyId)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwks {
    pub keys: Vec<Jwk>,
}

impl Jwks {
    pub fn find(&self, kid: &str) -> Option<&Jwk> {
        self.keys.iter().find(|k| k.kid.as_deref() == Some(kid))
    }
}

struct CachedJwks {
    jwks: Jwks,
    fetched_at: Instant,
}

/// Shared, concurrently readable cache of the provider's signing keys.
pub struct JwksCache {
    endpoint: Option<String>,
    client: reqwest::Client,
    ttl: Duration,
    refresh_cooldown: Duration,
    cache: RwLock<Option<CachedJwks>>,
}

impl JwksCache {
    /// Cache backed by a remote endpoint. Nothing is fetched until the first lookup.
    pub fn remote(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
            client: reqwest::Client::new(),
            ttl: DEFAULT_TTL,
            refresh_cooldown: DEFAULT_REFRESH_COOLDOWN,
            cache: RwLock::new(None),
        }
    }

    /// Fixed key set that never expires.
    pub fn from_jwks(jwks: Jwks) -> Self {
        Self {
            endpoint: None,
            client: reqwest::Client::new(),
            ttl: DEFAULT_TTL,
            refresh_cooldown: DEFAULT_REFRESH_COOLDOWN,
            cache: RwLock::new(Some(CachedJwks {
                jwks,
                fetched_at: Instant::now(),
            })),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, AuthError> {
        let jwks: Jwks = serde_json::from_str(json)
            .map_err(|e| AuthError::KeySetUnavailable(format!("invalid key set: {e}")))?;
        Ok(Self::from_jwks(jwks))
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Minimum age of the cached set before an unknown kid triggers another fetch.
    #[must_use]
    pub fn with_refresh_cooldown(mut self, cooldown: Duration) -> Self {
        self.refresh_cooldown = cooldown;
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Returns the key named `kid`, fetching the set when it is absent, stale, or
    /// missing that key.
    pub async fn key(&self, kid: &str) -> Result<Jwk, AuthError> {
        let (cached, stale, cooling_down) = {
            let cache = self.cache.read().await;
            match cache.as_ref() {
                Some(entry) => {
                    let age = entry.fetched_at.elapsed();
                    (
                        entry.jwks.find(kid).cloned(),
                        age > self.ttl,
                        age < self.refresh_cooldown,
                    )
                }
                None => (None, true, false),
            }
        };

        let Some(endpoint) = self.endpoint.as_deref() else {
            return cached.ok_or(AuthError::InvalidKeyId);
        };

        if !stale {
            match cached {
                Some(jwk) => return Ok(jwk),
                None if cooling_down => return Err(AuthError::InvalidKeyId),
                None => {}
            }
        }

        match self.refresh(endpoint).await {
            Ok(jwks) => jwks.find(kid).cloned().ok_or(AuthError::InvalidKeyId),
            Err(err) => match cached {
                Some(jwk) => {
                    warn!(error = %err, "Key set refresh failed, using cached key");
                    Ok(jwk)
                }
                None => Err(err),
            },
        }
    }

    /// Fetches the remote set now and replaces the cache. Returns the number of keys.
    pub async fn refresh_now(&self) -> Result<usize, AuthError> {
        let Some(endpoint) = self.endpoint.as_deref() else {
            let cache = self.cache.read().await;
            return Ok(cache.as_ref().map_or(0, |entry| entry.jwks.keys.len()));
        };

        self.refresh(endpoint).await.map(|jwks| jwks.keys.len())
    }

    async fn refresh(&self, endpoint: &str) -> Result<Jwks, AuthError> {
        let jwks = fetch_jwks(&self.client, endpoint).await.inspect_err(|err| {
            if let AuthError::KeySetUnavailable(detail) = err {
                warn!(endpoint, detail = %detail, "Failed to fetch signing keys");
            }
        })?;

        info!(endpoint, keys = jwks.keys.len(), "Fetched signing keys");

        let mut cache = self.cache.write().await;
        *cache = Some(CachedJwks {
            jwks: jwks.clone(),
            fetched_at: Instant::now(),
        });

        Ok(jwks)
    }
}

async fn fetch_jwks(client: &reqwest::Client, endpoint: &str) -> Result<Jwks, AuthError> {
    let response = client
        .get(endpoint)
        .send()
        .await
        .map_err(|e| AuthError::KeySetUnavailable(e.to_string()))?;

    if !response.status().is_success() {
        return Err(AuthError::KeySetUnavailable(format!(
            "HTTP {}",
            response.status()
        )));
    }

    response
        .json::<Jwks>()
        .await
        .map_err(|e| AuthError::KeySetUnavailable(e.to_string()))
}
