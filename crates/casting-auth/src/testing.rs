//! Token minting helpers for tests. Compiled only for tests or with `test-utils`.

use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Value, json};

use crate::{jwks::JwksCache, verifier::ALGORITHM, verifier::TokenVerifier};

pub const TEST_KID: &str = "casting-test-key";
pub const TEST_ISSUER: &str = "https://casting-test.us.auth0.com/";
pub const TEST_AUDIENCE: &str = "casting-agency";
pub const TEST_SUBJECT: &str = "auth0|casting-test";

pub const TEST_JWKS_JSON: &str = include_str!("../../../fixtures/test_jwks.json");
pub const TEST_PRIVATE_KEY_PEM: &str = include_str!("../../../fixtures/test_signing_key.pem");
/// Signs validly-shaped tokens the test key set cannot verify.
pub const ROGUE_PRIVATE_KEY_PEM: &str = include_str!("../../../fixtures/rogue_signing_key.pem");

/// Verifier trusting only the fixture key set.
pub fn test_verifier() -> TokenVerifier {
    let keys = JwksCache::from_json(TEST_JWKS_JSON).expect("fixture key set parses");
    TokenVerifier::new(keys, TEST_ISSUER, TEST_AUDIENCE)
}

/// Well-formed claims for the test issuer and audience, valid for an hour.
pub fn claims_with_permissions(permissions: &[&str]) -> Value {
    let now = chrono::Utc::now().timestamp();
    json!({
        "iss": TEST_ISSUER,
        "sub": TEST_SUBJECT,
        "aud": TEST_AUDIENCE,
        "iat": now,
        "exp": now + 3600,
        "permissions": permissions,
    })
}

pub fn sign_token(claims: &Value) -> String {
    sign_with(TEST_PRIVATE_KEY_PEM, TEST_KID, claims)
}

pub fn sign_with(private_key_pem: &str, kid: &str, claims: &Value) -> String {
    let mut header = Header::new(ALGORITHM);
    header.kid = Some(kid.to_string());

    let key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes()).expect("fixture key parses");
    encode(&header, claims, &key).expect("token encodes")
}

/// `Authorization` header value for a token granting `permissions`.
pub fn bearer_for(permissions: &[&str]) -> String {
    format!("Bearer {}", sign_token(&claims_with_permissions(permissions)))
}
