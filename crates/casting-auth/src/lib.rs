//! # Casting Auth
//!
//! Bearer token authentication for the Casting Agency API.
//!
//! - [`header`]: `Authorization` header parsing
//! - [`jwks`]: remote signing key retrieval and caching
//! - [`verifier`]: RS256 signature, expiry, audience and issuer checks
//! - [`permissions`]: the permission check run after verification
//!
//! # Example
//!
//! ```ignore
//! use casting_auth::{TokenVerifier, check_permissions};
//!
//! let verifier = TokenVerifier::from_config(&auth_config);
//! let claims = verifier.authenticate(Some("Bearer eyJ...")).await?;
//! check_permissions("get:actors", &claims)?;
//! ```

pub mod claims;
pub mod header;
pub mod jwks;
pub mod permissions;
pub mod verifier;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use claims::Claims;
pub use header::bearer_token;
pub use jwks::{Jwk, Jwks, JwksCache};
pub use permissions::check_permissions;
pub use verifier::TokenVerifier;
