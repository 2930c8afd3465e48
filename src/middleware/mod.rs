//! Request guards.
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. [`auth::AuthUser`] verifies the token against the identity provider's keys
//! 3. A permission extractor such as [`auth::RequireGetActors`] checks the
//!    `permissions` claim
//! 4. Handler executes if all checks pass
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::RequirePostActors;
//!
//! async fn create_actor(
//!     RequirePostActors(auth_user): RequirePostActors,
//! ) -> impl IntoResponse {
//!     // Only executes if the token grants "post:actors"
//! }
//! ```

pub mod auth;
