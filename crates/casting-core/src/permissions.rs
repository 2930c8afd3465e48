//! Permission constants for the Casting Agency API.
//!
//! These strings must match the permissions granted by the identity provider
//! and carried in the token's `permissions` claim.

// =============================================================================
// Actors permissions
// =============================================================================

/// Permission to list actors
pub const GET_ACTORS: &str = "get:actors";
/// Permission to create actors
pub const POST_ACTORS: &str = "post:actors";
/// Permission to update actors
pub const PATCH_ACTORS: &str = "patch:actors";
/// Permission to delete actors
pub const DELETE_ACTORS: &str = "delete:actors";

// =============================================================================
// Movies permissions
// =============================================================================

/// Permission to list movies
pub const GET_MOVIES: &str = "get:movies";
/// Permission to create movies
pub const POST_MOVIES: &str = "post:movies";
/// Permission to update movies
pub const PATCH_MOVIES: &str = "patch:movies";
/// Permission to delete movies
pub const DELETE_MOVIES: &str = "delete:movies";
