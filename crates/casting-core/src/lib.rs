//! # Casting Core
//!
//! Core types shared by every Casting Agency crate:
//!
//! - [`errors`]: the error taxonomy ([`AuthError`], [`AppError`]) and its HTTP mapping
//! - [`permissions`]: permission string constants
//!
//! # Example
//!
//! ```ignore
//! use casting_core::{AppError, AuthError};
//!
//! let err = AppError::not_found(anyhow::anyhow!("Actor 3 not found"));
//! assert_eq!(err.status().as_u16(), 404);
//!
//! let err = AppError::from(AuthError::MissingHeader);
//! assert_eq!(err.status().as_u16(), 401);
//! ```

pub mod errors;
pub mod permissions;

// Re-export commonly used types at crate root
pub use errors::{AppError, AuthError, ErrorResponse};
