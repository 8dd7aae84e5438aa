//! Shared primitives for all Rust crates in Wattgrant.

#![forbid(unsafe_code)]

/// Opaque identifier newtypes for API-issued resource identifiers.
pub mod ids;

use thiserror::Error;

pub use ids::{ApplicationId, CompanyId, UserId};

/// Result type used across Wattgrant crates.
pub type AppResult<T> = Result<T, AppError>;

/// Common application error categories.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input or violated invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Actor is authenticated but blocked by access policy.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}
