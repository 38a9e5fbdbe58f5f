//! Domain-specific error types and error handling.

mod types;

// Re-export all error types and utilities
pub use types::{ConfigError, DurationFormatError, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
///
/// Repository implementations return these directly; the authentication
/// service propagates them unmodified so the boundary layer can map a store
/// fault to a server-side error response.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type DomainResult<T> = Result<T, DomainError>;
