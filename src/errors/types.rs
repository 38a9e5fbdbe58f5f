//! Domain-specific error types for authentication and token operations
//!
//! This module provides error type definitions for token management, signing
//! configuration, and the exam duration wire format. Invalid credentials have
//! no error type: the login flow reports them as an absent token, never as an
//! error.

use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token not yet valid")]
    TokenNotYetValid,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Signing configuration errors
///
/// These are construction-time faults: a service with missing signing
/// material cannot be built, so none of them ever surfaces per-request.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JWT signing secret is not configured")]
    MissingJwtSecret,

    #[error("JWT issuer is not configured")]
    MissingIssuer,

    #[error("JWT audience is not configured")]
    MissingAudience,

    #[error("Token validity window must be positive: {minutes} minutes")]
    InvalidValidityWindow { minutes: i64 },
}

/// Structured failure for the exam duration text format
///
/// Raised when an input does not match `H+:MM:SS` with two-digit minutes
/// and seconds in `[0, 59]`. The surrounding serialization layer reports it
/// as a deserialization failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid duration format: {value}")]
pub struct DurationFormatError {
    /// The rejected input
    pub value: String,
}

impl DurationFormatError {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}
