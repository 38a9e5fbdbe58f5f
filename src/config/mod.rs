//! Configuration types for the exam backend core.

mod auth;

pub use auth::JwtConfig;
