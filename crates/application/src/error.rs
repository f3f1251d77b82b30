//! Application error types

use apicheck_domain::DomainError;
use thiserror::Error;

/// Application-level errors.
///
/// Only raised before the first request goes out; failures of individual
/// cases are recorded in their results instead.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// The HTTP client could not be set up.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Run configuration is unusable.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
