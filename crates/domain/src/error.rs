//! Domain error types

use thiserror::Error;

/// Domain-level errors raised while building or validating test cases.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// A path template is malformed.
    #[error("invalid path template '{path}': {reason}")]
    InvalidPath {
        /// The offending template.
        path: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A path placeholder has no bound value.
    #[error("path '{path}' references unbound parameter '{name}'")]
    MissingPathParam {
        /// The template being rendered.
        path: String,
        /// The unbound placeholder name.
        name: String,
    },

    /// A parameter was supplied that the template never references.
    #[error("path '{path}' does not use parameter '{name}'")]
    UnusedPathParam {
        /// The template being rendered.
        path: String,
        /// The superfluous parameter name.
        name: String,
    },

    /// A test case is structurally invalid.
    #[error("invalid test case '{name}': {reason}")]
    InvalidCase {
        /// Name of the case.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Two cases in a suite share a name.
    #[error("duplicate test case name: {0}")]
    DuplicateCase(String),

    /// A suite has no cases to run.
    #[error("suite '{0}' contains no test cases")]
    EmptySuite(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
