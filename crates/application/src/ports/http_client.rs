//! HTTP Client port

use apicheck_domain::{request::RequestSpec, response::ResponseSpec};
use async_trait::async_trait;
use thiserror::Error;

/// Transport-level failures. Any of these means no response was received.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HttpClientError {
    /// The URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The exchange did not finish in time.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// Configured timeout.
        timeout_ms: u64,
    },

    /// Nothing is listening on the target port.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Target host.
        host: String,
        /// Target port.
        port: u16,
    },

    /// The host name could not be resolved.
    #[error("DNS lookup failed for {host}: {message}")]
    DnsError {
        /// Target host.
        host: String,
        /// Resolver message.
        message: String,
    },

    /// Any other connect-phase failure (TLS, reset...).
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Anything else, including failures while reading the body.
    #[error("{0}")]
    Other(String),
}

/// Port for executing HTTP requests.
///
/// This trait abstracts the HTTP client implementation, allowing
/// the application layer to be independent of specific HTTP libraries.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Executes an HTTP request and returns the response.
    ///
    /// Any status code counts as a response; only failures to complete the
    /// exchange are errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails due to network issues,
    /// timeout, or other transport problems.
    async fn execute(&self, request: &RequestSpec) -> Result<ResponseSpec, HttpClientError>;
}
