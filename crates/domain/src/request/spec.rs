//! Outgoing request type

use std::time::Duration;

use serde_json::Value;
use url::Url;

use super::HttpMethod;
use crate::error::{DomainError, DomainResult};

/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A fully resolved HTTP request, ready to hand to an HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    /// HTTP method
    pub method: HttpMethod,
    /// Absolute target URL
    pub url: String,
    /// JSON body, sent with `Content-Type: application/json`
    pub body: Option<Value>,
    /// Upper bound for the whole exchange
    pub timeout: Duration,
}

impl RequestSpec {
    /// Creates a request with no body and the default timeout.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Attaches a JSON body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets the timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validates the URL and returns parsed version if valid.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed.
    pub fn parse_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.url)
    }
}

/// Joins a base URL and an absolute path without doubling the slash.
///
/// # Errors
///
/// Returns an error if `base` is not an absolute `http` or `https` URL.
pub fn join_url(base: &str, path: &str) -> DomainResult<String> {
    let parsed = Url::parse(base).map_err(|e| DomainError::InvalidUrl(format!("{e}: {base}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(DomainError::InvalidUrl(format!(
            "unsupported scheme '{}': {base}",
            parsed.scheme()
        )));
    }

    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    Ok(format!("{base}/{path}"))
}
