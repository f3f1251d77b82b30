//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! It handles all HTTP communication for the runner.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use apicheck_application::ports::{HttpClient, HttpClientError};
use apicheck_domain::{
    request::{HttpMethod, RequestSpec},
    response::ResponseSpec,
};
use async_trait::async_trait;
use reqwest::{Client, Method, Url};
use tracing::debug;

/// HTTP client implementation using reqwest.
///
/// Wraps a single `reqwest::Client` so connections are reused across cases.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates a new HTTP client with default settings.
    ///
    /// Default configuration:
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled
    /// - User-Agent: "apicheck/<version>"
    ///
    /// The per-request timeout comes from each `RequestSpec`.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent(concat!("apicheck/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Creates a new HTTP client with a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// Maps reqwest errors to domain `HttpClientError`.
    fn map_error(error: &reqwest::Error, timeout: Duration) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout {
                timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            };
        }

        let host = error
            .url()
            .and_then(Url::host_str)
            .unwrap_or("unknown")
            .to_string();

        if error.is_connect() {
            let message = error_chain(error);
            let lowered = message.to_lowercase();
            if lowered.contains("dns") || lowered.contains("resolve") {
                return HttpClientError::DnsError { host, message };
            }
            if lowered.contains("refused") {
                return HttpClientError::ConnectionRefused {
                    host,
                    port: error
                        .url()
                        .and_then(Url::port_or_known_default)
                        .unwrap_or(80),
                };
            }
            return HttpClientError::ConnectionFailed(message);
        }

        if error.is_redirect() {
            return HttpClientError::Other(format!("too many redirects from {host}"));
        }

        HttpClientError::Other(error_chain(error))
    }
}

/// Joins an error with its sources; reqwest keeps the useful part in the chain.
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn execute(&self, request: &RequestSpec) -> Result<ResponseSpec, HttpClientError> {
        let url = request
            .parse_url()
            .map_err(|e| HttpClientError::InvalidUrl(format!("{e}: {}", request.url)))?;

        let start = Instant::now();

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), url)
            .timeout(request.timeout);

        // `json` also sets Content-Type: application/json
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Self::map_error(&e, request.timeout))?;

        let status = response.status().as_u16();

        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
            .collect();

        // The timeout covers the body read as well
        let body = response
            .bytes()
            .await
            .map_err(|e| Self::map_error(&e, request.timeout))?;

        let duration = start.elapsed();
        debug!(
            method = %request.method,
            url = %request.url,
            status,
            bytes = body.len(),
            elapsed_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
            "HTTP exchange completed"
        );

        Ok(ResponseSpec::new(status, headers, &body, duration))
    }
}
