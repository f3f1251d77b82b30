//! Test case descriptor.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DomainError, DomainResult};
use crate::request::{HttpMethod, PathParams, PathTemplate, RequestSpec, join_url};

/// One HTTP request and the outcome it is expected to produce.
///
/// Cases are built once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// Human-readable, unique within a suite.
    pub name: String,
    /// HTTP method.
    pub method: HttpMethod,
    /// Path template relative to the base URL.
    pub path: PathTemplate,
    /// Values for the path placeholders.
    #[serde(default, skip_serializing_if = "PathParams::is_empty")]
    pub params: PathParams,
    /// JSON request body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
    /// Status code the service must answer with.
    pub expected_status: u16,
    /// Partial JSON the response body must structurally contain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_body: Option<Value>,
}

impl TestCase {
    /// Creates a case with no params, no body and no body expectation.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        method: HttpMethod,
        path: impl Into<PathTemplate>,
        expected_status: u16,
    ) -> Self {
        Self {
            name: name.into(),
            method,
            path: path.into(),
            params: PathParams::new(),
            body: None,
            expected_status,
            expected_body: None,
        }
    }

    /// Shorthand for a GET case.
    #[must_use]
    pub fn get(name: impl Into<String>, path: impl Into<PathTemplate>, expected_status: u16) -> Self {
        Self::new(name, HttpMethod::Get, path, expected_status)
    }

    /// Binds a path placeholder.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Attaches a JSON request body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Requires the response body to contain `fragment`.
    #[must_use]
    pub fn expect_body(mut self, fragment: Value) -> Self {
        self.expected_body = Some(fragment);
        self
    }

    /// Checks the case can be turned into a request.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty name, an invalid status, a malformed
    /// path, mismatched params, or a body on a method that carries none.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(self.invalid("name must not be empty"));
        }
        if !(100..=599).contains(&self.expected_status) {
            return Err(self.invalid(&format!(
                "expected status {} is outside 100-599",
                self.expected_status
            )));
        }
        if self.body.is_some() && !self.method.has_body() {
            return Err(self.invalid(&format!("{} requests do not carry a body", self.method)));
        }
        self.path.validate(&self.params)
    }

    /// Returns the path with every placeholder substituted.
    ///
    /// # Errors
    ///
    /// Returns an error if the template cannot be rendered.
    pub fn rendered_path(&self) -> DomainResult<String> {
        self.path.render(&self.params)
    }

    /// Builds the request this case sends against `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be rendered or the base URL is invalid.
    pub fn to_request(&self, base_url: &str, timeout: Duration) -> DomainResult<RequestSpec> {
        let url = join_url(base_url, &self.rendered_path()?)?;
        let mut request = RequestSpec::new(self.method, url).with_timeout(timeout);
        if let Some(body) = &self.body {
            request = request.with_body(body.clone());
        }
        Ok(request)
    }

    /// `METHOD /rendered/path`, falling back to the raw template.
    #[must_use]
    pub fn label(&self) -> String {
        let path = self
            .rendered_path()
            .unwrap_or_else(|_| self.path.to_string());
        format!("{} {path}", self.method)
    }

    fn invalid(&self, reason: &str) -> DomainError {
        DomainError::InvalidCase {
            name: self.name.clone(),
            reason: reason.to_string(),
        }
    }
}
