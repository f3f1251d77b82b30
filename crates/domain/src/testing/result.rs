//! Outcome of executing one test case.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::case::TestCase;
use super::matcher::json_subset;
use crate::response::ResponseSpec;

/// Why a case failed.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureReason {
    /// The HTTP exchange never completed.
    #[error("transport error: {message}")]
    Transport {
        /// Transport-level description (timeout, refused, DNS...).
        message: String,
    },

    /// A response arrived with the wrong status.
    #[error("expected {expected}, got {actual}")]
    StatusMismatch {
        /// Expected status code.
        expected: u16,
        /// Received status code.
        actual: u16,
    },

    /// The body does not contain the expected fragment.
    #[error("body mismatch at {path}: {detail}")]
    BodyMismatch {
        /// JSON path of the offending value.
        path: String,
        /// Expected vs actual.
        detail: String,
    },

    /// A body assertion was requested but the body is not JSON.
    #[error("malformed response: {detail}")]
    MalformedResponse {
        /// Parser error.
        detail: String,
    },

    /// The case itself could not be turned into a request.
    #[error("invalid case: {detail}")]
    InvalidCase {
        /// Validation error.
        detail: String,
    },
}

impl FailureReason {
    /// True when no response was received at all.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

/// Record of one executed case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    /// The case that was executed.
    pub case: TestCase,
    /// Received status, `None` on transport failure.
    pub actual_status: Option<u16>,
    /// Received body, when it parsed as JSON.
    pub actual_body: Option<Value>,
    /// Whether every expectation held.
    pub passed: bool,
    /// Set whenever `passed` is false.
    pub failure: Option<FailureReason>,
    /// Wall time spent on the exchange.
    #[serde(with = "crate::duration_millis")]
    pub duration: Duration,
}

impl TestResult {
    /// Compares a received response against the case's expectations.
    ///
    /// Status is checked first; the body fragment only when the status holds.
    #[must_use]
    pub fn evaluate(case: TestCase, response: &ResponseSpec) -> Self {
        let parsed = response.body_as_json();

        let failure = if response.status == case.expected_status {
            case.expected_body
                .as_ref()
                .and_then(|fragment| match &parsed {
                    Ok(body) => json_subset(fragment, body).err().map(|mismatch| {
                        FailureReason::BodyMismatch {
                            path: mismatch.path,
                            detail: mismatch.detail,
                        }
                    }),
                    Err(e) => Some(FailureReason::MalformedResponse {
                        detail: match response.content_type() {
                            Some(content_type) => format!("{e} (content-type {content_type})"),
                            None => e.to_string(),
                        },
                    }),
                })
        } else {
            Some(FailureReason::StatusMismatch {
                expected: case.expected_status,
                actual: response.status,
            })
        };

        Self {
            case,
            actual_status: Some(response.status),
            actual_body: parsed.ok(),
            passed: failure.is_none(),
            failure,
            duration: response.duration,
        }
    }

    /// Records a case whose request never produced a response.
    #[must_use]
    pub fn transport_failure(case: TestCase, message: impl Into<String>, duration: Duration) -> Self {
        Self {
            case,
            actual_status: None,
            actual_body: None,
            passed: false,
            failure: Some(FailureReason::Transport {
                message: message.into(),
            }),
            duration,
        }
    }

    /// Records a case that was rejected before any request was sent.
    #[must_use]
    pub fn invalid_case(case: TestCase, detail: impl Into<String>) -> Self {
        Self {
            case,
            actual_status: None,
            actual_body: None,
            passed: false,
            failure: Some(FailureReason::InvalidCase {
                detail: detail.into(),
            }),
            duration: Duration::ZERO,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::request::HttpMethod;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::HashMap;

    fn response(status: u16, body: &str) -> ResponseSpec {
        ResponseSpec::new(
            status,
            HashMap::new(),
            body.as_bytes(),
            Duration::from_millis(12),
        )
    }

    #[test]
    fn test_status_match_passes_with_any_body() {
        let result = TestResult::evaluate(
            TestCase::get("get company", "/company", 200),
            &response(200, r#"{"name":"ACME"}"#),
        );
        assert!(result.passed);
        assert_eq!(result.failure, None);
        assert_eq!(result.actual_status, Some(200));
        assert_eq!(result.actual_body, Some(json!({"name": "ACME"})));
        assert_eq!(result.duration, Duration::from_millis(12));
    }

    #[test]
    fn test_status_mismatch_reason() {
        let result = TestResult::evaluate(
            TestCase::get("get company", "/company", 200),
            &response(404, ""),
        );
        assert!(!result.passed);
        assert_eq!(
            result.failure.as_ref().map(ToString::to_string).as_deref(),
            Some("expected 200, got 404")
        );
        assert_eq!(result.actual_body, None);
    }

    #[test]
    fn test_delete_that_succeeds_is_contract_drift() {
        let case = TestCase::new("delete user", HttpMethod::Delete, "/users/{id}", 404).param("id", 2);
        let result = TestResult::evaluate(case, &response(204, ""));
        assert_eq!(
            result.failure,
            Some(FailureReason::StatusMismatch {
                expected: 404,
                actual: 204
            })
        );
    }

    #[test]
    fn test_body_fragment_checked_after_status() {
        let case = TestCase::new("create user", HttpMethod::Post, "/users", 201)
            .with_body(json!({"name": "John"}))
            .expect_body(json!({"name": "John"}));

        let ok = TestResult::evaluate(case.clone(), &response(201, r#"{"id":7,"name":"John"}"#));
        assert!(ok.passed);

        let wrong = TestResult::evaluate(case.clone(), &response(201, r#"{"id":7,"name":"Jane"}"#));
        assert!(matches!(
            wrong.failure,
            Some(FailureReason::BodyMismatch { ref path, .. }) if path == "$.name"
        ));

        let status_first = TestResult::evaluate(case, &response(500, "oops"));
        assert!(matches!(
            status_first.failure,
            Some(FailureReason::StatusMismatch { .. })
        ));
    }

    #[test]
    fn test_unparseable_body_with_fragment_is_malformed() {
        let case = TestCase::new("create user", HttpMethod::Post, "/users", 201)
            .expect_body(json!({"name": "John"}));
        let result = TestResult::evaluate(case.clone(), &response(201, "<html>created</html>"));
        assert!(matches!(
            result.failure,
            Some(FailureReason::MalformedResponse { .. })
        ));

        let html = ResponseSpec::new(
            201,
            HashMap::from([("Content-Type".to_string(), "text/html".to_string())]),
            b"<html>created</html>",
            Duration::from_millis(4),
        );
        match TestResult::evaluate(case, &html).failure {
            Some(FailureReason::MalformedResponse { detail }) => {
                assert!(detail.ends_with("(content-type text/html)"), "{detail}");
            }
            other => panic!("unexpected failure: {other:?}"),
        }
    }

    #[test]
    fn test_unparseable_body_without_fragment_passes() {
        let result = TestResult::evaluate(
            TestCase::get("list", "/users", 200),
            &response(200, "not json"),
        );
        assert!(result.passed);
        assert_eq!(result.actual_body, None);
    }

    #[test]
    fn test_invalid_case_is_not_transport() {
        let result = TestResult::invalid_case(
            TestCase::get("client", "/clients/{id}", 200),
            "path '/clients/{id}' references unbound parameter 'id'",
        );
        assert!(!result.passed);
        assert_eq!(result.actual_status, None);
        let failure = result.failure.unwrap();
        assert!(!failure.is_transport());
        assert!(failure.to_string().starts_with("invalid case: "));
    }

    #[test]
    fn test_transport_failure() {
        let result = TestResult::transport_failure(
            TestCase::get("list", "/users", 200),
            "connection refused",
            Duration::from_millis(3),
        );
        assert!(!result.passed);
        assert_eq!(result.actual_status, None);
        assert!(result.failure.as_ref().is_some_and(FailureReason::is_transport));
        assert_eq!(
            result.failure.map(|f| f.to_string()),
            Some("transport error: connection refused".to_string())
        );
    }
}
