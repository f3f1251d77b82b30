//! Aggregated outcome of a suite run.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::result::TestResult;

/// Everything a report needs about one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Unique identifier of this run.
    pub run_id: Uuid,
    /// Name of the suite that ran.
    pub suite_name: String,
    /// Base URL the cases were sent to.
    pub base_url: String,
    /// When the first request was about to be sent.
    pub started_at: DateTime<Utc>,
    /// Wall time of the whole run.
    #[serde(with = "crate::duration_millis")]
    pub duration: Duration,
    /// One result per case, in execution order.
    pub results: Vec<TestResult>,
}

impl RunSummary {
    /// Creates a summary with a fresh run id.
    #[must_use]
    pub fn new(
        suite_name: impl Into<String>,
        base_url: impl Into<String>,
        started_at: DateTime<Utc>,
        duration: Duration,
        results: Vec<TestResult>,
    ) -> Self {
        Self {
            run_id: Uuid::now_v7(),
            suite_name: suite_name.into(),
            base_url: base_url.into(),
            started_at,
            duration,
            results,
        }
    }

    /// Number of executed cases.
    #[must_use]
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Number of passed cases.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    /// Number of failed cases.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    /// Failed results, in execution order.
    pub fn failures(&self) -> impl Iterator<Item = &TestResult> {
        self.results.iter().filter(|r| !r.passed)
    }

    /// True when every case passed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    /// Get pass rate as percentage.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn pass_rate(&self) -> f64 {
        if self.results.is_empty() {
            100.0
        } else {
            (self.passed() as f64 / self.total() as f64) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestCase;
    use pretty_assertions::assert_eq;

    fn passed(name: &str) -> TestResult {
        TestResult {
            case: TestCase::get(name, "/company", 200),
            actual_status: Some(200),
            actual_body: None,
            passed: true,
            failure: None,
            duration: Duration::from_millis(1),
        }
    }

    #[test]
    fn test_counts() {
        let results = vec![
            passed("a"),
            TestResult::transport_failure(TestCase::get("b", "/users", 200), "timed out", Duration::ZERO),
            passed("c"),
        ];
        let summary = RunSummary::new("api", "http://localhost", Utc::now(), Duration::ZERO, results);

        assert_eq!(summary.total(), 3);
        assert_eq!(summary.passed(), 2);
        assert_eq!(summary.failed(), 1);
        assert!(!summary.is_success());
        let failed: Vec<_> = summary.failures().map(|r| r.case.name.as_str()).collect();
        assert_eq!(failed, vec!["b"]);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_all_passed() {
        let summary = RunSummary::new(
            "api",
            "http://localhost",
            Utc::now(),
            Duration::ZERO,
            vec![passed("a"), passed("b")],
        );
        assert!(summary.is_success());
        assert_eq!(summary.pass_rate(), 100.0);
    }
}
