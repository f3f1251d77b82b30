//! Plain-text report.

use std::fmt::Write as _;
use std::time::Duration;

use apicheck_domain::response::StatusCode;
use apicheck_domain::{RunSummary, TestCase, TestResult, TestSuite};

use super::millis;

/// First line of a run: suite name, case count and target.
#[must_use]
pub fn render_header(suite_name: &str, cases: usize, base_url: &str) -> String {
    format!("Running {suite_name} ({}) against {base_url}", count(cases))
}

/// One progress line per executed case.
///
/// ```text
///   PASS  get company  GET /company  200 OK  (84 ms)
///   FAIL  delete user by id  DELETE /users/2  204 No Content  (91 ms)
/// ```
#[must_use]
pub fn render_case_line(result: &TestResult) -> String {
    let verdict = if result.passed { "PASS" } else { "FAIL" };
    let status = result
        .actual_status
        .map_or_else(|| "---".to_string(), |status| StatusCode::new(status).to_string());
    format!(
        "  {verdict}  {}  {}  {status}  ({})",
        result.case.name,
        result.case.label(),
        format_duration(result.duration)
    )
}

/// Totals line followed by the numbered failure details.
#[must_use]
pub fn render_summary(summary: &RunSummary) -> String {
    let mut out = format!(
        "{} total, {} passed, {} failed ({})",
        summary.total(),
        summary.passed(),
        summary.failed(),
        format_duration(summary.duration)
    );

    if !summary.is_success() {
        out.push_str("\n\nFailures:");
        for (index, result) in summary.failures().enumerate() {
            let reason = match &result.failure {
                Some(failure) if failure.is_transport() => {
                    format!("expected {}, {failure}", result.case.expected_status)
                }
                Some(failure) => failure.to_string(),
                None => "failed".to_string(),
            };
            let _ = write!(
                out,
                "\n  {}) {} ({}): {reason}",
                index + 1,
                result.case.name,
                result.case.label()
            );
        }
    }

    out
}

/// Lists the cases of a suite without running them.
#[must_use]
pub fn render_listing(suite: &TestSuite) -> String {
    let mut out = format!("{} ({})", suite.name, count(suite.len()));
    for (index, case) in suite.cases.iter().enumerate() {
        let _ = write!(out, "\n  {:>2}. {}", index + 1, describe(case));
    }
    out
}

fn count(cases: usize) -> String {
    if cases == 1 {
        "1 case".to_string()
    } else {
        format!("{cases} cases")
    }
}

fn describe(case: &TestCase) -> String {
    let mut line = format!(
        "{}  {} {}  -> {}",
        case.name, case.method, case.path, case.expected_status
    );
    if case.expected_body.is_some() {
        line.push_str(" + body");
    }
    line
}

fn format_duration(duration: Duration) -> String {
    let ms = millis(duration);
    if ms < 1000 {
        format!("{ms} ms")
    } else {
        format!("{:.2} s", duration.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apicheck_domain::FailureReason;
    use apicheck_domain::request::HttpMethod;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn passed(case: TestCase, status: u16, ms: u64) -> TestResult {
        TestResult {
            actual_status: Some(status),
            actual_body: None,
            passed: true,
            failure: None,
            duration: Duration::from_millis(ms),
            case,
        }
    }

    fn summary(results: Vec<TestResult>) -> RunSummary {
        RunSummary::new(
            "smoke",
            "http://localhost:3000",
            Utc::now(),
            Duration::from_millis(1500),
            results,
        )
    }

    #[test]
    fn test_header() {
        assert_eq!(
            render_header("smoke", 2, "http://localhost:3000"),
            "Running smoke (2 cases) against http://localhost:3000"
        );
        assert_eq!(
            render_header("single", 1, "http://x"),
            "Running single (1 case) against http://x"
        );
    }

    #[test]
    fn test_case_line_pass() {
        let result = passed(TestCase::get("get company", "/company", 200), 200, 84);
        assert_eq!(
            render_case_line(&result),
            "  PASS  get company  GET /company  200 OK  (84 ms)"
        );
    }

    #[test]
    fn test_case_line_transport_failure() {
        let result = TestResult::transport_failure(
            TestCase::get("list users", "/users", 200),
            "connection refused by localhost:1",
            Duration::from_millis(2500),
        );
        assert_eq!(
            render_case_line(&result),
            "  FAIL  list users  GET /users  ---  (2.50 s)"
        );
    }

    #[test]
    fn test_summary_all_passed() {
        let report = render_summary(&summary(vec![passed(
            TestCase::get("get company", "/company", 200),
            200,
            5,
        )]));
        assert_eq!(report, "1 total, 1 passed, 0 failed (1.50 s)");
    }

    #[test]
    fn test_summary_lists_failures() {
        let delete = TestCase::new(
            "delete user by id",
            HttpMethod::Delete,
            "/users/{id}",
            404,
        )
        .param("id", 2);
        let failed = TestResult {
            actual_status: Some(204),
            actual_body: None,
            passed: false,
            failure: Some(FailureReason::StatusMismatch {
                expected: 404,
                actual: 204,
            }),
            duration: Duration::from_millis(40),
            case: delete,
        };
        let report = render_summary(&summary(vec![
            passed(TestCase::get("get company", "/company", 200), 200, 5),
            failed,
        ]));
        assert_eq!(
            report,
            "2 total, 1 passed, 1 failed (1.50 s)\n\nFailures:\n  1) delete user by id (DELETE /users/2): expected 404, got 204"
        );
    }

    #[test]
    fn test_summary_transport_failure_names_expected_status() {
        let unreachable = TestResult::transport_failure(
            TestCase::get("list users", "/users", 200),
            "connection refused by localhost:1",
            Duration::from_millis(3),
        );
        let report = render_summary(&summary(vec![unreachable]));
        assert_eq!(
            report,
            "1 total, 0 passed, 1 failed (1.50 s)\n\nFailures:\n  1) list users (GET /users): expected 200, transport error: connection refused by localhost:1"
        );
    }

    #[test]
    fn test_listing() {
        let suite = TestSuite::new("smoke")
            .with_case(TestCase::get("get company", "/company", 200))
            .with_case(
                TestCase::new(
                    "create user",
                    HttpMethod::Post,
                    "/users",
                    201,
                )
                .with_body(json!({"name": "John"}))
                .expect_body(json!({"name": "John"})),
            );
        assert_eq!(
            render_listing(&suite),
            "smoke (2 cases)\n   1. get company  GET /company  -> 200\n   2. create user  POST /users  -> 201 + body"
        );
    }
}
