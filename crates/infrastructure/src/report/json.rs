//! JSON report.
//!
//! The report is a flattened view of `RunSummary` with the derived totals
//! spelled out, so consumers do not have to recount results.

use std::path::Path;

use apicheck_domain::{FailureReason, RunSummary, TestResult, TestSuite};
use serde::Serialize;
use serde_json::Value;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use super::{ReportError, millis};

/// Renders the run as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(summary: &RunSummary) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(&Report::from(summary))?)
}

/// Renders a suite as pretty-printed JSON, in the same shape suite files use.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_suite_json(suite: &TestSuite) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(suite)?)
}

/// Writes the JSON report to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub async fn write_json_report(path: &Path, summary: &RunSummary) -> Result<(), ReportError> {
    let mut content = render_json(summary)?;
    content.push('\n');
    fs::write(path, content)
        .await
        .map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), "wrote JSON report");
    Ok(())
}

#[derive(Serialize)]
struct Report<'a> {
    run_id: Uuid,
    suite: &'a str,
    base_url: &'a str,
    started_at: String,
    duration_ms: u64,
    total: usize,
    passed: usize,
    failed: usize,
    pass_rate: f64,
    results: Vec<CaseReport<'a>>,
}

#[derive(Serialize)]
struct CaseReport<'a> {
    name: &'a str,
    method: &'a str,
    path: String,
    expected_status: u16,
    actual_status: Option<u16>,
    passed: bool,
    duration_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    failure: Option<&'a FailureReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    actual_body: Option<&'a Value>,
}

impl<'a> From<&'a RunSummary> for Report<'a> {
    fn from(summary: &'a RunSummary) -> Self {
        Self {
            run_id: summary.run_id,
            suite: &summary.suite_name,
            base_url: &summary.base_url,
            started_at: summary.started_at.to_rfc3339(),
            duration_ms: millis(summary.duration),
            total: summary.total(),
            passed: summary.passed(),
            failed: summary.failed(),
            pass_rate: summary.pass_rate(),
            results: summary.results.iter().map(CaseReport::from).collect(),
        }
    }
}

impl<'a> From<&'a TestResult> for CaseReport<'a> {
    fn from(result: &'a TestResult) -> Self {
        let case = &result.case;
        Self {
            name: &case.name,
            method: case.method.as_str(),
            path: case
                .rendered_path()
                .unwrap_or_else(|_| case.path.to_string()),
            expected_status: case.expected_status,
            actual_status: result.actual_status,
            passed: result.passed,
            duration_ms: millis(result.duration),
            failure: result.failure.as_ref(),
            message: result.failure.as_ref().map(ToString::to_string),
            // Only failing cases carry the body.
            actual_body: result
                .actual_body
                .as_ref()
                .filter(|_| !result.passed),
        }
    }
}
