//! The case runner end to end: real HTTP adapter, local API.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::time::Duration;

use apicheck_application::{RunConfig, RunSuite};
use apicheck_domain::request::HttpMethod;
use apicheck_domain::{FailureReason, TestCase, TestSuite, testing::builtin_suite};
use apicheck_infrastructure::{ReqwestHttpClient, SystemClock, render_summary};
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

fn runner(base_url: &str) -> RunSuite<ReqwestHttpClient, SystemClock> {
    let config = RunConfig::new(base_url).with_timeout(Duration::from_secs(2));
    RunSuite::new(ReqwestHttpClient::new().unwrap(), SystemClock::new(), config).unwrap()
}

#[tokio::test]
async fn test_builtin_suite_passes_against_contract() {
    let base = common::spawn(common::contract_router(StatusCode::NOT_FOUND)).await;
    let suite = builtin_suite();

    let summary = runner(&base).execute(&suite).await.unwrap();

    assert_eq!(summary.total(), suite.len());
    assert_eq!(summary.failed(), 0, "{}", render_summary(&summary));
    assert!(summary.is_success());
    let names: Vec<&str> = summary.results.iter().map(|r| r.case.name.as_str()).collect();
    let expected: Vec<&str> = suite.cases.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, expected);
}

#[tokio::test]
async fn test_deleted_user_drift_is_reported() {
    let base = common::spawn(common::contract_router(StatusCode::NO_CONTENT)).await;

    let summary = runner(&base).execute(&builtin_suite()).await.unwrap();

    assert_eq!(summary.failed(), 1);
    let failure = summary.failures().next().unwrap();
    assert_eq!(failure.case.label(), "DELETE /users/2");
    assert_eq!(failure.actual_status, Some(204));
    assert_eq!(
        failure.failure,
        Some(FailureReason::StatusMismatch {
            expected: 404,
            actual: 204
        })
    );
}

#[tokio::test]
async fn test_unreachable_server_fails_every_case() {
    let base = common::unreachable_base_url().await;
    let suite = builtin_suite();

    let summary = runner(&base).execute(&suite).await.unwrap();

    assert_eq!(summary.total(), suite.len());
    assert_eq!(summary.passed(), 0);
    assert!(!summary.is_success());
    for result in &summary.results {
        assert_eq!(result.actual_status, None);
        assert!(result.failure.as_ref().is_some_and(FailureReason::is_transport));
    }
}

#[tokio::test]
async fn test_body_fragment_checks() {
    let base = common::spawn(common::adapter_router()).await;
    let suite = TestSuite::new("adapter")
        .with_case(
            TestCase::new("echo matches", HttpMethod::Post, "/echo", 200)
                .with_body(json!({"name": "John", "age": 30}))
                .expect_body(json!({"received": {"name": "John"}})),
        )
        .with_case(
            TestCase::new("echo differs", HttpMethod::Put, "/echo", 200)
                .with_body(json!({"name": "Jane"}))
                .expect_body(json!({"received": {"name": "John"}})),
        )
        .with_case(TestCase::get("text body", "/text", 200).expect_body(json!({"ok": true})))
        .with_case(TestCase::get("text without fragment", "/text", 200));

    let summary = runner(&base).execute(&suite).await.unwrap();
    let reasons: Vec<Option<&FailureReason>> =
        summary.results.iter().map(|r| r.failure.as_ref()).collect();

    assert_eq!(reasons[0], None);
    assert!(matches!(
        reasons[1],
        Some(FailureReason::BodyMismatch { path, .. }) if path == "$.received.name"
    ));
    assert!(matches!(
        reasons[2],
        Some(FailureReason::MalformedResponse { .. })
    ));
    assert_eq!(reasons[3], None);
}

#[tokio::test]
async fn test_get_outcomes_are_stable() {
    let base = common::spawn(common::contract_router(StatusCode::NOT_FOUND)).await;
    let suite = TestSuite::new("reads")
        .with_case(TestCase::get("get company", "/company", 200))
        .with_case(TestCase::get("get client by id", "/clients/{id}", 200).param("id", 1));
    let runner = runner(&base);

    let first = runner.execute(&suite).await.unwrap();
    let second = runner.execute(&suite).await.unwrap();

    let outcome = |s: &apicheck_domain::RunSummary| {
        s.results
            .iter()
            .map(|r| (r.passed, r.actual_status))
            .collect::<Vec<_>>()
    };
    assert_eq!(outcome(&first), outcome(&second));
    assert!(first.is_success());
}
