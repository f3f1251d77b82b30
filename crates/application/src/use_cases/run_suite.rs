//! Run suite use case.
//!
//! This is the case runner: it sends every case of a suite, one at a time,
//! and records one result per case. Individual failures never stop the run.

use std::time::{Duration, Instant};

use apicheck_domain::request::{DEFAULT_TIMEOUT, join_url};
use apicheck_domain::{RunSummary, TestCase, TestResult, TestSuite};
use tracing::{debug, info, warn};

use crate::ports::{Clock, HttpClient};
use crate::{ApplicationError, ApplicationResult};

/// Where and how cases are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Base URL every case path is appended to.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl RunConfig {
    /// Creates a config with the default timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Checks the base URL and timeout.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Config` for a non-http(s) base URL or a
    /// zero timeout.
    pub fn validate(&self) -> ApplicationResult<()> {
        if self.timeout.is_zero() {
            return Err(ApplicationError::Config(
                "timeout must be greater than zero".to_string(),
            ));
        }
        join_url(&self.base_url, "/")
            .map(|_| ())
            .map_err(|e| ApplicationError::Config(e.to_string()))
    }
}

/// Use case for running a test suite against a live service.
///
/// Cases run strictly in sequence with one request in flight at a time.
pub struct RunSuite<C: HttpClient, K: Clock> {
    client: C,
    clock: K,
    config: RunConfig,
}

impl<C: HttpClient, K: Clock> RunSuite<C, K> {
    /// Creates a new `RunSuite` use case.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` does not validate.
    pub fn new(client: C, clock: K, config: RunConfig) -> ApplicationResult<Self> {
        config.validate()?;
        Ok(Self {
            client,
            clock,
            config,
        })
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Runs every case of `suite` and summarizes the outcome.
    ///
    /// # Errors
    ///
    /// Returns an error only if the suite itself is invalid, in which case
    /// no request is sent.
    pub async fn execute(&self, suite: &TestSuite) -> ApplicationResult<RunSummary> {
        self.execute_with(suite, |_| {}).await
    }

    /// Like [`execute`](Self::execute), calling `on_result` after each case.
    ///
    /// # Errors
    ///
    /// Returns an error only if the suite itself is invalid.
    pub async fn execute_with<F>(
        &self,
        suite: &TestSuite,
        mut on_result: F,
    ) -> ApplicationResult<RunSummary>
    where
        F: FnMut(&TestResult),
    {
        suite.validate()?;

        info!(
            suite = %suite.name,
            cases = suite.len(),
            base_url = %self.config.base_url,
            "starting run"
        );

        let started_at = self.clock.now();
        let start = Instant::now();
        let mut results = Vec::with_capacity(suite.len());

        for case in &suite.cases {
            let result = self.run_case(case).await;
            on_result(&result);
            results.push(result);
        }

        let summary = RunSummary::new(
            &suite.name,
            &self.config.base_url,
            started_at,
            start.elapsed(),
            results,
        );

        info!(
            total = summary.total(),
            passed = summary.passed(),
            failed = summary.failed(),
            "run finished"
        );

        Ok(summary)
    }

    /// Sends one case and evaluates the response.
    ///
    /// A case that fails validation is recorded as invalid without sending
    /// anything.
    pub async fn run_case(&self, case: &TestCase) -> TestResult {
        let request = match case
            .validate()
            .and_then(|()| case.to_request(&self.config.base_url, self.config.timeout))
        {
            Ok(request) => request,
            Err(e) => {
                warn!(case = %case.name, error = %e, "invalid case");
                return TestResult::invalid_case(case.clone(), e.to_string());
            }
        };

        let start = Instant::now();

        debug!(case = %case.name, method = %request.method, url = %request.url, "sending request");

        let result = match self.client.execute(&request).await {
            Ok(response) => {
                debug!(case = %case.name, status = response.status, "response received");
                TestResult::evaluate(case.clone(), &response)
            }
            Err(e) => TestResult::transport_failure(case.clone(), e.to_string(), start.elapsed()),
        };

        if let Some(failure) = &result.failure {
            warn!(case = %case.name, reason = %failure, "case failed");
        }

        result
    }
}
