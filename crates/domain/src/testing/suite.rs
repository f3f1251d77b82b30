//! Ordered collection of test cases.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::case::TestCase;
use crate::error::{DomainError, DomainResult};

/// A named, ordered list of cases. Order only matters for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSuite {
    /// Suite name.
    pub name: String,
    /// Cases, in execution order.
    #[serde(default)]
    pub cases: Vec<TestCase>,
}

impl TestSuite {
    /// Create a new empty test suite.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cases: Vec::new(),
        }
    }

    /// Add a case (builder pattern).
    #[must_use]
    pub fn with_case(mut self, case: TestCase) -> Self {
        self.cases.push(case);
        self
    }

    /// Check if the suite is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Get the number of cases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Validates every case and checks names are unique.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, in case order.
    pub fn validate(&self) -> DomainResult<()> {
        if self.cases.is_empty() {
            return Err(DomainError::EmptySuite(self.name.clone()));
        }

        let mut seen = HashSet::with_capacity(self.cases.len());
        for case in &self.cases {
            case.validate()?;
            if !seen.insert(case.name.as_str()) {
                return Err(DomainError::DuplicateCase(case.name.clone()));
            }
        }

        Ok(())
    }

    /// Keeps the cases whose name contains `needle`, ignoring case.
    #[must_use]
    pub fn filter(self, needle: &str) -> Self {
        let needle = needle.to_lowercase();
        Self {
            name: self.name,
            cases: self
                .cases
                .into_iter()
                .filter(|case| case.name.to_lowercase().contains(&needle))
                .collect(),
        }
    }
}
