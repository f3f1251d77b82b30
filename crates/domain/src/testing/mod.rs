//! Test cases, their outcomes and the structural JSON matcher.
//!
//! Everything here is pure: evaluating a case against a response never
//! touches the network.

mod builtin;
mod case;
mod matcher;
mod result;
mod suite;
mod summary;

pub use builtin::{BUILTIN_SUITE_NAME, DEFAULT_BASE_URL, builtin_suite};
pub use case::TestCase;
pub use matcher::{SubsetMismatch, json_subset};
pub use result::{FailureReason, TestResult};
pub use suite::TestSuite;
pub use summary::RunSummary;
