//! Apicheck Domain - Core business types
//!
//! This crate defines the domain model for the apicheck contract runner:
//! requests, responses, test cases, their results and the built-in suite.
//! All types here are pure Rust with no I/O dependencies.

mod duration_millis;
pub mod error;
pub mod request;
pub mod response;
pub mod testing;

pub use error::{DomainError, DomainResult};
pub use testing::{
    FailureReason, RunSummary, SubsetMismatch, TestCase, TestResult, TestSuite, json_subset,
};
