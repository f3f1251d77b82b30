//! Apicheck Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus suite loading and reporting.

pub mod adapters;
pub mod persistence;
pub mod report;

pub use adapters::{ReqwestHttpClient, SystemClock};
pub use persistence::{SuiteFormat, SuiteLoadError, load_suite, parse_suite};
pub use report::{
    ReportError, render_case_line, render_header, render_json, render_listing, render_suite_json,
    render_summary, write_json_report,
};
