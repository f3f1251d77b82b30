//! File-backed suite definitions.

mod suite_file;

pub use suite_file::{SuiteFormat, SuiteLoadError, load_suite, parse_suite};
