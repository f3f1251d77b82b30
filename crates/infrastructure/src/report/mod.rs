//! Report rendering.
//!
//! The text report is what a person reads on stdout; the JSON report is the
//! machine-readable form printed with `--format json` or written with
//! `--report`.

mod json;
mod text;

pub use json::{render_json, render_suite_json, write_json_report};
pub use text::{render_case_line, render_header, render_listing, render_summary};

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Report error type.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Serialization error.
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    /// The report file could not be written.
    #[error("failed to write report {}: {source}", .path.display())]
    Io {
        /// Destination file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
}

pub(crate) fn millis(duration: std::time::Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
