//! Loading test suites from JSON or YAML files.
//!
//! A suite file mirrors `TestSuite`:
//!
//! ```yaml
//! name: smoke
//! cases:
//!   - name: get company
//!     method: GET
//!     path: /company
//!     expected_status: 200
//!   - name: delete user
//!     method: DELETE
//!     path: /users/{id}
//!     params: { id: 2 }
//!     expected_status: 404
//! ```

use std::io;
use std::path::{Path, PathBuf};

use apicheck_domain::{DomainError, TestSuite};
use thiserror::Error;
use tokio::fs;
use tracing::debug;

/// Errors raised while loading a suite file. All of them abort the run.
#[derive(Debug, Error)]
pub enum SuiteLoadError {
    /// The file could not be read.
    #[error("failed to read suite file {}: {source}", .path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },

    /// The extension does not name a known format.
    #[error("unsupported suite file {} (expected .json, .yaml or .yml)", .0.display())]
    UnsupportedFormat(PathBuf),

    /// JSON parsing failed.
    #[error("invalid JSON suite: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing failed.
    #[error("invalid YAML suite: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The suite parsed but is not runnable.
    #[error("invalid suite: {0}")]
    Invalid(#[from] DomainError),
}

/// Serialization format of a suite file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteFormat {
    /// `.json`
    Json,
    /// `.yaml` / `.yml`
    Yaml,
}

impl SuiteFormat {
    /// Picks the format from the file extension, ignoring case.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Parses and validates a suite.
///
/// # Errors
///
/// Returns an error if the text does not parse or the suite is invalid.
pub fn parse_suite(contents: &str, format: SuiteFormat) -> Result<TestSuite, SuiteLoadError> {
    let suite: TestSuite = match format {
        SuiteFormat::Json => serde_json::from_str(contents)?,
        SuiteFormat::Yaml => serde_yaml::from_str(contents)?,
    };
    suite.validate()?;
    Ok(suite)
}

/// Reads, parses and validates the suite stored at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, has an unknown extension,
/// does not parse, or describes an invalid suite.
pub async fn load_suite(path: &Path) -> Result<TestSuite, SuiteLoadError> {
    let format = SuiteFormat::from_path(path)
        .ok_or_else(|| SuiteLoadError::UnsupportedFormat(path.to_path_buf()))?;

    let contents = fs::read_to_string(path)
        .await
        .map_err(|source| SuiteLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let suite = parse_suite(&contents, format)?;
    debug!(path = %path.display(), cases = suite.len(), "loaded suite file");
    Ok(suite)
}
