//! Command-line configuration.
//!
//! Every option can also come from the environment:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `APICHECK_BASE_URL` | `https://api-desafio-qa.onrender.com` | Target API |
//! | `APICHECK_TIMEOUT_SECS` | 10 | Per-request timeout (seconds) |
//! | `APICHECK_SUITE` | built-in | Suite file (`.json`, `.yaml`, `.yml`) |
//! | `APICHECK_FILTER` | none | Case-insensitive name filter |
//! | `APICHECK_FORMAT` | text | `text` or `json` |
//! | `APICHECK_REPORT` | none | Write the JSON report to this file |
//! | `APICHECK_LOG_LEVEL` | warn | Log level, `RUST_LOG` wins when set |

use std::path::PathBuf;
use std::time::Duration;

use apicheck_application::RunConfig;
use apicheck_domain::testing::DEFAULT_BASE_URL;
use clap::{Parser, ValueEnum};

/// How the run is reported on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One line per case plus a summary.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

/// Runner configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "apicheck", version)]
#[command(about = "Runs an HTTP contract suite against a REST API")]
pub struct CliConfig {
    /// Base URL every case path is appended to.
    #[arg(long, env = "APICHECK_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[arg(long, env = "APICHECK_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Load the suite from a file instead of using the built-in one.
    #[arg(long, env = "APICHECK_SUITE")]
    pub suite: Option<PathBuf>,

    /// Only run cases whose name contains this text (case-insensitive).
    #[arg(long, env = "APICHECK_FILTER")]
    pub filter: Option<String>,

    /// Output format.
    #[arg(long, env = "APICHECK_FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also write the JSON report to this file.
    #[arg(long, env = "APICHECK_REPORT")]
    pub report: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "APICHECK_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Print the selected cases and exit without sending requests.
    #[arg(long)]
    pub list: bool,
}

impl CliConfig {
    /// Per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Runner settings derived from the options.
    #[must_use]
    pub fn run_config(&self) -> RunConfig {
        RunConfig::new(self.base_url.clone()).with_timeout(self.timeout())
    }
}
