//! Wiring: suite selection, the run itself, and reporting.

use std::process::ExitCode;

use apicheck_application::{ApplicationError, RunSuite};
use apicheck_domain::TestSuite;
use apicheck_domain::testing::builtin_suite;
use apicheck_infrastructure::{
    ReportError, ReqwestHttpClient, SuiteLoadError, SystemClock, load_suite, render_case_line,
    render_header, render_json, render_listing, render_suite_json, render_summary,
    write_json_report,
};
use thiserror::Error;
use tracing::info;

use crate::config::{CliConfig, OutputFormat};

/// Exit code when some case failed.
pub const EXIT_FAILED: u8 = 1;
/// Exit code when the run could not start.
pub const EXIT_STARTUP: u8 = 2;

/// Errors that stop the binary before or after the run.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid runner configuration or suite.
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// The suite file could not be loaded.
    #[error(transparent)]
    Suite(#[from] SuiteLoadError),

    /// The filter left nothing to run.
    #[error("filter {filter:?} matches no case in suite {suite}")]
    NoMatchingCases {
        /// The filter text.
        filter: String,
        /// Suite that was filtered.
        suite: String,
    },

    /// The report could not be produced.
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Runs the configured suite and returns the process exit code.
///
/// # Errors
///
/// Returns an error when the run cannot start or its report cannot be
/// written. Failing cases are not errors; they change the exit code.
pub async fn run(config: &CliConfig) -> Result<ExitCode, CliError> {
    let run_config = config.run_config();
    run_config.validate()?;

    let suite = select_suite(config).await?;

    if config.list {
        let listing = match config.format {
            OutputFormat::Text => render_listing(&suite),
            OutputFormat::Json => render_suite_json(&suite)?,
        };
        println!("{listing}");
        return Ok(ExitCode::SUCCESS);
    }

    let client = ReqwestHttpClient::new().map_err(|e| ApplicationError::Http(e.to_string()))?;
    let runner = RunSuite::new(client, SystemClock::new(), run_config)?;

    let summary = match config.format {
        OutputFormat::Text => {
            println!(
                "{}\n",
                render_header(&suite.name, suite.len(), &runner.config().base_url)
            );
            let summary = runner
                .execute_with(&suite, |result| println!("{}", render_case_line(result)))
                .await?;
            println!("\n{}", render_summary(&summary));
            summary
        }
        OutputFormat::Json => {
            let summary = runner.execute(&suite).await?;
            println!("{}", render_json(&summary)?);
            summary
        }
    };

    if let Some(path) = &config.report {
        write_json_report(path, &summary).await?;
        info!(path = %path.display(), "report written");
    }

    Ok(if summary.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_FAILED)
    })
}

/// Built-in or file suite, narrowed by `--filter`.
async fn select_suite(config: &CliConfig) -> Result<TestSuite, CliError> {
    let suite = match &config.suite {
        Some(path) => load_suite(path).await?,
        None => builtin_suite(),
    };

    let Some(filter) = &config.filter else {
        return Ok(suite);
    };

    let name = suite.name.clone();
    let selected = suite.filter(filter);
    if selected.is_empty() {
        return Err(CliError::NoMatchingCases {
            filter: filter.clone(),
            suite: name,
        });
    }
    Ok(selected)
}
