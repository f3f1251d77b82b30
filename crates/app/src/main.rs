//! apicheck - HTTP contract suite runner.
//!
//! Sends every case of a suite to the target API in order and reports which
//! ones matched their expected status and body. Logs go to stderr so stdout
//! carries only the report.

mod config;
mod run;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::CliConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = CliConfig::parse();

    // RUST_LOG overrides --log-level
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "starting apicheck");

    match run::run(&config).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(run::EXIT_STARTUP)
        }
    }
}
