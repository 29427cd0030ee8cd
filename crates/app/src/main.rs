//! CleanSlate command-line client
//!
//! Composes one repository (remote or in-memory) with the use-cases and
//! runs a single screen interaction per invocation.

mod cli;
mod commands;
mod render;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cleanslate_core::system_clock;
use cleanslate_core::usecase::TaskUseCases;
use cleanslate_data::{DataConfig, TaskBackend};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so command output stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cleanslate=info,cleanslate_data=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.apply(DataConfig::from_env().context("Invalid CLEANSLATE_* environment")?);
    tracing::debug!("Data config: {:?}", config);

    let clock = system_clock();
    let backend = TaskBackend::from_config(&config, Arc::clone(&clock));
    let use_cases = TaskUseCases::new(Arc::new(backend), clock);

    let mut stdout = std::io::stdout().lock();
    let ok = commands::run(cli.command, use_cases, &mut stdout).await?;

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
