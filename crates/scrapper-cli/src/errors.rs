//! Error types for the CLI runtime.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use scrapper::ScrapeError;
use thiserror::Error;

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<ortho_config::OrthoError>),
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("failed to read {}: {source}", path.display())]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to read standard input: {0}")]
    ReadStdin(io::Error),
    #[error(transparent)]
    Scrape(#[from] ScrapeError),
    #[error("failed to write output: {0}")]
    WriteOutput(io::Error),
}
