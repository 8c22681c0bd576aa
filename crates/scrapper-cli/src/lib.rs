//! Command-line runtime for the scrapper selector tool.
//!
//! The runtime splits configuration flags from the query arguments, loads
//! layered configuration, installs telemetry, and runs a single query. Input
//! and output streams are injected so tests can drive it without a process.

use std::ffi::OsString;
use std::io::{Read, Write};
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

mod cli;
mod config;
mod errors;
mod query;
mod telemetry;


use cli::Cli;
use config::split_config_arguments;
pub(crate) use config::{ConfigLoader, OrthoConfigLoader};
pub(crate) use errors::AppError;
use query::QueryOutcome;

/// Exit status used when the selector is valid but matches nothing.
pub const NO_MATCH_EXIT_CODE: u8 = 2;

/// Bundles the IO streams provided to the CLI runtime.
pub(crate) struct IoStreams<'a, R: Read, W: Write, E: Write> {
    pub(crate) stdin: &'a mut R,
    pub(crate) stdout: &'a mut W,
    pub(crate) stderr: &'a mut E,
}

/// Runs the CLI using the provided arguments and IO handles.
///
/// Returns success when at least one element matched, [`NO_MATCH_EXIT_CODE`]
/// when none did, and failure for any error (reported on `stderr`).
#[must_use]
pub fn run<I, R, W, E>(args: I, stdin: &mut R, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    R: Read,
    W: Write,
    E: Write,
{
    let mut io = IoStreams {
        stdin,
        stdout,
        stderr,
    };
    run_with_loader(args, &mut io, &OrthoConfigLoader)
}

/// Runs the CLI with a custom configuration loader.
pub(crate) fn run_with_loader<I, R, W, E, L>(
    args: I,
    io: &mut IoStreams<'_, R, W, E>,
    loader: &L,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    R: Read,
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    let args: Vec<OsString> = args.into_iter().collect();
    let split = split_config_arguments(&args);

    let cli = match Cli::try_parse_from(split.command_arguments(&args)) {
        Ok(cli) => cli,
        Err(error) if is_informational(&error) => {
            let _ = write!(io.stdout, "{error}");
            return ExitCode::SUCCESS;
        }
        Err(error) => return report(io.stderr, &AppError::CliUsage(error)),
    };

    let result = loader
        .load(&split.config_arguments)
        .and_then(|config| telemetry::initialise(&config).map_err(AppError::from))
        .and_then(|()| query::execute(&cli, &mut *io.stdin, &mut *io.stdout));

    match result {
        Ok(QueryOutcome::Matched) => ExitCode::SUCCESS,
        Ok(QueryOutcome::NoMatch) => ExitCode::from(NO_MATCH_EXIT_CODE),
        Err(error) => report(io.stderr, &error),
    }
}

fn is_informational(error: &clap::Error) -> bool {
    matches!(
        error.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    )
}

fn report<E: Write>(stderr: &mut E, error: &AppError) -> ExitCode {
    let _ = writeln!(stderr, "{error}");
    ExitCode::FAILURE
}
