//! CLI entrypoint for the scrapper selector tool.
//!
//! The binary delegates to [`scrapper_cli::run`], which loads configuration,
//! parses the HTML input, runs the selector, and prints one line per match.

use std::io::{self, StderrLock, StdinLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdin: StdinLock<'_> = io::stdin().lock();
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    scrapper_cli::run(std::env::args_os(), &mut stdin, &mut stdout, &mut stderr)
}
