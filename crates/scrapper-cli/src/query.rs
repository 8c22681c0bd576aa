//! Runs one selector query over an HTML input and prints the matches.

use std::fs;
use std::io::{Read, Write};

use scrapper::{Element, HtmlParser, ScrapeError, Selectable};
use tracing::{debug, warn};

use crate::AppError;
use crate::cli::Cli;

/// Result of a query that completed without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum QueryOutcome {
    /// At least one element was printed.
    Matched,
    /// The selector was valid but nothing matched.
    NoMatch,
}

pub(crate) fn execute<R, W>(cli: &Cli, stdin: &mut R, stdout: &mut W) -> Result<QueryOutcome, AppError>
where
    R: Read,
    W: Write,
{
    let source = read_input(cli, stdin)?;
    let mut parser = HtmlParser::new()?;
    let parsed = parser.parse(&source)?;

    if parsed.has_errors() {
        let errors = parsed.errors();
        warn!(errors = errors.len(), "input contains syntax errors");
        for error in errors {
            debug!(
                line = error.line,
                column = error.column,
                context = %error.context,
                "{}",
                error.message
            );
        }
    }

    let document = parsed.document()?;
    let elements: Vec<Element<'_>> = if cli.all {
        document
            .query_selector_all(&cli.selector)
            .map_err(ScrapeError::from)?
    } else {
        document
            .query_selector(&cli.selector)
            .map_err(ScrapeError::from)?
            .into_iter()
            .collect()
    };
    debug!(
        selector = %cli.selector,
        all = cli.all,
        matches = elements.len(),
        "query finished"
    );

    for element in &elements {
        writeln!(stdout, "{}", cli.extract.render(element)).map_err(AppError::WriteOutput)?;
    }
    stdout.flush().map_err(AppError::WriteOutput)?;

    Ok(if elements.is_empty() {
        QueryOutcome::NoMatch
    } else {
        QueryOutcome::Matched
    })
}

fn read_input<R: Read>(cli: &Cli, stdin: &mut R) -> Result<String, AppError> {
    if cli.reads_stdin() {
        let mut source = String::new();
        stdin
            .read_to_string(&mut source)
            .map_err(AppError::ReadStdin)?;
        return Ok(source);
    }

    fs::read_to_string(&cli.file).map_err(|source| AppError::ReadFile {
        path: cli.file.clone(),
        source,
    })
}
