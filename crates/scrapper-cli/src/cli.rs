//! CLI argument definitions for the scrapper tool.

use std::borrow::Cow;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use scrapper::Element;

/// What to print for each matched element.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub(crate) enum ExtractMode {
    /// The element's normalised inner text.
    #[default]
    Text,
    /// The element's source HTML, verbatim.
    Html,
    /// The element's tag name.
    Tag,
}

impl ExtractMode {
    pub(crate) fn render<'a>(self, element: &Element<'a>) -> Cow<'a, str> {
        match self {
            Self::Text => Cow::Owned(element.inner_text()),
            Self::Html => Cow::Borrowed(element.to_html()),
            Self::Tag => Cow::Borrowed(element.tag_name()),
        }
    }
}

/// Command-line interface for the scrapper selector tool.
///
/// Configuration flags (`--config-path`, `--log-filter`, `--log-format`) are
/// split off before this parser runs and must precede `FILE`.
#[derive(Parser, Debug)]
#[command(
    name = "scrapper",
    version,
    about = "Query an HTML file with a tag, .class, or #id selector"
)]
pub(crate) struct Cli {
    /// HTML file to read, or `-` for standard input.
    #[arg(value_name = "FILE")]
    pub(crate) file: PathBuf,
    /// A tag name, `.class`, or `#id`.
    #[arg(value_name = "SELECTOR", allow_hyphen_values = true)]
    pub(crate) selector: String,
    /// Prints every match instead of the first.
    #[arg(long)]
    pub(crate) all: bool,
    /// Controls what is printed for each match.
    #[arg(long, value_enum, default_value_t = ExtractMode::Text)]
    pub(crate) extract: ExtractMode,
}

impl Cli {
    /// Returns true when the input should come from standard input.
    pub(crate) fn reads_stdin(&self) -> bool {
        self.file.as_os_str() == "-"
    }
}
