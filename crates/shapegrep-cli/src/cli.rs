//! CLI argument definitions for shapegrep.

use camino::Utf8PathBuf;
use clap::Parser;
use shapegrep_syntax::{LanguageParseError, SupportedLanguage};

use crate::output::OutputFormat;

/// Command-line interface for the shapegrep structural search tool.
#[derive(Parser, Debug)]
#[command(
    name = "shapegrep",
    about = "Search source files for code with the shape of a pattern",
    after_help = "Write `*` for any single syntax node and `\\*` for a literal `*`."
)]
pub(crate) struct Cli {
    /// Language of the pattern and the searched files.
    ///
    /// Defaults to the configured language, then to each file's extension.
    #[arg(long, short = 'l', value_parser = parse_language)]
    pub(crate) language: Option<SupportedLanguage>,
    /// Controls how matches are rendered.
    #[arg(long, value_enum, default_value_t = OutputFormat::Auto)]
    pub(crate) output: OutputFormat,
    /// Prints the number of matches per file instead of the matches.
    #[arg(long, short = 'c')]
    pub(crate) count: bool,
    /// Fails on files that contain syntax errors instead of searching them.
    #[arg(long)]
    pub(crate) strict: bool,
    /// The pattern to search for.
    #[arg(value_name = "PATTERN")]
    pub(crate) pattern: String,
    /// Files to search.
    #[arg(value_name = "PATH", required = true)]
    pub(crate) paths: Vec<Utf8PathBuf>,
}

fn parse_language(value: &str) -> Result<SupportedLanguage, String> {
    value.parse().map_err(|error: LanguageParseError| error.to_string())
}
