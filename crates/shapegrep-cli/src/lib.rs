//! Command-line interface runtime for the shapegrep structural search tool.
//!
//! The module owns argument parsing, configuration bootstrapping, telemetry
//! set-up, the file search loop and result rendering. The interface is
//! designed to be exercised both from the binary entrypoint and from tests
//! where configuration loading and IO streams can be substituted.
//!
//! Exit status follows `grep`: 0 when something matched, 1 when nothing did
//! and 2 when an error stopped the search.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

mod cli;
mod config;
mod errors;
mod logging;
pub mod output;
mod search;
mod telemetry;

use cli::Cli;
use config::{ConfigArgumentSplit, split_config_arguments};
pub(crate) use config::{ConfigLoader, OrthoConfigLoader};
pub use config::{Config, DEFAULT_LOG_FILTER};
pub(crate) use errors::AppError;
pub use logging::LogFormat;
use output::{OutputSettings, write_report};
pub use output::{OutputFormat, ResolvedOutputFormat};
use search::Searcher;

const EXIT_NO_MATCH: u8 = 1;
const EXIT_ERROR: u8 = 2;

/// Bundles the IO streams provided to the CLI runtime.
pub(crate) struct IoStreams<'a, W: Write, E: Write> {
    pub(crate) stdout: &'a mut W,
    pub(crate) stderr: &'a mut E,
    stdout_is_terminal: bool,
}

impl<'a, W: Write, E: Write> IoStreams<'a, W, E> {
    pub(crate) const fn new(stdout: &'a mut W, stderr: &'a mut E, stdout_is_terminal: bool) -> Self {
        Self {
            stdout,
            stderr,
            stdout_is_terminal,
        }
    }

    pub(crate) const fn stdout_is_terminal(&self) -> bool {
        self.stdout_is_terminal
    }
}

/// How a completed run ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Outcome {
    Matched,
    NoMatch,
    /// Help or version text was printed.
    Informational,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Matched | Outcome::Informational => Self::SUCCESS,
            Outcome::NoMatch => Self::from(EXIT_NO_MATCH),
        }
    }
}

struct CliRunner<'a, 'io, W: Write, E: Write, L: ConfigLoader> {
    io: &'a mut IoStreams<'io, W, E>,
    loader: &'a L,
}

impl<'a, 'io, W, E, L> CliRunner<'a, 'io, W, E, L>
where
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    fn new(io: &'a mut IoStreams<'io, W, E>, loader: &'a L) -> Self {
        Self { io, loader }
    }

    fn run<I>(&mut self, args: I) -> ExitCode
    where
        I: IntoIterator<Item = OsString>,
    {
        match self.try_run(args) {
            Ok(outcome) => outcome.into(),
            Err(error) => {
                let _ = writeln!(self.io.stderr, "{error}");
                ExitCode::from(EXIT_ERROR)
            }
        }
    }

    fn try_run<I>(&mut self, args: I) -> Result<Outcome, AppError>
    where
        I: IntoIterator<Item = OsString>,
    {
        let args: Vec<OsString> = args.into_iter().collect();
        let split = split_config_arguments(&args);
        let cli_arguments = prepare_cli_arguments(&args, &split);

        let cli = match Cli::try_parse_from(cli_arguments) {
            Ok(cli) => cli,
            Err(error) if is_informational(&error) => {
                write!(self.io.stdout, "{error}")?;
                return Ok(Outcome::Informational);
            }
            Err(error) => return Err(AppError::CliUsage(error)),
        };

        let config = self.loader.load(&split.config_arguments)?;
        telemetry::initialise(&config)?;

        let language = match cli.language {
            Some(language) => Some(language),
            None => config.default_language()?,
        };
        let settings = OutputSettings {
            format: cli.output.resolve(self.io.stdout_is_terminal()),
            count_only: cli.count,
        };

        let mut searcher = Searcher::new(&cli.pattern, language, cli.strict);
        let mut total = 0usize;
        for path in &cli.paths {
            let report = searcher.search_file(path)?;
            total += report.matches.len();
            write_report(&mut *self.io.stdout, &report, settings)?;
        }
        self.io.stdout.flush()?;

        Ok(if total > 0 {
            Outcome::Matched
        } else {
            Outcome::NoMatch
        })
    }
}

/// Runs the CLI using the provided arguments and IO handles.
#[must_use]
pub fn run<I, W, E>(args: I, stdout: &mut W, stderr: &mut E, stdout_is_terminal: bool) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    let mut io = IoStreams::new(stdout, stderr, stdout_is_terminal);
    run_with_loader(args, &mut io, &OrthoConfigLoader)
}

/// Runs the CLI with a custom configuration loader.
pub(crate) fn run_with_loader<I, W, E, L>(
    args: I,
    io: &mut IoStreams<'_, W, E>,
    loader: &L,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    CliRunner::new(io, loader).run(args)
}

fn prepare_cli_arguments(args: &[OsString], split: &ConfigArgumentSplit) -> Vec<OsString> {
    let program = args.first().into_iter();
    let command = args.iter().skip(split.command_start.max(1));
    program.chain(command).cloned().collect()
}

fn is_informational(error: &clap::Error) -> bool {
    matches!(
        error.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    )
}
