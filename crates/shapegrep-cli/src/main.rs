//! CLI entrypoint for the shapegrep structural search tool.
//!
//! The binary delegates to [`shapegrep_cli::run`], which loads configuration,
//! parses command-line arguments, searches the requested files and renders
//! the matches.

use std::io::{self, IsTerminal, StderrLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let stdout_is_terminal = io::stdout().is_terminal();
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    shapegrep_cli::run(
        std::env::args_os(),
        &mut stdout,
        &mut stderr,
        stdout_is_terminal,
    )
}
