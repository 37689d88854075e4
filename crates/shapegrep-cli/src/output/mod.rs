//! Rendering of search results for humans and machines.
//!
//! Human output lists each match as `path:line:column: text` with the
//! captured wildcards underneath. JSON output emits one object per match (or
//! per file with `--count`) on its own line.

mod models;
mod render;

use std::io::Write;

use clap::ValueEnum;

pub(crate) use models::{FileReport, MatchRecord};

use crate::AppError;

/// Output format selection for search results.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Selects `human` for terminal output and `json` for redirected output.
    Auto,
    /// Always render human-readable output.
    Human,
    /// Always emit JSON Lines.
    Json,
}

/// Output format after resolving `auto` based on TTY detection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolvedOutputFormat {
    /// Human-readable lines.
    Human,
    /// One JSON object per line.
    Json,
}

impl OutputFormat {
    /// Resolves the output format based on whether stdout is a terminal.
    #[must_use]
    pub const fn resolve(self, stdout_is_terminal: bool) -> ResolvedOutputFormat {
        match self {
            Self::Auto => {
                if stdout_is_terminal {
                    ResolvedOutputFormat::Human
                } else {
                    ResolvedOutputFormat::Json
                }
            }
            Self::Human => ResolvedOutputFormat::Human,
            Self::Json => ResolvedOutputFormat::Json,
        }
    }
}

/// What to print for each searched file.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct OutputSettings {
    pub(crate) format: ResolvedOutputFormat,
    pub(crate) count_only: bool,
}

/// Renders the results for one file.
pub(crate) fn write_report<W: Write>(
    out: &mut W,
    report: &FileReport,
    settings: OutputSettings,
) -> Result<(), AppError> {
    match (settings.count_only, settings.format) {
        (true, ResolvedOutputFormat::Human) => render::write_human_count(out, report),
        (true, ResolvedOutputFormat::Json) => render::write_json_line(out, &report.count()),
        (false, ResolvedOutputFormat::Human) => report
            .matches
            .iter()
            .try_for_each(|record| render::write_human(&mut *out, record)),
        (false, ResolvedOutputFormat::Json) => report
            .matches
            .iter()
            .try_for_each(|record| render::write_json_line(&mut *out, record)),
    }
}
