//! Error types for the CLI runtime.

use std::io;
use std::sync::Arc;

use camino::Utf8PathBuf;
use shapegrep_syntax::{LanguageParseError, SyntaxError};
use thiserror::Error;

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<ortho_config::OrthoError>),
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error("invalid default_language in configuration: {0}")]
    DefaultLanguage(LanguageParseError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("{path}: {source}")]
    Language {
        path: Utf8PathBuf,
        source: SyntaxError,
    },
    #[error("{0}")]
    Pattern(SyntaxError),
    #[error("failed to read {path}: {source}")]
    ReadSource { path: Utf8PathBuf, source: io::Error },
    #[error("{path}: {source}")]
    Parse {
        path: Utf8PathBuf,
        source: SyntaxError,
    },
    #[error("failed to serialise match: {0}")]
    SerialiseMatch(serde_json::Error),
    #[error("failed to write output: {0}")]
    WriteOutput(#[from] io::Error),
}
