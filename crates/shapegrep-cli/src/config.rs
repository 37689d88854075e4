//! Layered configuration for the shapegrep CLI.
//!
//! Configuration is merged from defaults, an optional configuration file
//! (`--config-path` or `SHAPEGREP_CONFIG_PATH`), `SHAPEGREP_*` environment
//! variables and the configuration flags at the front of the command line.
//! The helpers here split those flags off so the loader only receives
//! supported flags while the search command parses the remainder.

use std::ffi::{OsStr, OsString};

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use shapegrep_syntax::SupportedLanguage;

use crate::AppError;
use crate::logging::LogFormat;

/// Default tracing filter applied to diagnostics.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// CLI flags recognised by the configuration loader.
///
/// MAINTENANCE: keep in sync with the fields of [`Config`].
pub(crate) const CONFIG_CLI_FLAGS: &[&str] = &[
    "--config-path",
    "--log-filter",
    "--log-format",
    "--default-language",
];

/// Runtime configuration for the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "SHAPEGREP")]
pub struct Config {
    /// Tracing filter expression for diagnostics written to stderr.
    #[ortho_config(default = DEFAULT_LOG_FILTER.to_owned())]
    pub log_filter: String,
    /// Format of diagnostics written to stderr.
    #[ortho_config(default = LogFormat::Compact)]
    pub log_format: LogFormat,
    /// Language used when `--language` is not given, before falling back to
    /// file extensions.
    pub default_language: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
            log_format: LogFormat::default(),
            default_language: None,
        }
    }
}

impl Config {
    /// Returns the configured tracing filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Returns the configured diagnostic format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Parses the configured default language, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DefaultLanguage`] when the configured value does
    /// not name a supported language.
    pub(crate) fn default_language(&self) -> Result<Option<SupportedLanguage>, AppError> {
        self.default_language
            .as_deref()
            .map(str::parse::<SupportedLanguage>)
            .transpose()
            .map_err(AppError::DefaultLanguage)
    }
}

pub(crate) trait ConfigLoader {
    /// Loads configuration for the CLI.
    ///
    /// # Flag Ordering
    ///
    /// Configuration flags (listed in `CONFIG_CLI_FLAGS`) must appear before
    /// the pattern. Configuration flags appearing after it are handed to the
    /// search command parser, which rejects them.
    fn load(&self, args: &[OsString]) -> Result<Config, AppError>;
}

pub(crate) struct OrthoConfigLoader;

#[derive(Debug, Clone, Copy)]
enum FlagAction {
    Include { needs_value: bool },
    Skip,
}

impl ConfigLoader for OrthoConfigLoader {
    fn load(&self, args: &[OsString]) -> Result<Config, AppError> {
        Config::load_from_iter(args.iter().cloned()).map_err(AppError::LoadConfiguration)
    }
}

impl OrthoConfigLoader {
    fn process_config_flag(argument: &OsStr) -> FlagAction {
        let argument_text = argument.to_string_lossy();
        if !argument_text.starts_with("--") {
            return FlagAction::Skip;
        }

        let (flag, has_inline_value) = match argument_text.split_once('=') {
            Some((flag, _)) => (flag, true),
            None => (argument_text.as_ref(), false),
        };

        if CONFIG_CLI_FLAGS.contains(&flag) {
            return FlagAction::Include {
                needs_value: !has_inline_value,
            };
        }

        FlagAction::Skip
    }
}

pub(crate) struct ConfigArgumentSplit {
    pub(crate) config_arguments: Vec<OsString>,
    pub(crate) command_start: usize,
}

/// Separates the leading configuration flags from the search command.
///
/// The program name is kept at the front of `config_arguments`, and
/// `command_start` indexes the first argument of the search command.
pub(crate) fn split_config_arguments(args: &[OsString]) -> ConfigArgumentSplit {
    let Some(program) = args.first() else {
        return ConfigArgumentSplit {
            config_arguments: Vec::new(),
            command_start: 0,
        };
    };

    let mut filtered: Vec<OsString> = vec![program.clone()];
    let mut command_start = 1usize;
    let mut pending_value = false;

    for argument in args.iter().skip(1) {
        if pending_value {
            filtered.push(argument.clone());
            pending_value = false;
            command_start += 1;
            continue;
        }

        match OrthoConfigLoader::process_config_flag(argument.as_os_str()) {
            FlagAction::Include { needs_value } => {
                filtered.push(argument.clone());
                command_start += 1;
                pending_value = needs_value;
            }
            FlagAction::Skip => break,
        }
    }

    ConfigArgumentSplit {
        config_arguments: filtered,
        command_start,
    }
}
