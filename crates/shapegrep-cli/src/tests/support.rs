//! Test support utilities for shapegrep CLI coverage.
//!
//! Supplies a harness that writes source files into a temporary directory,
//! runs the CLI against them with a fixed configuration and captures its
//! output.

use std::ffi::OsString;
use std::fs;
use std::process::ExitCode;

use camino::Utf8PathBuf;
use rstest::fixture;
use tempfile::TempDir;

use crate::{AppError, Config, ConfigLoader, IoStreams, run_with_loader};

pub(super) struct StaticConfigLoader {
    config: Config,
}

impl StaticConfigLoader {
    pub(super) const fn new(config: Config) -> Self {
        Self { config }
    }
}

impl ConfigLoader for StaticConfigLoader {
    fn load(&self, _args: &[OsString]) -> Result<Config, AppError> {
        Ok(self.config.clone())
    }
}

/// Captured result of one CLI run.
pub(super) struct RunOutput {
    pub(super) exit_code: ExitCode,
    pub(super) stdout: String,
    pub(super) stderr: String,
}

pub(super) struct Harness {
    temp_dir: TempDir,
    pub(super) config: Config,
}

impl Harness {
    fn new() -> Self {
        let temp_dir = match TempDir::new() {
            Ok(dir) => dir,
            Err(error) => panic!("failed to create temporary directory: {error}"),
        };
        Self {
            temp_dir,
            config: Config::default(),
        }
    }

    /// Writes `content` to `name` inside the temporary directory.
    pub(super) fn write(&self, name: &str, content: &str) -> Utf8PathBuf {
        let path = self.temp_dir.path().join(name);
        if let Err(error) = fs::write(&path, content) {
            panic!("failed to write {name}: {error}");
        }
        match Utf8PathBuf::from_path_buf(path) {
            Ok(path) => path,
            Err(path) => panic!("non UTF-8 temporary path: {}", path.display()),
        }
    }

    /// Runs the CLI with `args` after the program name, as if stdout were
    /// not a terminal.
    pub(super) fn run<S: AsRef<str>>(&self, args: &[S]) -> RunOutput {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let loader = StaticConfigLoader::new(self.config.clone());
        let arguments = std::iter::once(OsString::from("shapegrep"))
            .chain(args.iter().map(|arg| OsString::from(arg.as_ref())));

        let exit_code = {
            let mut io = IoStreams::new(&mut stdout, &mut stderr, false);
            run_with_loader(arguments, &mut io, &loader)
        };

        RunOutput {
            exit_code,
            stdout: String::from_utf8_lossy(&stdout).into_owned(),
            stderr: String::from_utf8_lossy(&stderr).into_owned(),
        }
    }
}

#[fixture]
pub(super) fn harness() -> Harness {
    Harness::new()
}
