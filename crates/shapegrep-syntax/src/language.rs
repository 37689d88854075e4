//! Language detection and Tree-sitter grammar selection.
//!
//! [`SupportedLanguage`] names the grammars a pattern can be written in and
//! knows how to recover a parseable form for pattern fragments that are not
//! valid at the top level of a file.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

use crate::error::SyntaxError;

/// Name of the synthetic function used to host statement-level patterns.
pub(crate) const PATTERN_WRAPPER_NAME: &str = "__shapegrep_pattern__";

/// File extensions recognised for each language.
const EXTENSIONS: &[(&str, SupportedLanguage)] = &[
    ("rs", SupportedLanguage::Rust),
    ("py", SupportedLanguage::Python),
    ("pyi", SupportedLanguage::Python),
    ("ts", SupportedLanguage::TypeScript),
    ("tsx", SupportedLanguage::TypeScript),
    ("mts", SupportedLanguage::TypeScript),
    ("cts", SupportedLanguage::TypeScript),
];

/// Languages that patterns and haystacks can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SupportedLanguage {
    /// Rust source files (`.rs`).
    #[default]
    Rust,
    /// Python source files (`.py`, `.pyi`).
    Python,
    /// TypeScript source files (`.ts`, `.tsx`, `.mts`, `.cts`).
    TypeScript,
}

impl SupportedLanguage {
    /// Looks up a language by file extension, ignoring ASCII case.
    ///
    /// Returns `None` if the extension is not recognised.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        EXTENSIONS
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(ext))
            .map(|(_, language)| *language)
    }

    /// Detects the language of `path`, explaining why detection failed.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::UnknownLanguage`] when the path has no usable
    /// extension and [`SyntaxError::UnsupportedExtension`] when the extension
    /// is not one of the supported ones.
    pub fn detect(path: &Path) -> Result<Self, SyntaxError> {
        let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
            return Err(SyntaxError::unknown_language(path.to_path_buf()));
        };
        Self::from_extension(ext).ok_or_else(|| SyntaxError::unsupported_extension(ext))
    }

    /// Returns the Tree-sitter grammar for this language.
    #[must_use]
    pub fn grammar(self) -> tree_sitter::Language {
        match self {
            Self::Rust => tree_sitter_rust::LANGUAGE.into(),
            Self::Python => tree_sitter_python::LANGUAGE.into(),
            // TSX is a superset, so `.tsx` haystacks parse too.
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }

    /// Returns the lower-case identifier for this language.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rust => "rust",
            Self::Python => "python",
            Self::TypeScript => "typescript",
        }
    }

    /// Returns all supported languages.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Rust, Self::Python, Self::TypeScript]
    }

    /// Embeds a statement-level fragment in a function body so that the
    /// grammar accepts it.
    ///
    /// Fragments such as `let x = *` or a bare Rust expression are not valid
    /// at the top level of a source file; hosting them in a function gives
    /// the parser a statement context.
    ///
    /// The fragment sits on lines of its own so that a trailing line comment
    /// cannot swallow the terminator or the closing brace.
    pub(crate) fn wrap_in_function(self, fragment: &str) -> String {
        match self {
            Self::Rust => {
                let trimmed = fragment.trim_end();
                let last_code = last_code_line(trimmed);
                let needs_semicolon = !last_code.ends_with(';') && !last_code.ends_with('}');
                let terminator = if needs_semicolon { ";" } else { "" };
                format!("fn {PATTERN_WRAPPER_NAME}() {{\n{trimmed}\n{terminator}}}")
            }
            Self::Python => {
                let mut out = format!("def {PATTERN_WRAPPER_NAME}():\n");
                for line in fragment.lines() {
                    out.push_str("    ");
                    out.push_str(line);
                    out.push('\n');
                }
                out
            }
            Self::TypeScript => format!("function {PATTERN_WRAPPER_NAME}() {{\n{fragment}\n}}"),
        }
    }
}

/// Returns the last line of `fragment` that still has code once `//`
/// comments are removed, trimmed of surrounding whitespace.
fn last_code_line(fragment: &str) -> &str {
    fragment
        .lines()
        .rev()
        .map(|line| line.split_once("//").map_or(line, |(code, _)| code).trim())
        .find(|code| !code.is_empty())
        .unwrap_or_default()
}

impl fmt::Display for SupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised when parsing a language identifier fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unsupported language: '{0}'")]
pub struct LanguageParseError(String);

impl LanguageParseError {
    /// Returns the input that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl FromStr for SupportedLanguage {
    type Err = LanguageParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalised = input.trim().to_ascii_lowercase();
        let found = Self::all()
            .iter()
            .copied()
            .find(|language| language.as_str() == normalised)
            .or_else(|| Self::from_extension(&normalised));
        found.ok_or(LanguageParseError(normalised))
    }
}
