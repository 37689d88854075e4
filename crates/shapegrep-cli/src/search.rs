//! File search driver: resolves languages, reads and parses files, and runs
//! the compiled pattern over each one.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs;

use camino::Utf8Path;
use shapegrep_syntax::{ParseResult, Parser, Pattern, SupportedLanguage};
use tracing::debug;

use crate::AppError;
use crate::output::{FileReport, MatchRecord};

/// Searches files for one pattern, compiling it at most once per language.
pub(crate) struct Searcher<'a> {
    pattern_text: &'a str,
    language: Option<SupportedLanguage>,
    strict: bool,
    patterns: HashMap<SupportedLanguage, Pattern>,
    parsers: HashMap<SupportedLanguage, Parser>,
}

impl<'a> Searcher<'a> {
    /// Creates a searcher. When `language` is `None`, each file's language is
    /// detected from its extension.
    pub(crate) fn new(pattern_text: &'a str, language: Option<SupportedLanguage>, strict: bool) -> Self {
        Self {
            pattern_text,
            language,
            strict,
            patterns: HashMap::new(),
            parsers: HashMap::new(),
        }
    }

    /// Reads `path` and returns every match in it.
    pub(crate) fn search_file(&mut self, path: &Utf8Path) -> Result<FileReport, AppError> {
        let language = self.language_for(path)?;
        let source = fs::read_to_string(path).map_err(|source| AppError::ReadSource {
            path: path.to_owned(),
            source,
        })?;
        self.search_text(path, language, &source)
    }

    /// Returns every match in `text`, reported against `path`.
    pub(crate) fn search_text(
        &mut self,
        path: &Utf8Path,
        language: SupportedLanguage,
        text: &str,
    ) -> Result<FileReport, AppError> {
        let pattern = compiled_pattern(&mut self.patterns, self.pattern_text, language)?;
        let parsed = parse(&mut self.parsers, language, text, self.strict).map_err(|source| {
            AppError::Parse {
                path: path.to_owned(),
                source,
            }
        })?;

        let matches: Vec<_> = pattern
            .find_all(&parsed)
            .iter()
            .map(|found| MatchRecord::from_match(path, found))
            .collect();
        debug!(%path, %language, matches = matches.len(), "searched file");

        Ok(FileReport {
            path: path.to_owned(),
            matches,
        })
    }

    fn language_for(&self, path: &Utf8Path) -> Result<SupportedLanguage, AppError> {
        match self.language {
            Some(language) => Ok(language),
            None => SupportedLanguage::detect(path.as_std_path()).map_err(|source| {
                AppError::Language {
                    path: path.to_owned(),
                    source,
                }
            }),
        }
    }
}

fn compiled_pattern<'p>(
    patterns: &'p mut HashMap<SupportedLanguage, Pattern>,
    text: &str,
    language: SupportedLanguage,
) -> Result<&'p Pattern, AppError> {
    match patterns.entry(language) {
        Entry::Occupied(entry) => Ok(entry.into_mut()),
        Entry::Vacant(entry) => {
            let pattern = Pattern::compile(text, language).map_err(AppError::Pattern)?;
            Ok(entry.insert(pattern))
        }
    }
}

fn parse(
    parsers: &mut HashMap<SupportedLanguage, Parser>,
    language: SupportedLanguage,
    text: &str,
    strict: bool,
) -> Result<ParseResult, shapegrep_syntax::SyntaxError> {
    let parser = match parsers.entry(language) {
        Entry::Occupied(entry) => entry.into_mut(),
        Entry::Vacant(entry) => entry.insert(Parser::new(language)?),
    };
    if strict {
        parser.parse_strict(text)
    } else {
        parser.parse(text)
    }
}
