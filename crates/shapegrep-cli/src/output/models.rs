//! Owned match records shared by the renderers.

use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use shapegrep_syntax::{CapturedNode, MatchResult};

/// One match, detached from the parse tree it was found in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct MatchRecord {
    /// File the match was found in.
    pub(crate) path: Utf8PathBuf,
    /// Line number (1-indexed).
    pub(crate) line: u32,
    /// Column number (1-indexed).
    pub(crate) column: u32,
    /// Byte offset of the first matched byte.
    pub(crate) start: usize,
    /// Byte offset just past the last matched byte.
    pub(crate) end: usize,
    /// Matched source text.
    pub(crate) text: String,
    /// Text bound to each wildcard, in pattern order.
    pub(crate) captures: Vec<String>,
}

impl MatchRecord {
    pub(crate) fn from_match(path: &Utf8Path, found: &MatchResult<'_>) -> Self {
        let (line, column) = found.start_position();
        let range = found.byte_range();
        Self {
            path: path.to_owned(),
            line,
            column,
            start: range.start,
            end: range.end,
            text: found.text().to_owned(),
            captures: found
                .captures()
                .iter()
                .map(CapturedNode::text)
                .map(str::to_owned)
                .collect(),
        }
    }
}

/// Per-file match count used by `--count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct CountRecord<'a> {
    /// File that was searched.
    pub(crate) path: &'a Utf8Path,
    /// Number of matches, nested ones included.
    pub(crate) count: usize,
}

/// All matches found in one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FileReport {
    pub(crate) path: Utf8PathBuf,
    pub(crate) matches: Vec<MatchRecord>,
}

impl FileReport {
    pub(crate) fn count(&self) -> CountRecord<'_> {
        CountRecord {
            path: &self.path,
            count: self.matches.len(),
        }
    }
}
