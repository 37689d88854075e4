//! Pattern matching engine for finding code structures.
//!
//! This module walks a parsed Tree-sitter syntax tree and yields every node
//! whose shape matches a compiled [`Pattern`], together with the subtrees
//! bound to the pattern's wildcards.

mod capture;
mod matching;

use std::ops::Range;

use crate::error::SyntaxError;
use crate::parser::ParseResult;
use crate::pattern::Pattern;
use crate::position::point_to_one_based;

pub use capture::CapturedNode;

/// Result of a successful pattern match.
///
/// Captures are ordered by the position of their wildcard in a pre-order walk
/// of the pattern, and there is exactly one per wildcard. Equality is plain
/// node identity: two matches over the same text at different places differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<'a> {
    node: tree_sitter::Node<'a>,
    source: &'a str,
    captures: Vec<CapturedNode<'a>>,
}

impl<'a> MatchResult<'a> {
    /// Returns the matched AST node.
    #[must_use]
    pub const fn node(&self) -> tree_sitter::Node<'a> {
        self.node
    }

    /// Returns the byte range of the match in the source.
    #[must_use]
    pub fn byte_range(&self) -> Range<usize> {
        self.node.byte_range()
    }

    /// Returns the text of the matched region.
    #[must_use]
    pub fn text(&self) -> &'a str {
        self.source.get(self.byte_range()).unwrap_or_default()
    }

    /// Returns the start position (line, column) of the match.
    ///
    /// Both line and column are one-based for display purposes.
    #[must_use]
    pub fn start_position(&self) -> (u32, u32) {
        point_to_one_based(self.node.start_position())
    }

    /// Returns the end position (line, column) of the match.
    ///
    /// Both line and column are one-based for display purposes.
    #[must_use]
    pub fn end_position(&self) -> (u32, u32) {
        point_to_one_based(self.node.end_position())
    }

    /// Returns the capture bound to the wildcard at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::CaptureOutOfRange`] when the pattern had no
    /// wildcard at that position.
    pub fn capture(&self, index: usize) -> Result<&CapturedNode<'a>, SyntaxError> {
        self.captures
            .get(index)
            .ok_or_else(|| SyntaxError::capture_out_of_range(index, self.captures.len()))
    }

    /// Returns all captures in wildcard order.
    #[must_use]
    pub fn captures(&self) -> &[CapturedNode<'a>] {
        &self.captures
    }
}

/// Pattern matcher that finds occurrences in parsed code.
pub struct Matcher<'p> {
    pattern: &'p Pattern,
}

impl<'p> Matcher<'p> {
    /// Creates a new matcher for the given pattern.
    #[must_use]
    pub const fn new(pattern: &'p Pattern) -> Self {
        Self { pattern }
    }

    /// Finds all matches of the pattern in the parsed source.
    #[must_use]
    pub fn find_all<'a>(&self, parsed: &'a ParseResult) -> Vec<MatchResult<'a>> {
        matching::find_all(self.pattern, parsed)
    }

    /// Finds the first match of the pattern in the parsed source.
    #[must_use]
    pub fn find_first<'a>(&self, parsed: &'a ParseResult) -> Option<MatchResult<'a>> {
        matching::find_first(self.pattern, parsed)
    }
}

impl Pattern {
    /// Finds all matches of this pattern in the parsed source.
    #[must_use]
    pub fn find_all<'a>(&self, parsed: &'a ParseResult) -> Vec<MatchResult<'a>> {
        Matcher::new(self).find_all(parsed)
    }

    /// Finds the first match of this pattern in the parsed source.
    #[must_use]
    pub fn find_first<'a>(&self, parsed: &'a ParseResult) -> Option<MatchResult<'a>> {
        Matcher::new(self).find_first(parsed)
    }
}
