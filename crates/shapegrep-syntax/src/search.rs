//! Convenience queries layered on [`Pattern::find_all`].
//!
//! The tree-based helpers answer the usual string-search questions (first,
//! last, count, occurs, positions) for an already parsed haystack. The
//! `*_in` helpers accept raw text, parse it tolerantly with the pattern's
//! language, and return owned results.

use std::ops::Range;

use crate::error::SyntaxError;
use crate::matcher::MatchResult;
use crate::parser::{ParseResult, Parser};
use crate::pattern::Pattern;

/// Returns every match of `pattern` in `haystack`, outermost first.
#[must_use]
pub fn find_all<'a>(pattern: &Pattern, haystack: &'a ParseResult) -> Vec<MatchResult<'a>> {
    pattern.find_all(haystack)
}

/// Returns the first match in pre-order, if any.
#[must_use]
pub fn first_match<'a>(pattern: &Pattern, haystack: &'a ParseResult) -> Option<MatchResult<'a>> {
    pattern.find_first(haystack)
}

/// Returns the last match in pre-order, if any.
#[must_use]
pub fn last_match<'a>(pattern: &Pattern, haystack: &'a ParseResult) -> Option<MatchResult<'a>> {
    pattern.find_all(haystack).pop()
}

/// Counts the matches, nested ones included.
#[must_use]
pub fn count(pattern: &Pattern, haystack: &ParseResult) -> usize {
    pattern.find_all(haystack).len()
}

/// Returns whether the pattern matches anywhere in the haystack.
#[must_use]
pub fn occurs(pattern: &Pattern, haystack: &ParseResult) -> bool {
    pattern.find_first(haystack).is_some()
}

/// Returns the byte range of every match.
#[must_use]
pub fn ranges(pattern: &Pattern, haystack: &ParseResult) -> Vec<Range<usize>> {
    pattern
        .find_all(haystack)
        .iter()
        .map(MatchResult::byte_range)
        .collect()
}

fn parse_tolerant(pattern: &Pattern, text: &str) -> Result<ParseResult, SyntaxError> {
    Parser::new(pattern.language())?.parse(text)
}

/// Returns the byte range of every match in `text`.
///
/// # Errors
///
/// Returns an error only if the parser for the pattern's language cannot be
/// created; malformed text is searched on a best-effort basis.
pub fn find_ranges_in(pattern: &Pattern, text: &str) -> Result<Vec<Range<usize>>, SyntaxError> {
    let parsed = parse_tolerant(pattern, text)?;
    Ok(ranges(pattern, &parsed))
}

/// Returns the byte range of the first match in `text`.
///
/// # Errors
///
/// See [`find_ranges_in`].
pub fn find_first_range_in(
    pattern: &Pattern,
    text: &str,
) -> Result<Option<Range<usize>>, SyntaxError> {
    let parsed = parse_tolerant(pattern, text)?;
    Ok(first_match(pattern, &parsed).map(|m| m.byte_range()))
}

/// Returns the byte range of the last match in `text`.
///
/// # Errors
///
/// See [`find_ranges_in`].
pub fn find_last_range_in(
    pattern: &Pattern,
    text: &str,
) -> Result<Option<Range<usize>>, SyntaxError> {
    let parsed = parse_tolerant(pattern, text)?;
    Ok(last_match(pattern, &parsed).map(|m| m.byte_range()))
}

/// Counts the matches in `text`.
///
/// # Errors
///
/// See [`find_ranges_in`].
pub fn count_in(pattern: &Pattern, text: &str) -> Result<usize, SyntaxError> {
    let parsed = parse_tolerant(pattern, text)?;
    Ok(count(pattern, &parsed))
}

/// Returns whether the pattern matches anywhere in `text`.
///
/// # Errors
///
/// See [`find_ranges_in`].
pub fn occurs_in(pattern: &Pattern, text: &str) -> Result<bool, SyntaxError> {
    let parsed = parse_tolerant(pattern, text)?;
    Ok(occurs(pattern, &parsed))
}
