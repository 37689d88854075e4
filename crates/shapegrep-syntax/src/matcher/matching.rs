//! Matching algorithms for the [`Matcher`](super::Matcher) implementation.

use tracing::{debug, trace};

use crate::matcher::MatchResult;
use crate::matcher::capture::CaptureBuffer;
use crate::parser::ParseResult;
use crate::pattern::{Pattern, PatternNode};
use crate::tree::SyntaxNode;

/// Finds all matches of `pattern` in `parsed` via depth-first traversal.
///
/// Returns matches in pre-order, so an enclosing match always precedes the
/// matches nested inside it. A pattern compiled for another language never
/// matches.
pub(super) fn find_all<'a>(pattern: &Pattern, parsed: &'a ParseResult) -> Vec<MatchResult<'a>> {
    if pattern.language() != parsed.language() {
        trace!(
            pattern_language = %pattern.language(),
            haystack_language = %parsed.language(),
            "language mismatch; skipping search"
        );
        return Vec::new();
    }

    let mut results = Vec::new();
    let mut buffer = CaptureBuffer::default();
    collect_matches(parsed.syntax_root(), pattern.root(), &mut buffer, &mut results);
    debug!(
        pattern = pattern.source(),
        matches = results.len(),
        "search complete"
    );
    results
}

/// Finds the first match of `pattern` in `parsed` in pre-order, stopping as
/// soon as one is found.
pub(super) fn find_first<'a>(pattern: &Pattern, parsed: &'a ParseResult) -> Option<MatchResult<'a>> {
    if pattern.language() != parsed.language() {
        return None;
    }

    let mut buffer = CaptureBuffer::default();
    first_match(parsed.syntax_root(), pattern.root(), &mut buffer)
}

/// Visits `candidate` and all of its descendants in pre-order, recording a
/// match for every node the pattern accepts.
fn collect_matches<'a>(
    candidate: SyntaxNode<'a>,
    pattern_root: &PatternNode,
    buffer: &mut CaptureBuffer<'a>,
    results: &mut Vec<MatchResult<'a>>,
) {
    if let Some(found) = attempt(candidate, pattern_root, buffer) {
        results.push(found);
    }

    for child in candidate.children().unwrap_or_default() {
        collect_matches(child, pattern_root, buffer, results);
    }
}

fn first_match<'a>(
    candidate: SyntaxNode<'a>,
    pattern_root: &PatternNode,
    buffer: &mut CaptureBuffer<'a>,
) -> Option<MatchResult<'a>> {
    if let Some(found) = attempt(candidate, pattern_root, buffer) {
        return Some(found);
    }

    candidate
        .children()
        .unwrap_or_default()
        .into_iter()
        .find_map(|child| first_match(child, pattern_root, buffer))
}

/// Runs one top-level attempt against `candidate` with a cleared buffer.
fn attempt<'a>(
    candidate: SyntaxNode<'a>,
    pattern_root: &PatternNode,
    buffer: &mut CaptureBuffer<'a>,
) -> Option<MatchResult<'a>> {
    buffer.clear();
    try_match(pattern_root, candidate, buffer).then(|| MatchResult {
        node: candidate.inner(),
        source: candidate.source(),
        captures: buffer.snapshot(),
    })
}

/// Checks whether `candidate` has the shape of `pattern`, pushing the node
/// bound to each wildcard onto `buffer` in pre-order.
///
/// Bindings pushed before a failing child are left in place; callers clear
/// the buffer before each independent attempt.
pub(super) fn try_match<'a>(
    pattern: &PatternNode,
    candidate: SyntaxNode<'a>,
    buffer: &mut CaptureBuffer<'a>,
) -> bool {
    match pattern {
        PatternNode::Wildcard => {
            buffer.push(candidate);
            true
        }
        PatternNode::Leaf { kind, value } => {
            candidate.kind() == *kind && candidate.value() == Some(value.as_str())
        }
        PatternNode::Branch { kind, children } => {
            if candidate.kind() != *kind || candidate.value().is_some() {
                return false;
            }
            let Some(candidate_children) = candidate.children() else {
                return false;
            };
            if candidate_children.len() != children.len() {
                return false;
            }

            children
                .iter()
                .zip(candidate_children)
                .all(|(pattern_child, candidate_child)| {
                    try_match(pattern_child, candidate_child, buffer)
                })
        }
    }
}
