//! Capture types for pattern matching.
//!
//! A capture is the haystack subtree bound to one wildcard of the pattern.

use std::ops::Range;

use crate::position::point_to_one_based;
use crate::tree::SyntaxNode;

/// A haystack node bound to a wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapturedNode<'a> {
    node: tree_sitter::Node<'a>,
    text: &'a str,
}

impl<'a> CapturedNode<'a> {
    pub(super) fn from_syntax(node: SyntaxNode<'a>) -> Self {
        Self {
            node: node.inner(),
            text: node.text(),
        }
    }

    /// Returns the captured AST node.
    #[must_use]
    pub const fn node(&self) -> tree_sitter::Node<'a> {
        self.node
    }

    /// Returns the grammar kind of the captured node.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.node.kind()
    }

    /// Returns the source text of the captured node.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Returns the byte range of the captured node.
    #[must_use]
    pub fn byte_range(&self) -> Range<usize> {
        self.node.byte_range()
    }

    /// Returns the one-based (line, column) where the capture starts.
    #[must_use]
    pub fn start_position(&self) -> (u32, u32) {
        point_to_one_based(self.node.start_position())
    }
}

/// Scratch list of wildcard bindings for one top-level match attempt.
///
/// The enumerator owns one buffer per search and clears it before every
/// attempt, so bindings left behind by a failed attempt never leak into the
/// next one.
#[derive(Debug, Default)]
pub(super) struct CaptureBuffer<'a> {
    nodes: Vec<SyntaxNode<'a>>,
}

impl<'a> CaptureBuffer<'a> {
    pub(super) fn clear(&mut self) {
        self.nodes.clear();
    }

    pub(super) fn push(&mut self, node: SyntaxNode<'a>) {
        self.nodes.push(node);
    }

    pub(super) fn snapshot(&self) -> Vec<CapturedNode<'a>> {
        self.nodes
            .iter()
            .copied()
            .map(CapturedNode::from_syntax)
            .collect()
    }

    #[cfg(test)]
    pub(super) fn len(&self) -> usize {
        self.nodes.len()
    }
}
