//! Read-only view over Tree-sitter nodes used by compilation and matching.
//!
//! The view hides grammar extras (comments) and gives every node the same
//! three observations the matcher relies on: a kind tag, a value for
//! terminals, and an optional ordered child sequence.

use std::ops::Range;

/// A Tree-sitter node paired with the source text it was parsed from.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SyntaxNode<'a> {
    node: tree_sitter::Node<'a>,
    source: &'a str,
}

impl<'a> SyntaxNode<'a> {
    pub(crate) const fn new(node: tree_sitter::Node<'a>, source: &'a str) -> Self {
        Self { node, source }
    }

    pub(crate) const fn inner(self) -> tree_sitter::Node<'a> {
        self.node
    }

    pub(crate) const fn source(self) -> &'a str {
        self.source
    }

    /// Grammar kind; Tree-sitter interns these, so equal kinds share storage.
    pub(crate) fn kind(self) -> &'static str {
        self.node.kind()
    }

    pub(crate) fn byte_range(self) -> Range<usize> {
        self.node.byte_range()
    }

    pub(crate) fn text(self) -> &'a str {
        self.source.get(self.byte_range()).unwrap_or_default()
    }

    /// Source text of a terminal node, `None` for nodes with children.
    pub(crate) fn value(self) -> Option<&'a str> {
        if self.is_terminal() {
            Some(self.text())
        } else {
            None
        }
    }

    /// Non-extra children in order, `None` for terminal nodes.
    ///
    /// Tree-sitter does not tell an empty sequence apart from an absent one,
    /// so a node whose only children are comments reads as terminal.
    pub(crate) fn children(self) -> Option<Vec<Self>> {
        let mut cursor = self.node.walk();
        let children: Vec<_> = self
            .node
            .children(&mut cursor)
            .filter(|child| !child.is_extra())
            .map(|child| Self::new(child, self.source))
            .collect();

        if children.is_empty() {
            None
        } else {
            Some(children)
        }
    }

    pub(crate) fn named_children(self) -> Vec<Self> {
        let mut cursor = self.node.walk();
        self.node
            .named_children(&mut cursor)
            .filter(|child| !child.is_extra())
            .map(|child| Self::new(child, self.source))
            .collect()
    }

    pub(crate) fn child_by_field_name(self, field: &str) -> Option<Self> {
        self.node
            .child_by_field_name(field)
            .map(|child| Self::new(child, self.source))
    }

    fn is_terminal(self) -> bool {
        let mut cursor = self.node.walk();
        let mut children = self.node.children(&mut cursor);
        children.all(|child| child.is_extra())
    }
}
