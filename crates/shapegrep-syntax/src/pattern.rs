//! Pattern compilation for structural code search.
//!
//! A pattern is ordinary source code for the target language in which `*`
//! stands for "any single subtree". Compilation splices a fresh identifier in
//! place of every `*`, parses the result, and converts the tree into an owned
//! [`PatternNode`] tree where those identifiers become
//! [`PatternNode::Wildcard`].
//!
//! # Pattern Syntax
//!
//! - `*` matches any single syntax node and captures it
//! - `\*` is a literal `*` token (for example multiplication)
//!
//! Whitespace and comments in the pattern are not significant.

use std::fmt;

use tracing::debug;

use crate::error::SyntaxError;
use crate::language::SupportedLanguage;
use crate::naming::fresh_name;
use crate::parser::Parser;
use crate::tree::SyntaxNode;

/// Character that marks a wildcard in pattern text.
const WILDCARD_MARKER: char = '*';
/// Character that makes the following marker literal.
const ESCAPE: char = '\\';
/// Base for the identifier spliced in place of each wildcard.
const PLACEHOLDER_BASE: &str = "wildcard";

/// A compiled structural pattern.
///
/// Patterns are immutable and can be reused across any number of searches.
/// Equality and hashing are structural and ignore which placeholder
/// identifier was used internally, so two patterns that differ only in
/// formatting compare equal.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    rewritten: String,
    placeholder: String,
    language: SupportedLanguage,
    root: PatternNode,
}

/// A node of a compiled pattern tree.
#[derive(Debug, Clone)]
pub enum PatternNode {
    /// Matches any single subtree and captures it.
    Wildcard,
    /// A terminal token that must match by kind and text.
    Leaf {
        /// Grammar kind of the token.
        kind: &'static str,
        /// Source text of the token.
        value: String,
    },
    /// An interior node that must match by kind and, pairwise, by children.
    Branch {
        /// Grammar kind of the node.
        kind: &'static str,
        /// Children in source order, comments excluded.
        children: Vec<PatternNode>,
    },
}

impl PatternNode {
    fn from_syntax(node: SyntaxNode<'_>, placeholder: &str) -> Self {
        match node.children() {
            None => {
                let value = node.text();
                if value == placeholder {
                    Self::Wildcard
                } else {
                    Self::Leaf {
                        kind: node.kind(),
                        value: value.to_owned(),
                    }
                }
            }
            Some(children) => Self::Branch {
                kind: node.kind(),
                children: children
                    .into_iter()
                    .map(|child| Self::from_syntax(child, placeholder))
                    .collect(),
            },
        }
    }

    /// Returns the grammar kind, or `None` for a wildcard.
    #[must_use]
    pub const fn kind(&self) -> Option<&'static str> {
        match self {
            Self::Wildcard => None,
            Self::Leaf { kind, .. } | Self::Branch { kind, .. } => Some(*kind),
        }
    }

    /// Returns whether this node is a wildcard.
    #[must_use]
    pub const fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard)
    }

    /// Counts the wildcards in this subtree.
    #[must_use]
    pub fn wildcard_count(&self) -> usize {
        match self {
            Self::Wildcard => 1,
            Self::Leaf { .. } => 0,
            Self::Branch { children, .. } => children.iter().map(Self::wildcard_count).sum(),
        }
    }
}

impl Pattern {
    /// Compiles a pattern string for the given language.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::PatternCompileError`] if the pattern is blank
    /// or the grammar cannot parse it once wildcards are substituted.
    ///
    /// # Examples
    ///
    /// ```
    /// use shapegrep_syntax::{Pattern, SupportedLanguage};
    ///
    /// let pattern = Pattern::compile("a + *", SupportedLanguage::Python)?;
    /// assert_eq!(pattern.wildcard_count(), 1);
    /// # Ok::<(), shapegrep_syntax::SyntaxError>(())
    /// ```
    pub fn compile(source: &str, language: SupportedLanguage) -> Result<Self, SyntaxError> {
        if source.trim().is_empty() {
            return Err(SyntaxError::pattern_compile(language, "pattern is empty"));
        }

        let placeholder = fresh_name(source, PLACEHOLDER_BASE);
        let rewritten = substitute_wildcards(source, &placeholder);

        let mut parser = Parser::new(language)?;
        let mut wrapped = false;
        let mut parsed = parser.parse(&rewritten)?;
        if parsed.has_errors() {
            parsed = parser.parse(&language.wrap_in_function(&rewritten))?;
            wrapped = true;
        }

        if parsed.has_errors() {
            return Err(SyntaxError::pattern_compile(
                language,
                "pattern contains syntax errors",
            ));
        }

        let root_node = locate_root(parsed.syntax_root(), wrapped);
        let root = PatternNode::from_syntax(root_node, &placeholder);
        debug!(
            %language,
            placeholder = %placeholder,
            root_kind = root.kind().unwrap_or("wildcard"),
            wildcards = root.wildcard_count(),
            "compiled pattern"
        );

        Ok(Self {
            source: source.to_owned(),
            rewritten,
            placeholder,
            language,
            root,
        })
    }

    /// Returns the pattern text as written.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the language this pattern is compiled for.
    #[must_use]
    pub const fn language(&self) -> SupportedLanguage {
        self.language
    }

    /// Returns the identifier substituted for wildcards before parsing.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Returns the root of the compiled pattern tree.
    #[must_use]
    pub const fn root(&self) -> &PatternNode {
        &self.root
    }

    /// Returns how many wildcards the pattern contains, which is also the
    /// number of captures in each of its matches.
    #[must_use]
    pub fn wildcard_count(&self) -> usize {
        self.root.wildcard_count()
    }

    /// Reconstructs pattern text that compiles back to an equal pattern.
    ///
    /// Wildcards are written as `*` and literal `*` tokens as `\*`.
    #[must_use]
    pub fn render(&self) -> String {
        let escaped = format!("{ESCAPE}{WILDCARD_MARKER}");
        let marker = WILDCARD_MARKER.to_string();
        self.rewritten
            .replace(WILDCARD_MARKER, &escaped)
            .replace(self.placeholder.as_str(), &marker)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Returns whether `c` can be part of an identifier.
fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Replaces every unescaped `*` with `placeholder`, padding with spaces where
/// the placeholder would otherwise fuse with a neighbouring identifier.
fn substitute_wildcards(source: &str, placeholder: &str) -> String {
    let mut out = String::with_capacity(source.len() + placeholder.len());
    let mut chars = source.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            ESCAPE if chars.peek() == Some(&WILDCARD_MARKER) => {
                chars.next();
                out.push(WILDCARD_MARKER);
            }
            WILDCARD_MARKER => {
                if out.chars().next_back().is_some_and(is_identifier_char) {
                    out.push(' ');
                }
                out.push_str(placeholder);
                if chars.peek().copied().is_some_and(is_identifier_char) {
                    out.push(' ');
                }
            }
            other => out.push(other),
        }
    }

    out
}

/// Finds the node the pattern is really about, skipping the file-level or
/// wrapper-function container and single-expression statements.
fn locate_root(root: SyntaxNode<'_>, wrapped: bool) -> SyntaxNode<'_> {
    let container = if wrapped {
        root.named_children()
            .into_iter()
            .next()
            .and_then(|function| function.child_by_field_name("body"))
            .unwrap_or(root)
    } else {
        root
    };

    let mut node = match container.named_children().as_slice() {
        [only] => *only,
        _ => container,
    };

    while node.kind() == "expression_statement" {
        let children = node.named_children();
        let [only] = children.as_slice() else {
            break;
        };
        node = *only;
    }

    node
}
