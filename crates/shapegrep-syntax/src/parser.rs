//! Tree-sitter parsing in tolerant and strict modes.
//!
//! Haystacks are parsed tolerantly: Tree-sitter recovers from malformed input
//! and still yields a tree, so matches ahead of a syntax error remain
//! reachable. Strict parsing turns any recovered error into a
//! [`SyntaxError::ParseError`].

use std::ops::Range;

use crate::error::SyntaxError;
use crate::language::SupportedLanguage;
use crate::position::point_to_one_based;
use crate::tree::SyntaxNode;

/// A parsed syntax tree together with the source it was parsed from.
///
/// A parse result may contain ERROR and MISSING nodes when it came from a
/// tolerant parse of malformed input.
#[derive(Debug)]
pub struct ParseResult {
    tree: tree_sitter::Tree,
    source: String,
    language: SupportedLanguage,
}

impl ParseResult {
    /// Returns the parsed syntax tree.
    #[must_use]
    pub const fn tree(&self) -> &tree_sitter::Tree {
        &self.tree
    }

    /// Returns the source code that was parsed.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the language of the parsed code.
    #[must_use]
    pub const fn language(&self) -> SupportedLanguage {
        self.language
    }

    /// Returns whether the tree contains recovered syntax errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }

    /// Collects every ERROR and MISSING node in document order.
    #[must_use]
    pub fn errors(&self) -> Vec<SyntaxErrorInfo> {
        let mut errors = Vec::new();
        collect_error_nodes(self.tree.root_node(), &self.source, &mut errors);
        errors
    }

    /// Returns the root node of the syntax tree.
    #[must_use]
    pub fn root_node(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }

    /// Counts the nodes a search visits: every node except comments and
    /// other grammar extras.
    #[must_use]
    pub fn node_count(&self) -> usize {
        count_nodes(self.syntax_root())
    }

    pub(crate) fn syntax_root(&self) -> SyntaxNode<'_> {
        SyntaxNode::new(self.tree.root_node(), &self.source)
    }
}

/// Location and description of a syntax error found during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxErrorInfo {
    /// Byte range of the error in the source.
    pub byte_range: Range<usize>,
    /// Line number (one-based) where the error starts.
    pub line: u32,
    /// Column number (one-based) where the error starts.
    pub column: u32,
    /// A snippet of the problematic source text.
    pub context: String,
    /// Human-readable description of the error.
    pub message: String,
}

impl SyntaxErrorInfo {
    fn from_node(node: tree_sitter::Node<'_>, source: &str) -> Self {
        let byte_range = node.byte_range();
        let context = source
            .get(byte_range.clone())
            .map(|text| {
                if text.chars().count() > 50 {
                    let truncated: String = text.chars().take(47).collect();
                    format!("{truncated}...")
                } else {
                    text.to_owned()
                }
            })
            .unwrap_or_default();

        let message = if node.is_missing() {
            format!("missing {}", node.kind())
        } else {
            "syntax error".to_owned()
        };

        let (line, column) = point_to_one_based(node.start_position());

        Self {
            byte_range,
            line,
            column,
            context,
            message,
        }
    }
}

/// Tree-sitter parser configured for a single language.
pub struct Parser {
    inner: tree_sitter::Parser,
    language: SupportedLanguage,
}

impl Parser {
    /// Creates a new parser for the given language.
    ///
    /// # Errors
    ///
    /// Returns an error if Tree-sitter rejects the grammar, which happens
    /// when the grammar was generated for an incompatible ABI version.
    pub fn new(language: SupportedLanguage) -> Result<Self, SyntaxError> {
        let mut inner = tree_sitter::Parser::new();
        inner
            .set_language(&language.grammar())
            .map_err(|e| SyntaxError::parser_init(language, e.to_string()))?;

        Ok(Self { inner, language })
    }

    /// Returns the language this parser is configured for.
    #[must_use]
    pub const fn language(&self) -> SupportedLanguage {
        self.language
    }

    /// Parses `source` tolerantly, keeping whatever structure was recovered.
    ///
    /// # Errors
    ///
    /// Returns an error only if Tree-sitter produced no tree at all, which
    /// indicates a parser configuration problem rather than bad input.
    pub fn parse(&mut self, source: &str) -> Result<ParseResult, SyntaxError> {
        let tree = self
            .inner
            .parse(source, None)
            .ok_or_else(|| SyntaxError::parse(self.language, "parser produced no tree"))?;

        Ok(ParseResult {
            tree,
            source: source.to_owned(),
            language: self.language,
        })
    }

    /// Parses `source` and rejects any input that needed error recovery.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::ParseError`] naming the first error location
    /// when the source is malformed.
    pub fn parse_strict(&mut self, source: &str) -> Result<ParseResult, SyntaxError> {
        let parsed = self.parse(source)?;
        let errors = parsed.errors();
        let Some(first) = errors.first() else {
            return Ok(parsed);
        };

        Err(SyntaxError::parse(
            self.language,
            format!(
                "{} at line {}, column {} ({} error(s) in total)",
                first.message,
                first.line,
                first.column,
                errors.len()
            ),
        ))
    }
}

fn collect_error_nodes(
    node: tree_sitter::Node<'_>,
    source: &str,
    errors: &mut Vec<SyntaxErrorInfo>,
) {
    if node.is_error() || node.is_missing() {
        errors.push(SyntaxErrorInfo::from_node(node, source));
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_error_nodes(child, source, errors);
    }
}

fn count_nodes(node: SyntaxNode<'_>) -> usize {
    node.children()
        .unwrap_or_default()
        .into_iter()
        .map(count_nodes)
        .sum::<usize>()
        + 1
}
