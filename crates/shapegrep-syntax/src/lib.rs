//! Tree-sitter powered structural search for the shapegrep toolchain.
//!
//! A search pattern is a fragment of ordinary source code in which `*` stands
//! for "any single syntax node". Patterns are compared with candidate code by
//! tree shape, so whitespace, line breaks and comments never affect whether a
//! match is found.
//!
//! - [`Pattern`] compiles pattern text and enumerates matches
//! - [`MatchResult`] records one matched node and the nodes bound to each
//!   wildcard, in wildcard order
//! - [`search`] derives first/last/count/occurs/range queries from the
//!   enumeration, for parsed trees and raw text alike
//! - [`fresh_name`] picks the identifier spliced in place of wildcards
//!
//! # Supported Languages
//!
//! - Rust (`.rs`)
//! - Python (`.py`, `.pyi`)
//! - TypeScript (`.ts`, `.tsx`, `.mts`, `.cts`)
//!
//! # Pattern Language
//!
//! - `*` matches any single AST node and captures it
//! - `\*` is a literal `*` token
//!
//! Matches nest: searching `a + *` in `a + (a + b)` finds the whole
//! expression first and then the inner `a + b`.
//!
//! # Example
//!
//! ```
//! use shapegrep_syntax::{Parser, Pattern, SupportedLanguage};
//!
//! let mut parser = Parser::new(SupportedLanguage::Python)?;
//! let source = parser.parse("total = a + (a + b)")?;
//!
//! let pattern = Pattern::compile("a + *", SupportedLanguage::Python)?;
//! let matches = pattern.find_all(&source);
//!
//! assert_eq!(matches.len(), 2);
//! assert_eq!(matches[1].capture(0)?.text(), "b");
//! # Ok::<(), shapegrep_syntax::SyntaxError>(())
//! ```

mod error;
mod identity;
mod language;
mod matcher;
mod naming;
mod parser;
mod pattern;
mod position;
pub mod search;
mod tree;

pub use error::SyntaxError;
pub use language::{LanguageParseError, SupportedLanguage};
pub use matcher::{CapturedNode, MatchResult, Matcher};
pub use naming::fresh_name;
pub use parser::{ParseResult, Parser, SyntaxErrorInfo};
pub use pattern::{Pattern, PatternNode};
