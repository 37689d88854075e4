//! Structural identity of compiled patterns.
//!
//! Two patterns are the same pattern when their trees have the same shape,
//! whatever placeholder identifier each compilation happened to choose and
//! however the source text was formatted. This lets patterns serve as map
//! keys. [`MatchResult`](crate::MatchResult) keeps derived node
//! equality instead.

use std::hash::{Hash, Hasher};

use crate::pattern::{Pattern, PatternNode};

/// Fed to the hasher for every wildcard in place of a kind and value.
const WILDCARD_SENTINEL: u64 = 0x5748_4f4c_455f_5f5f;

impl PartialEq for PatternNode {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Wildcard, Self::Wildcard) => true,
            (
                Self::Leaf { kind, value },
                Self::Leaf {
                    kind: other_kind,
                    value: other_value,
                },
            ) => kind == other_kind && value == other_value,
            (
                Self::Branch { kind, children },
                Self::Branch {
                    kind: other_kind,
                    children: other_children,
                },
            ) => {
                kind == other_kind
                    && children.len() == other_children.len()
                    && children.iter().zip(other_children).all(|(a, b)| a == b)
            }
            _ => false,
        }
    }
}

impl Eq for PatternNode {}

impl Hash for PatternNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Wildcard => WILDCARD_SENTINEL.hash(state),
            Self::Leaf { kind, value } => {
                0_u8.hash(state);
                kind.hash(state);
                value.hash(state);
            }
            Self::Branch { kind, children } => {
                1_u8.hash(state);
                kind.hash(state);
                children.len().hash(state);
                for child in children {
                    child.hash(state);
                }
            }
        }
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.language() == other.language() && self.root() == other.root()
    }
}

impl Eq for Pattern {}

impl Hash for Pattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.language().hash(state);
        self.root().hash(state);
    }
}
