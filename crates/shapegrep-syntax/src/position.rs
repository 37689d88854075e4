//! Display coordinates for match positions.
//!
//! Tree-sitter rows and columns count from zero; everything this crate shows
//! to people counts lines and columns from one.

/// Converts a zero-based Tree-sitter point into one-based (line, column).
///
/// Coordinates that do not fit in `u32` saturate.
#[must_use]
pub(crate) fn point_to_one_based(point: tree_sitter::Point) -> (u32, u32) {
    (one_based(point.row), one_based(point.column))
}

fn one_based(zero_based: usize) -> u32 {
    u32::try_from(zero_based.saturating_add(1)).unwrap_or(u32::MAX)
}
