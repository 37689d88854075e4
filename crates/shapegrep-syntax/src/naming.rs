//! Collision-free identifiers for splicing into pattern text.
//!
//! Wildcard markers are not valid syntax in any supported grammar, so the
//! compiler replaces each one with an ordinary identifier before parsing.
//! That identifier must not already appear in the pattern, otherwise a real
//! name in the pattern would be mistaken for a wildcard.

/// Returns an identifier built from `base` that does not occur in `text`.
///
/// `base` itself is returned when it is absent from `text`. Otherwise the
/// first of `base1`, `base2`, … that is absent is returned. The check is a
/// plain substring search rather than an identifier-boundary search, so
/// `hole1` is rejected for `"hole10"`.
///
/// # Examples
///
/// ```
/// use shapegrep_syntax::fresh_name;
///
/// assert_eq!(fresh_name("a + b", "hole"), "hole");
/// assert_eq!(fresh_name("hole + hole10", "hole"), "hole2");
/// ```
#[must_use]
pub fn fresh_name(text: &str, base: &str) -> String {
    if !text.contains(base) {
        return base.to_owned();
    }

    // Each rejected candidate occurs somewhere in `text`, and distinct
    // suffixes cannot all fit, so this terminates within `text.len() + 1`
    // attempts.
    let mut suffix = 1_usize;
    loop {
        let candidate = format!("{base}{suffix}");
        if !text.contains(candidate.as_str()) {
            return candidate;
        }
        suffix += 1;
    }
}
