//! ASCII case folding.

use crate::{terminated::content, unit::CharUnit};

/// Lowercases `A-Z` in place, up to the terminator.
pub fn to_lower<C: CharUnit>(s: &mut [C]) {
    for c in s.iter_mut().take_while(|c| !c.is_terminator()) {
        *c = c.to_ascii_lower();
    }
}

/// Offset of the first occurrence of `needle` in `haystack`, ignoring ASCII
/// case.
///
/// An empty needle matches at offset 0.
///
/// ```
/// assert_eq!(stringy::find_ci(b"Hello World", b"WORLD"), Some(6));
/// assert_eq!(stringy::find_ci(b"Hello", b"low"), None);
/// ```
#[must_use]
pub fn find_ci<C: CharUnit>(haystack: &[C], needle: &[C]) -> Option<usize> {
    let haystack = content(haystack);
    let needle = content(needle);
    if needle.is_empty() {
        return Some(0);
    }

    haystack.windows(needle.len()).position(|window| {
        window
            .iter()
            .zip(needle)
            .all(|(&a, &b)| a.eq_ignore_ascii_case(b))
    })
}
