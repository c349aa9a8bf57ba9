//! Read-only queries over zero-terminated sequences.
//!
//! A sequence is any `&[C]`. Its content is everything before the first
//! terminator; if the slice holds no terminator, the end of the slice plays
//! that role, so none of these functions ever reads out of bounds.

use crate::unit::CharUnit;

/// Number of elements before the terminator.
#[must_use]
pub fn len<C: CharUnit>(s: &[C]) -> usize {
    s.iter().position(|c| c.is_terminator()).unwrap_or(s.len())
}

/// Like [`len`], but never looks past the first `max` elements.
pub(crate) fn len_within<C: CharUnit>(s: &[C], max: usize) -> usize {
    let limit = max.min(s.len());
    len(&s[..limit])
}

/// The content of `s`, without its terminator.
#[must_use]
pub fn content<C: CharUnit>(s: &[C]) -> &[C] {
    &s[..len(s)]
}

/// Element-wise equality up to and including the terminator.
///
/// ```
/// assert!(stringy::equal(b"abc\0junk", b"abc"));
/// assert!(!stringy::equal(b"abc", b"ab"));
/// ```
#[must_use]
pub fn equal<C: CharUnit>(a: &[C], b: &[C]) -> bool {
    let mut a = a.iter().copied();
    let mut b = b.iter().copied();
    loop {
        let x = a.next().unwrap_or(C::TERMINATOR);
        if x != b.next().unwrap_or(C::TERMINATOR) {
            return false;
        }
        if x.is_terminator() {
            return true;
        }
    }
}

/// `true` if `s` is non-empty and made only of ASCII digits.
///
/// Signs, decimal points and exponents are not accepted.
#[must_use]
pub fn is_numeric<C: CharUnit>(s: &[C]) -> bool {
    let s = content(s);
    !s.is_empty() && s.iter().all(|c| c.is_ascii_digit())
}

/// Storage needed to hold `s` and its terminator, in bytes.
#[must_use]
pub fn byte_size<C: CharUnit>(s: &[C]) -> usize {
    (len(s) + 1) * C::WIDTH
}
