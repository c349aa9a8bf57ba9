//! Bounded copy, concatenate and insert.
//!
//! Each operation takes the destination slice plus an explicit `capacity` in
//! elements (terminator slot included), which must satisfy
//! `1 <= capacity <= dest.len()`. Nothing at or past `capacity` is ever
//! written, and on success the destination always holds a terminated
//! sequence shorter than `capacity`.
//!
//! A `None` source stands for "no value". It is accepted everywhere and never
//! treated as an error.
//!
//! Contract violations ([`StrError`]) leave the destination untouched.

use alloc::vec::Vec;

use crate::{
    error::{StrError, check_capacity},
    terminated::{content, len_within},
    unit::CharUnit,
};

/// Outcome of a bounded write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Written {
    /// Content length of the destination afterwards, terminator excluded.
    pub len: usize,
    /// Whether some content did not fit and was dropped.
    pub truncated: bool,
}

impl Written {
    pub(crate) fn new(len: usize, truncated: bool) -> Self {
        if truncated {
            tracing::trace!(len, "bounded write truncated");
        }
        Self { len, truncated }
    }
}

/// Panics unless `dest` is terminated at `w.len`, inside `capacity`.
#[cfg(any(test, feature = "fuzzing"))]
pub(crate) fn assert_terminated<C: CharUnit>(dest: &[C], w: Written, capacity: usize) {
    assert!(
        w.len < capacity && dest[w.len].is_terminator(),
        "Internal error: bounded write of {} elements is not terminated within capacity {capacity}",
        w.len
    );
}

/// Copies `source` into `dest`, keeping at most `capacity - 1` elements.
///
/// A `None` source leaves `dest` as the empty sequence.
///
/// ```
/// let mut buf = [0xffu8; 4];
/// let w = stringy::copy(&mut buf, Some(&b"hello"[..]), 4).unwrap();
/// assert_eq!(&buf, b"hel\0");
/// assert!(w.truncated);
/// ```
///
/// # Errors
///
/// [`StrError::ZeroCapacity`] or [`StrError::CapacityExceedsBuffer`] when the
/// capacity is unusable.
pub fn copy<C: CharUnit>(
    dest: &mut [C],
    source: Option<&[C]>,
    capacity: usize,
) -> Result<Written, StrError> {
    check_capacity(capacity, dest.len())?;

    let src = content(source.unwrap_or_default());
    let n = src.len().min(capacity - 1);
    dest[..n].copy_from_slice(&src[..n]);
    dest[n] = C::TERMINATOR;

    let w = Written::new(n, n < src.len());
    #[cfg(any(test, feature = "fuzzing"))]
    assert_terminated(dest, w, capacity);
    Ok(w)
}

/// Appends `source` to the sequence already in `dest`.
///
/// The existing content is measured within `capacity`. If it fills the whole
/// capacity, nothing is appended and the terminator lands in the last slot,
/// cutting the existing content to `capacity - 1` elements.
///
/// # Errors
///
/// Same as [`copy`].
pub fn concat<C: CharUnit>(
    dest: &mut [C],
    source: Option<&[C]>,
    capacity: usize,
) -> Result<Written, StrError> {
    check_capacity(capacity, dest.len())?;

    let start = len_within(dest, capacity);
    if start == capacity {
        dest[capacity - 1] = C::TERMINATOR;
        let w = Written::new(capacity - 1, true);
        #[cfg(any(test, feature = "fuzzing"))]
        assert_terminated(dest, w, capacity);
        return Ok(w);
    }

    let src = content(source.unwrap_or_default());
    let n = src.len().min(capacity - 1 - start);
    dest[start..start + n].copy_from_slice(&src[..n]);
    dest[start + n] = C::TERMINATOR;

    let w = Written::new(start + n, n < src.len());
    #[cfg(any(test, feature = "fuzzing"))]
    assert_terminated(dest, w, capacity);
    Ok(w)
}

/// Inserts `source` at element offset `pos`, shifting the tail right.
///
/// A `pos` past the current content appends. The combined result is cut to
/// `capacity - 1` elements.
///
/// ```
/// let mut buf = *b"ABC\0\0\0\0\0\0\0";
/// stringy::insert(&mut buf, Some(&b"X"[..]), 10, 1).unwrap();
/// assert!(stringy::equal(&buf, b"AXBC"));
/// ```
///
/// # Errors
///
/// [`StrError::InsertOutOfBounds`] when `pos >= capacity`,
/// [`StrError::AllocFailed`] if the staging buffer cannot be allocated, and
/// the capacity errors of [`copy`].
pub fn insert<C: CharUnit>(
    dest: &mut [C],
    source: Option<&[C]>,
    capacity: usize,
    pos: usize,
) -> Result<Written, StrError> {
    check_capacity(capacity, dest.len())?;
    if pos >= capacity {
        let err = StrError::InsertOutOfBounds { pos, capacity };
        tracing::debug!(%err, "rejected insert");
        return Err(err);
    }

    let existing = content(&dest[..capacity]);
    let src = content(source.unwrap_or_default());
    let split = pos.min(existing.len());
    let room = capacity - 1;

    let mut staged = Vec::new();
    staged
        .try_reserve_exact(capacity)
        .map_err(|_| StrError::AllocFailed { elements: capacity })?;
    staged.extend(
        existing[..split]
            .iter()
            .chain(src)
            .chain(&existing[split..])
            .copied()
            .take(room),
    );
    let truncated = existing.len() + src.len() > room;
    staged.push(C::TERMINATOR);

    let written = copy(dest, Some(&staged[..]), capacity)?;
    Ok(Written::new(written.len, truncated))
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::{terminated::equal, unit::encode_str};

    #[test]
    fn terminated_writes_pass_the_internal_check() {
        let mut d = *b"ab\0\xAA";
        assert_terminated(&d, Written { len: 2, truncated: false }, 4);
        let w = concat(&mut d, Some(&b"cdef"[..]), 4).unwrap();
        assert_terminated(&d, w, 4);
    }

    #[test]
    #[should_panic(expected = "not terminated within capacity 3")]
    fn internal_check_rejects_missing_terminator() {
        assert_terminated(b"abc", Written { len: 2, truncated: false }, 3);
    }

    /// Generates the same suite for every element width.
    macro_rules! width_suite {
        ($name:ident, $unit:ty) => {
            paste::paste! {
                mod [<$name _suite>] {
                    use super::*;

                    type U = $unit;

                    fn s(text: &str) -> Vec<U> {
                        encode_str(text)
                    }

                    fn buf(text: &str, len: usize) -> Vec<U> {
                        let mut v = s(text);
                        v.resize(len, 0xAA);
                        if text.chars().count() < len {
                            v[text.chars().count()] = 0;
                        }
                        v
                    }

                    #[test]
                    fn copy_fits() {
                        let mut d = buf("", 8);
                        let w = copy(&mut d, Some(&s("abc")[..]), 8).unwrap();
                        assert_eq!(w, Written { len: 3, truncated: false });
                        assert!(equal(&d, &s("abc")));
                        assert_eq!(d[3], 0);
                    }

                    #[test]
                    fn copy_truncates_to_capacity() {
                        let mut d = buf("", 8);
                        let w = copy(&mut d, Some(&s("abcdefgh")[..]), 4).unwrap();
                        assert_eq!(w, Written { len: 3, truncated: true });
                        assert_eq!(&d[..4], &s("abc\0")[..]);
                        // Untouched past capacity.
                        assert_eq!(d[4], 0xAA);
                    }

                    #[test]
                    fn copy_none_empties() {
                        let mut d = buf("xyz", 4);
                        copy(&mut d, None, 4).unwrap();
                        assert_eq!(d[0], 0);
                        assert!(equal(&d, &s("")));
                    }

                    #[test]
                    fn copy_capacity_one_only_terminates() {
                        let mut d = buf("xyz", 4);
                        let w = copy(&mut d, Some(&s("abc")[..]), 1).unwrap();
                        assert_eq!(w.len, 0);
                        assert_eq!(&d[..2], &s("\0y")[..]);
                    }

                    #[test]
                    fn copy_rejects_bad_capacity() {
                        let mut d = buf("xyz", 4);
                        assert_eq!(
                            copy(&mut d, Some(&s("a")[..]), 0),
                            Err(StrError::ZeroCapacity)
                        );
                        assert_eq!(
                            copy(&mut d, Some(&s("a")[..]), 5),
                            Err(StrError::CapacityExceedsBuffer { capacity: 5, len: 4 })
                        );
                        assert!(equal(&d, &s("xyz")));
                    }

                    #[test]
                    fn concat_appends() {
                        let mut d = buf("foo", 10);
                        let w = concat(&mut d, Some(&s("bar")[..]), 10).unwrap();
                        assert_eq!(w, Written { len: 6, truncated: false });
                        assert!(equal(&d, &s("foobar")));
                    }

                    #[test]
                    fn concat_uses_all_remaining_room() {
                        let mut d = buf("foo", 10);
                        let w = concat(&mut d, Some(&s("barbazqux")[..]), 10).unwrap();
                        assert_eq!(w, Written { len: 9, truncated: true });
                        assert_eq!(&d[..], &s("foobarbaz\0")[..]);
                    }

                    #[test]
                    fn concat_empty_and_none_keep_content() {
                        let mut d = buf("foo", 6);
                        concat(&mut d, Some(&s("")[..]), 6).unwrap();
                        assert!(equal(&d, &s("foo")));
                        concat(&mut d, None, 6).unwrap();
                        assert!(equal(&d, &s("foo")));
                    }

                    #[test]
                    fn concat_full_destination_is_terminated() {
                        let mut d = s("abcd");
                        let w = concat(&mut d, Some(&s("x")[..]), 4).unwrap();
                        assert_eq!(w, Written { len: 3, truncated: true });
                        assert_eq!(&d[..], &s("abc\0")[..]);
                    }

                    #[test]
                    fn concat_exactly_full() {
                        let mut d = buf("abc", 4);
                        let w = concat(&mut d, Some(&s("x")[..]), 4).unwrap();
                        assert_eq!(w, Written { len: 3, truncated: true });
                        assert!(equal(&d, &s("abc")));
                    }

                    #[test]
                    fn insert_in_middle() {
                        let mut d = buf("ABC", 10);
                        let w = insert(&mut d, Some(&s("X")[..]), 10, 1).unwrap();
                        assert_eq!(w, Written { len: 4, truncated: false });
                        assert!(equal(&d, &s("AXBC")));
                    }

                    #[test]
                    fn insert_at_front_and_past_end() {
                        let mut d = buf("ABC", 10);
                        insert(&mut d, Some(&s("<<")[..]), 10, 0).unwrap();
                        assert!(equal(&d, &s("<<ABC")));
                        insert(&mut d, Some(&s(">")[..]), 10, 8).unwrap();
                        assert!(equal(&d, &s("<<ABC>")));
                    }

                    #[test]
                    fn insert_truncates_tail() {
                        let mut d = buf("ABCDE", 6);
                        let w = insert(&mut d, Some(&s("xy")[..]), 6, 2).unwrap();
                        assert_eq!(w, Written { len: 5, truncated: true });
                        assert!(equal(&d, &s("ABxyC")));
                    }

                    #[test]
                    fn insert_out_of_bounds_is_noop() {
                        let mut d = buf("ABC", 6);
                        let before = d.clone();
                        assert_eq!(
                            insert(&mut d, Some(&s("X")[..]), 6, 6),
                            Err(StrError::InsertOutOfBounds { pos: 6, capacity: 6 })
                        );
                        assert_eq!(
                            insert(&mut d, Some(&s("X")[..]), 6, 9),
                            Err(StrError::InsertOutOfBounds { pos: 9, capacity: 6 })
                        );
                        assert_eq!(d, before);
                    }

                    #[test]
                    fn insert_none_keeps_content() {
                        let mut d = buf("ABC", 6);
                        let w = insert(&mut d, None, 6, 1).unwrap();
                        assert_eq!(w.len, 3);
                        assert!(equal(&d, &s("ABC")));
                    }
                }
            }
        };
    }

    width_suite!(narrow, u8);
    width_suite!(utf16, u16);
    width_suite!(utf32, u32);
}
