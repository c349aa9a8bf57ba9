//! Heap-owned, terminated duplicates.

use alloc::{boxed::Box, vec::Vec};
use core::fmt;

use crate::{
    bounded::copy,
    error::StrError,
    terminated::{content, len},
    unit::{CharUnit, encode_str},
};

/// A terminated string owned by the caller.
///
/// The backing buffer always ends in a terminator and may hold spare,
/// zeroed slots after the content. Dropping the value releases it.
#[derive(Clone)]
pub struct TermString<C: CharUnit> {
    buf: Box<[C]>,
}

impl<C: CharUnit> TermString<C> {
    /// Encodes `s` into a new terminated buffer of exactly the right size.
    ///
    /// # Errors
    ///
    /// [`StrError::AllocFailed`] if the buffer cannot be allocated.
    pub fn try_from_str(s: &str) -> Result<Self, StrError> {
        duplicate(&encode_str::<C>(s), 0)
    }

    /// Content without the terminator.
    #[must_use]
    pub fn as_slice(&self) -> &[C] {
        content(&self.buf)
    }

    /// Content followed by its terminator.
    #[must_use]
    pub fn as_slice_with_terminator(&self) -> &[C] {
        let end = (self.len() + 1).min(self.buf.len());
        &self.buf[..end]
    }

    /// The whole backing buffer, for use as the destination of a bounded
    /// operation with [`capacity`](Self::capacity).
    ///
    /// Writes through this buffer must keep a terminator in it; every
    /// bounded operation in this crate does.
    pub fn as_mut_buffer(&mut self) -> &mut [C] {
        &mut self.buf
    }

    /// Element slots in the backing buffer, terminator slot included.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Content length in elements.
    #[must_use]
    pub fn len(&self) -> usize {
        len(&self.buf)
    }

    /// `true` when the content is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<C: CharUnit> AsRef<[C]> for TermString<C> {
    fn as_ref(&self) -> &[C] {
        self.as_slice_with_terminator()
    }
}

/// Compares content only; spare capacity is ignored.
impl<C: CharUnit> PartialEq for TermString<C> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<C: CharUnit> Eq for TermString<C> {}

impl<C: CharUnit> fmt::Debug for TermString<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        C::fmt_units(self.as_slice(), f)
    }
}

#[cfg(feature = "serde")]
impl<C: CharUnit + serde::Serialize> serde::Serialize for TermString<C> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

/// Copies `s` into a newly allocated, terminated buffer.
///
/// With `len_hint == 0` the length is measured; otherwise the buffer holds
/// `len_hint + 1` elements and at most `len_hint` of them are copied.
///
/// ```
/// let dup = stringy::duplicate(b"hello", 0).unwrap();
/// assert!(stringy::equal(dup.as_ref(), b"hello"));
/// assert_eq!(stringy::duplicate(b"hello", 3).unwrap().as_slice(), b"hel");
/// ```
///
/// # Errors
///
/// [`StrError::AllocFailed`] when the allocator refuses or the size
/// overflows. The process is never aborted.
pub fn duplicate<C: CharUnit>(s: &[C], len_hint: usize) -> Result<TermString<C>, StrError> {
    let n = if len_hint == 0 { len(s) } else { len_hint };
    let elements = n.checked_add(1).ok_or(StrError::AllocFailed { elements: n })?;

    let mut buf = Vec::new();
    buf.try_reserve_exact(elements).map_err(|_| {
        tracing::debug!(elements, "duplicate allocation failed");
        StrError::AllocFailed { elements }
    })?;
    buf.resize(elements, C::TERMINATOR);

    copy(&mut buf, Some(s), elements)?;
    Ok(TermString {
        buf: buf.into_boxed_slice(),
    })
}
