//! Bounded formatted output.

use core::fmt::{self, Write};

use crate::{
    bounded::Written,
    error::{StrError, check_capacity},
    unit::CharUnit,
};

/// `fmt::Write` sink that stops at the first character that does not fit.
struct BoundedWriter<'a, C: CharUnit> {
    buf: &'a mut [C],
    /// Elements written so far.
    pos: usize,
    truncated: bool,
}

impl<C: CharUnit> Write for BoundedWriter<'_, C> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut scratch = [C::TERMINATOR; 4];
        for c in s.chars() {
            let units = C::encode_char(c, &mut scratch);
            let end = self.pos + units.len();
            if end > self.buf.len() {
                self.truncated = true;
                // Abort formatting; the caller maps this back to success.
                return Err(fmt::Error);
            }
            self.buf[self.pos..end].copy_from_slice(units);
            self.pos = end;
        }
        Ok(())
    }
}

/// Renders `args` into `dest`, keeping at most `capacity - 1` elements, then
/// terminates.
///
/// Characters are encoded per unit width (UTF-8, UTF-16 or scalar values)
/// and never split: output stops before the first character that would not
/// fit.
///
/// ```
/// let mut buf = [0u8; 8];
/// let w = stringy::format_into(&mut buf, 8, format_args!("{}-{}", 12, "ab")).unwrap();
/// assert_eq!(w.len, 5);
/// assert!(stringy::equal(&buf, b"12-ab"));
/// ```
///
/// # Errors
///
/// The capacity errors of [`copy`](crate::copy), which leave `dest`
/// untouched. [`StrError::Format`] when a formatting implementation in `args`
/// fails; the output written up to that point stays in `dest`, terminated.
pub fn format_into<C: CharUnit>(
    dest: &mut [C],
    capacity: usize,
    args: fmt::Arguments<'_>,
) -> Result<Written, StrError> {
    check_capacity(capacity, dest.len())?;

    let mut w = BoundedWriter {
        buf: &mut dest[..capacity - 1],
        pos: 0,
        truncated: false,
    };
    let result = w.write_fmt(args);
    let (pos, truncated) = (w.pos, w.truncated);
    dest[pos] = C::TERMINATOR;

    // A full buffer also surfaces as `fmt::Error`; only other failures count.
    if result.is_err() && !truncated {
        let err = StrError::Format { written: pos };
        tracing::debug!(%err, "formatting failed");
        return Err(err);
    }

    let w = Written::new(pos, truncated);
    #[cfg(any(test, feature = "fuzzing"))]
    crate::bounded::assert_terminated(dest, w, capacity);
    Ok(w)
}
