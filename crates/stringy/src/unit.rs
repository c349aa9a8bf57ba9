//! Character elements.
//!
//! Every primitive in this crate is generic over a [`CharUnit`]: a fixed-width
//! integer code unit with a zero terminator. Narrow strings use `u8`; wide
//! strings use the platform's `wchar_t` width, which is 16 bits on Windows and
//! 32 bits elsewhere.
//!
//! Units are treated as opaque code units. Nothing here decodes surrogate
//! pairs or multi-byte sequences, and only ASCII `A-Z` takes part in case
//! folding.

use core::fmt;

/// Narrow element: one byte.
pub type Narrow = u8;

/// Wide element, matching the platform `wchar_t`.
#[cfg(windows)]
pub type Wide = u16;

/// Wide element, matching the platform `wchar_t`.
#[cfg(not(windows))]
pub type Wide = u32;

/// A fixed-width code unit usable in a zero-terminated buffer.
pub trait CharUnit: Copy + Eq + Ord + Default + fmt::Debug + 'static {
    /// The zero-valued sentinel that ends a sequence.
    const TERMINATOR: Self;

    /// Storage size of one unit, in bytes.
    const WIDTH: usize;

    /// Lifts an ASCII byte into this unit type.
    fn from_ascii(b: u8) -> Self;

    /// Maps `A-Z` to `a-z`; every other value is returned unchanged.
    #[must_use]
    fn to_ascii_lower(self) -> Self;

    /// `true` for `0-9`.
    fn is_ascii_digit(self) -> bool;

    /// Encodes `c` into `out` and returns the written prefix.
    ///
    /// `out` is large enough for any scalar value in every encoding.
    fn encode_char(c: char, out: &mut [Self; 4]) -> &[Self];

    /// Writes a human-readable rendering of `units` for `Debug` output.
    ///
    /// # Errors
    ///
    /// Propagates formatter errors.
    fn fmt_units(units: &[Self], f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// `true` for the terminator.
    #[inline]
    fn is_terminator(self) -> bool {
        self == Self::TERMINATOR
    }

    /// ASCII case-insensitive comparison.
    #[inline]
    fn eq_ignore_ascii_case(self, other: Self) -> bool {
        self.to_ascii_lower() == other.to_ascii_lower()
    }
}

macro_rules! ascii_folding {
    ($ty:ty) => {
        const TERMINATOR: Self = 0;
        const WIDTH: usize = core::mem::size_of::<$ty>();

        #[inline]
        fn from_ascii(b: u8) -> Self {
            debug_assert!(b.is_ascii(), "non-ASCII byte {b:#x}");
            <$ty>::from(b)
        }

        #[inline]
        fn to_ascii_lower(self) -> Self {
            if (Self::from(b'A')..=Self::from(b'Z')).contains(&self) {
                self + 0x20
            } else {
                self
            }
        }

        #[inline]
        fn is_ascii_digit(self) -> bool {
            (Self::from(b'0')..=Self::from(b'9')).contains(&self)
        }
    };
}

impl CharUnit for u8 {
    ascii_folding!(u8);

    fn encode_char(c: char, out: &mut [Self; 4]) -> &[Self] {
        c.encode_utf8(out).as_bytes()
    }

    fn fmt_units(units: &[Self], f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(bstr::BStr::new(units), f)
    }
}

impl CharUnit for u16 {
    ascii_folding!(u16);

    fn encode_char(c: char, out: &mut [Self; 4]) -> &[Self] {
        let mut pair = [0u16; 2];
        let n = c.encode_utf16(&mut pair).len();
        out[..n].copy_from_slice(&pair[..n]);
        &out[..n]
    }

    fn fmt_units(units: &[Self], f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("L\"")?;
        for c in char::decode_utf16(units.iter().copied()) {
            let c = c.unwrap_or(char::REPLACEMENT_CHARACTER);
            fmt::Display::fmt(&c.escape_debug(), f)?;
        }
        f.write_str("\"")
    }
}

impl CharUnit for u32 {
    ascii_folding!(u32);

    fn encode_char(c: char, out: &mut [Self; 4]) -> &[Self] {
        out[0] = u32::from(c);
        &out[..1]
    }

    fn fmt_units(units: &[Self], f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("L\"")?;
        for &u in units {
            let c = char::from_u32(u).unwrap_or(char::REPLACEMENT_CHARACTER);
            fmt::Display::fmt(&c.escape_debug(), f)?;
        }
        f.write_str("\"")
    }
}

/// Encodes `s` into a freshly allocated vector of units, without a
/// terminator.
pub(crate) fn encode_str<C: CharUnit>(s: &str) -> alloc::vec::Vec<C> {
    let mut out = alloc::vec::Vec::with_capacity(s.len());
    let mut scratch = [C::TERMINATOR; 4];
    for c in s.chars() {
        out.extend_from_slice(C::encode_char(c, &mut scratch));
    }
    out
}
