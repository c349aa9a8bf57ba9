//! In-place tokenization on a single-element delimiter.
//!
//! [`Tokenizer`] owns its cursor, so each token stream is independent of every
//! other one. Splitting is destructive: every delimiter the tokenizer steps
//! over is overwritten with the terminator, leaving each token terminated
//! inside the caller's buffer.
//!
//! ```
//! let mut buf = *b"a,,b,c";
//! let tokens: Vec<&[u8]> = stringy::Tokenizer::new(&mut buf, b',').collect();
//! assert_eq!(tokens, [&b"a"[..], b"b", b"c"]);
//! assert_eq!(&buf, b"a\0\0b\0c");
//! ```

use core::iter::FusedIterator;

use crate::{
    terminated::{content, len},
    unit::CharUnit,
};

/// Cursor over a mutably borrowed, zero-terminated buffer.
#[derive(Debug)]
pub struct Tokenizer<'a, C: CharUnit> {
    /// Unread tail; `None` once exhausted.
    rest: Option<&'a mut [C]>,
    delim: C,
}

impl<'a, C: CharUnit> Tokenizer<'a, C> {
    /// Starts tokenizing `buf`, splitting on `delim`.
    #[must_use]
    pub fn new(buf: &'a mut [C], delim: C) -> Self {
        Self {
            rest: Some(buf),
            delim,
        }
    }

    /// A tokenizer with nothing left to read.
    #[must_use]
    pub fn exhausted(delim: C) -> Self {
        Self { rest: None, delim }
    }

    /// Drops the current cursor and starts over on `buf`.
    pub fn reset(&mut self, buf: &'a mut [C]) {
        self.rest = Some(buf);
    }

    /// The delimiter used by [`next_token`](Self::next_token).
    #[must_use]
    pub fn delimiter(&self) -> C {
        self.delim
    }

    /// Changes the default delimiter for subsequent calls.
    pub fn set_delimiter(&mut self, delim: C) {
        self.delim = delim;
    }

    /// `true` once the buffer has been fully consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.rest.is_none()
    }

    /// Next token on the default delimiter.
    pub fn next_token(&mut self) -> Option<&'a [C]> {
        self.next_token_with(self.delim)
    }

    /// Next token, splitting on `delim` for this call only.
    ///
    /// Leading delimiters are skipped. The delimiter run after the token is
    /// terminated and skipped, and the cursor moves past it. Returns `None`
    /// when nothing but delimiters remains.
    pub fn next_token_with(&mut self, delim: C) -> Option<&'a [C]> {
        let buf = skip_delimiters(self.rest.take()?, delim);
        let end = len(buf);

        let Some(at) = buf[..end].iter().position(|&c| c == delim) else {
            let token: &'a [C] = &buf[..end];
            return (!token.is_empty()).then_some(token);
        };

        let (token, tail) = buf.split_at_mut(at);
        let tail = skip_delimiters(tail, delim);
        if tail.first().is_some_and(|c| !c.is_terminator()) {
            self.rest = Some(tail);
        }

        let token: &'a [C] = token;
        Some(token)
    }

    /// The unread remainder after skipping leading default delimiters.
    pub fn remainder(&mut self) -> Option<&[C]> {
        self.remainder_with(self.delim)
    }

    /// Skips (and terminates) leading `delim` elements at the cursor and
    /// returns what is left, without consuming a token.
    pub fn remainder_with(&mut self, delim: C) -> Option<&[C]> {
        let rest = skip_delimiters(self.rest.take()?, delim);
        if len(rest) == 0 {
            return None;
        }
        self.rest = Some(rest);
        self.rest.as_deref().map(content)
    }

    /// Gives back the unread tail of the buffer, terminator and anything
    /// after it included.
    pub fn into_remainder(self) -> Option<&'a mut [C]> {
        self.rest
    }
}

/// An exhausted tokenizer whose delimiter is the terminator, so it never
/// splits until [`set_delimiter`](Tokenizer::set_delimiter) is called.
impl<C: CharUnit> Default for Tokenizer<'_, C> {
    fn default() -> Self {
        Self::exhausted(C::TERMINATOR)
    }
}

impl<'a, C: CharUnit> Iterator for Tokenizer<'a, C> {
    type Item = &'a [C];

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl<C: CharUnit> FusedIterator for Tokenizer<'_, C> {}

/// Overwrites the leading run of `delim` with terminators and returns the
/// slice after it.
fn skip_delimiters<C: CharUnit>(buf: &mut [C], delim: C) -> &mut [C] {
    let n = buf
        .iter()
        .take_while(|&&c| c == delim && !c.is_terminator())
        .count();
    buf[..n].fill(C::TERMINATOR);
    &mut buf[n..]
}

/// Number of maximal non-delimiter runs in `s`.
///
/// The input is not modified; an empty or `None` input has no tokens.
#[must_use]
pub fn count_tokens<C: CharUnit>(s: Option<&[C]>, delim: C) -> usize {
    content(s.unwrap_or_default())
        .split(|&c| c == delim)
        .filter(|run| !run.is_empty())
        .count()
}
