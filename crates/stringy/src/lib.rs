//! Bounded string primitives over zero-terminated buffers of narrow (`u8`)
//! or wide (`wchar_t`-sized) code units.
//!
//! Every operation is written once against [`CharUnit`] and works the same
//! for each element width. Buffers are plain slices owned by the caller;
//! capacities and positions are always counted in elements, never bytes.
//!
//! ```
//! use stringy::{Tokenizer, concat, copy, equal};
//!
//! let mut buf = [0u8; 16];
//! copy(&mut buf, Some(&b"a,b"[..]), 16)?;
//! concat(&mut buf, Some(&b",,c"[..]), 16)?;
//! assert!(equal(&buf, b"a,b,,c"));
//!
//! let parts: Vec<&[u8]> = Tokenizer::new(&mut buf, b',').collect();
//! assert_eq!(parts, [&b"a"[..], b"b", b"c"]);
//! # Ok::<(), stringy::StrError>(())
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod bounded;
mod case;
mod error;
mod format;
mod owned;
mod terminated;
mod tokenizer;
mod unit;

#[cfg(test)]
mod tests;

pub use bounded::{Written, concat, copy, insert};
pub use case::{find_ci, to_lower};
pub use error::StrError;
pub use format::format_into;
pub use owned::{TermString, duplicate};
pub use terminated::{byte_size, content, equal, is_numeric, len};
pub use tokenizer::{Tokenizer, count_tokens};
pub use unit::{CharUnit, Narrow, Wide};
