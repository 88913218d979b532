//! Growable byte-buffer strings with explicit length/capacity bookkeeping.
//!
//! The central type is [`Buf`], an owned, contiguous byte sequence that
//! tracks its logical length separately from its allocated capacity and
//! keeps a trailing NUL terminator after every mutation. A buffer is either
//! *unallocated* (no backing storage, the default state) or *allocated*
//! (backing storage exists, possibly holding zero logical bytes). All
//! operations are byte-oriented; the crate performs no Unicode processing.
//!
//! On top of the buffer sit literal substring search ([`find_first`],
//! [`count_occurrences`], [`replace`]), delimiter tokenization
//! ([`next_token`], [`split_all`]), a radix converter ([`int_to_radix`]) and
//! a small `%`-template formatter and `$`-wildcard scanner ([`format`],
//! [`scan`]).
//!
//! Failures are quiet and encoded in return values: operations handed an
//! unallocated or empty input where a non-empty one is required return
//! `false`, `None` or a zero count, never a panic. The one fail-fast path is
//! memory exhaustion, which is left to the global allocator.
//!
//! ```rust
//! use strbuf::{Buf, find_first, split_all};
//!
//! let text = Buf::from_bytes(b"one two three").unwrap();
//! let two = Buf::from_bytes(b"two").unwrap();
//! assert_eq!(find_first(&text, &two), Some(4));
//!
//! let words = split_all(&text, b" ").unwrap();
//! assert_eq!(words.len(), 3);
//! assert_eq!(words[2], b"three");
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod buf;
mod radix;
mod search;
mod template;
mod token;

#[cfg(feature = "std")]
mod fs;

#[cfg(test)]
mod tests;

pub use buf::{Buf, CMP_ERR};
#[cfg(feature = "std")]
pub use fs::{FsError, WriteMode, read_contents, write_contents};
pub use radix::int_to_radix;
pub use search::{count_occurrences, find_first, replace};
pub use template::{Arg, ArgFrom, format, scan};
pub use token::{next_token, split_all};

#[doc(hidden)]
pub use alloc::vec;

/// Macro to build a `Vec<Arg>` from a heterogeneous list of formatter
/// arguments.
///
/// ```rust
/// use strbuf::{Buf, args, format};
///
/// let name = Buf::from_bytes(b"world").unwrap();
/// let out = format(None, b"hello %$, take %d", &args![&name, 5]);
/// assert_eq!(out, b"hello world, take 5");
/// ```
#[macro_export]
macro_rules! args {
    ( $( $elem:expr ),* $(,)? ) => {{
        use $crate::ArgFrom;
        $crate::vec![$($crate::Arg::from_arg_value($elem)),*]
    }};
}
