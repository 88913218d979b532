//! Delimiter-based tokenization.
//!
//! The cursor is caller-held and threaded through repeated [`next_token`]
//! calls. After the last token is taken the cursor lands on `len + 1`, one
//! past the text, so a trailing empty token after a final delimiter is
//! yielded exactly once and the following call returns `None`.

use alloc::vec::Vec;

use crate::{
    buf::{Buf, SCRATCH_CAPACITY},
    search::find_literal,
};

/// Extracts the next delimiter-separated token at or after `*cursor`,
/// advancing the cursor past the delimiter (or to the exhausted sentinel
/// `len + 1` when no delimiter remains).
///
/// Returns `None` when the text or delimiter is empty or the cursor has
/// passed the end. Delimiters are located with a direct literal scan; they
/// are typically short enough that a skip table buys nothing.
#[must_use]
pub fn next_token(text: &Buf, delimiter: &[u8], cursor: &mut usize) -> Option<Buf> {
    if text.is_empty() || delimiter.is_empty() || *cursor > text.len() {
        return None;
    }
    let rest = &text.as_bytes()[*cursor..];
    let mut token = Buf::alloc_empty(SCRATCH_CAPACITY);
    match find_literal(rest, delimiter) {
        Some(pos) => {
            token.write(0, &rest[..pos]);
            *cursor += pos + delimiter.len();
        }
        None => {
            token.write(0, rest);
            *cursor = text.len() + 1;
        }
    }
    Some(token)
}

/// Splits the whole text on `delimiter`, collecting every token in order,
/// trailing empty token included. Returns `None` — not an empty list — when
/// the text or delimiter is empty.
#[must_use]
pub fn split_all(text: &Buf, delimiter: &[u8]) -> Option<Vec<Buf>> {
    if text.is_empty() || delimiter.is_empty() {
        return None;
    }
    let mut cursor = 0;
    let mut tokens = Vec::new();
    while let Some(token) = next_token(text, delimiter, &mut cursor) {
        tokens.push(token);
    }
    Some(tokens)
}
