//! Literal substring search and replacement.
//!
//! [`find_first`] and [`count_occurrences`] use the quick-search variant of
//! Boyer-Moore-Horspool: a 256-entry bad-character table built over the
//! pattern, keyed on the haystack byte just past the current window. Both
//! advance by the table stride on every step, matches included, so the
//! stride — not an exhaustive per-offset scan — decides which occurrences
//! are seen. [`replace`] walks the text with a plain left-to-right literal
//! scan, the same scan the tokenizer uses for short delimiters.

use crate::buf::Buf;

/// Bad-character table: default stride is `m + 1`, pattern bytes stride to
/// their distance from the end.
fn skip_table(pattern: &[u8]) -> [usize; 256] {
    let m = pattern.len();
    let mut table = [m + 1; 256];
    for (i, &byte) in pattern.iter().enumerate() {
        table[usize::from(byte)] = m - i;
    }
    table
}

/// Byte just past the window. At exact end-of-text this is the buffer's
/// terminator, i.e. zero.
fn next_byte(haystack: &[u8], index: usize) -> u8 {
    haystack.get(index).copied().unwrap_or(0)
}

/// Offset of the first quick-search match of `pattern` in `text`, or `None`
/// when either operand is empty or no window matches. A pattern longer than
/// the text scans zero windows.
#[must_use]
pub fn find_first(text: &Buf, pattern: &Buf) -> Option<usize> {
    if text.is_empty() || pattern.is_empty() {
        return None;
    }
    let haystack = text.as_bytes();
    let needle = pattern.as_bytes();
    let (n, m) = (haystack.len(), needle.len());
    if m > n {
        return None;
    }
    let table = skip_table(needle);
    let mut i = 0;
    while i <= n - m {
        if &haystack[i..i + m] == needle {
            return Some(i);
        }
        i += table[usize::from(next_byte(haystack, i + m))];
    }
    None
}

/// Number of matches seen by the quick-search scan. The scan advances by the
/// stride after a match rather than restarting at every offset, so
/// overlapping occurrences are counted at the stride's resolution, not
/// exhaustively. Zero when either operand is empty.
#[must_use]
pub fn count_occurrences(text: &Buf, pattern: &Buf) -> usize {
    if text.is_empty() || pattern.is_empty() {
        return 0;
    }
    let haystack = text.as_bytes();
    let needle = pattern.as_bytes();
    let (n, m) = (haystack.len(), needle.len());
    if m > n {
        return 0;
    }
    let table = skip_table(needle);
    let mut count = 0;
    let mut i = 0;
    while i <= n - m {
        if &haystack[i..i + m] == needle {
            count += 1;
        }
        i += table[usize::from(next_byte(haystack, i + m))];
    }
    count
}

/// Leftmost occurrence of `needle` in `haystack` by direct scan. An empty
/// needle matches at offset zero.
pub(crate) fn find_literal(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Non-destructive replacement of every left-to-right, non-overlapping
/// occurrence of `pattern` in `text` with `replacement`.
///
/// Returns `None` when `text` or `pattern` is empty or `replacement` is
/// unallocated; an allocated-empty replacement deletes the matches. The
/// result may itself be allocated-empty when everything was removed.
#[must_use]
pub fn replace(text: &Buf, pattern: &Buf, replacement: &Buf) -> Option<Buf> {
    if text.is_empty() || pattern.is_empty() || !replacement.is_allocated() {
        return None;
    }
    let needle = pattern.as_bytes();
    let mut rest = text.as_bytes();
    let mut out = Buf::alloc_empty(text.len());
    while let Some(pos) = find_literal(rest, needle) {
        if pos > 0 {
            out.write(out.len(), &rest[..pos]);
        }
        if !replacement.is_empty() {
            out.write(out.len(), replacement.as_bytes());
        }
        rest = &rest[pos + needle.len()..];
    }
    if !rest.is_empty() {
        out.write(out.len(), rest);
    }
    Some(out)
}
