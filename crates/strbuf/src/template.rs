//! Mini-template formatting and scanning.
//!
//! [`format`] renders a `%`-template from an ordered sequence of typed
//! arguments; [`scan`] runs the inverse direction, slicing a source string
//! into output buffers along the literal spans of a `$`-wildcard template.
//! Neither is a printf/regex replacement: conversions are a fixed table and
//! the scan language has exactly one wildcard.

use crate::{
    buf::{Buf, SCRATCH_CAPACITY},
    radix::int_to_radix,
    search::find_literal,
};

/// One positional formatter argument.
///
/// A tagged union of the three shapes the formatter accepts; each
/// `%`-specifier matches on the tag it expects.
#[derive(Debug, Clone, Copy)]
pub enum Arg<'a> {
    /// Raw text for `%s`.
    Text(&'a [u8]),
    /// Buffer contents for `%$`.
    Buf(&'a Buf),
    /// Signed integer for `%d`, `%x` and `%X`.
    Int(i32),
}

/// Conversions backing the [`args!`](crate::args) macro, so call sites can
/// mix `&str`, byte slices, buffers and integers.
#[doc(hidden)]
pub trait ArgFrom<'a, T> {
    fn from_arg_value(value: T) -> Arg<'a>;
}

impl<'a> ArgFrom<'a, Arg<'a>> for Arg<'a> {
    fn from_arg_value(value: Arg<'a>) -> Arg<'a> {
        value
    }
}

impl<'a> ArgFrom<'a, &'a str> for Arg<'a> {
    fn from_arg_value(value: &'a str) -> Arg<'a> {
        Arg::Text(value.as_bytes())
    }
}

impl<'a> ArgFrom<'a, &'a [u8]> for Arg<'a> {
    fn from_arg_value(value: &'a [u8]) -> Arg<'a> {
        Arg::Text(value)
    }
}

impl<'a, const N: usize> ArgFrom<'a, &'a [u8; N]> for Arg<'a> {
    fn from_arg_value(value: &'a [u8; N]) -> Arg<'a> {
        Arg::Text(value)
    }
}

impl<'a> ArgFrom<'a, &'a Buf> for Arg<'a> {
    fn from_arg_value(value: &'a Buf) -> Arg<'a> {
        Arg::Buf(value)
    }
}

impl<'a> ArgFrom<'a, i32> for Arg<'a> {
    fn from_arg_value(value: i32) -> Arg<'a> {
        Arg::Int(value)
    }
}

/// Renders `template`, appending literal text verbatim and expanding each
/// `%`-specifier from the next positional argument.
///
/// Conversions: `%s` raw text, `%$` buffer contents, `%d` signed decimal,
/// `%x`/`%X` lower/uppercase hexadecimal, `%%` a literal percent. A trailing
/// `%` is literal. An unrecognized specifier, or one whose argument is
/// missing or of the wrong variant, passes through unexpanded and consumes
/// nothing.
///
/// An allocated `dest` is zeroed and reused; otherwise a fresh scratch
/// buffer backs the result.
#[must_use]
pub fn format(dest: Option<Buf>, template: &[u8], args: &[Arg<'_>]) -> Buf {
    let mut out = match dest {
        Some(mut buf) if buf.is_allocated() => {
            buf.zero();
            buf
        }
        _ => Buf::alloc_empty(SCRATCH_CAPACITY),
    };
    let mut fmt = template;
    let mut next = 0usize;
    while let Some(pos) = fmt.iter().position(|&b| b == b'%') {
        if pos > 0 {
            out.write(out.len(), &fmt[..pos]);
        }
        fmt = &fmt[pos..];
        if fmt.len() == 1 {
            // Trailing '%': appended as literal below.
            break;
        }
        match fmt[1] {
            b'%' => {
                out.write(out.len(), b"%");
            }
            b's' => match args.get(next) {
                Some(Arg::Text(text)) => {
                    next += 1;
                    if !text.is_empty() {
                        out.write(out.len(), text);
                    }
                }
                _ => {
                    out.write(out.len(), &fmt[..2]);
                }
            },
            b'$' => match args.get(next) {
                Some(Arg::Buf(src)) => {
                    next += 1;
                    if !src.is_empty() {
                        out.write(out.len(), src.as_bytes());
                    }
                }
                _ => {
                    out.write(out.len(), &fmt[..2]);
                }
            },
            spec @ (b'd' | b'x' | b'X') => match args.get(next) {
                Some(Arg::Int(value)) => {
                    next += 1;
                    let radix = if spec == b'd' { 10 } else { 16 };
                    if let Some(mut digits) = int_to_radix(*value, radix) {
                        if spec == b'X' {
                            digits.make_ascii_uppercase();
                        }
                        out.push(&digits);
                    }
                }
                _ => {
                    out.write(out.len(), &fmt[..2]);
                }
            },
            _ => {
                out.write(out.len(), &fmt[..2]);
            }
        }
        fmt = &fmt[2..];
    }
    if !fmt.is_empty() {
        out.write(out.len(), fmt);
    }
    out
}

/// Extracts literal-delimited fields of `source` into `outs` following the
/// `$`-wildcard `template`, returning the number of successful extractions.
///
/// The text before the first `$` is a literal prefix: the source cursor
/// advances past its first occurrence, or past the whole source when it is
/// missing. Each subsequent wildcard takes everything up to the next literal
/// span's occurrence (or the rest of the source); `$$` stands for a literal
/// `$` separator. An extraction counts only when its destination buffer is
/// allocated and source bytes remain; exhausting `outs` ends the scan.
///
/// Returns 0 when the source is unallocated or the template holds no
/// wildcard.
pub fn scan(source: &Buf, template: &[u8], outs: &mut [Buf]) -> usize {
    if !source.is_allocated() {
        return 0;
    }
    let Some(first) = template.iter().position(|&b| b == b'$') else {
        return 0;
    };
    let prefix = &template[..first];
    let mut fmt = &template[first..];
    let mut src = source.as_bytes();
    let mut sep_len = prefix.len();
    match find_literal(src, prefix) {
        Some(pos) => src = &src[pos + prefix.len()..],
        None => {
            src = &src[src.len()..];
            fmt = &fmt[fmt.len()..];
        }
    }

    let mut count = 0;
    let mut outs = outs.iter_mut();
    while let Some(pos) = fmt.iter().position(|&b| b == b'$') {
        fmt = &fmt[pos + 1..];
        let taken;
        if fmt.is_empty() {
            // Trailing wildcard swallows the remainder.
            taken = src.len();
        } else {
            let span_end = fmt
                .iter()
                .position(|&b| b == b'$')
                .unwrap_or(fmt.len());
            // An empty span means "$$": the separator is a literal '$' and
            // the second marker starts the next span.
            let sep: &[u8] = if span_end == 0 { b"$" } else { &fmt[..span_end] };
            match find_literal(src, sep) {
                Some(pos) => {
                    taken = pos;
                    fmt = &fmt[span_end..];
                }
                None => {
                    taken = src.len();
                    fmt = &fmt[fmt.len()..];
                }
            }
            sep_len = sep.len();
        }
        let Some(out) = outs.next() else {
            break;
        };
        if out.copy_prefix_bytes(src, taken) {
            count += 1;
        }
        src = &src[(taken + sep_len).min(src.len())..];
    }
    count
}

#[cfg(test)]
mod tests {
    use super::{Arg, format, scan};
    use crate::{args, buf::Buf};

    fn buf(bytes: &[u8]) -> Buf {
        Buf::from_bytes(bytes).unwrap()
    }

    fn outs<const N: usize>() -> [Buf; N] {
        core::array::from_fn(|_| Buf::with_capacity(0x20).unwrap())
    }

    #[test]
    fn format_numeric_conversions() {
        let out = format(None, b"%d == %x == %X", &args![255, 255, 255]);
        assert_eq!(out, b"255 == ff == FF");
    }

    #[test]
    fn format_text_and_buffer_args() {
        let name = buf(b"buffer");
        let out = format(None, b"<%s|%$>", &args!["text", &name]);
        assert_eq!(out, b"<text|buffer>");
    }

    #[test]
    fn format_literal_percent_and_trailing_percent() {
        assert_eq!(format(None, b"100%% sure", &[]), b"100% sure");
        assert_eq!(format(None, b"dangling %", &[]), b"dangling %");
    }

    #[test]
    fn format_unrecognized_specifier_passes_through() {
        let out = format(None, b"a %q b %d", &args![7]);
        assert_eq!(out, b"a %q b 7");
    }

    #[test]
    fn format_missing_argument_leaves_specifier() {
        assert_eq!(format(None, b"x=%d", &[]), b"x=%d");
    }

    #[test]
    fn format_wrong_variant_consumes_nothing() {
        // %d sees a text argument: the specifier stays, the argument is
        // still available for the later %s.
        let out = format(None, b"%d and %s", &args!["seven"]);
        assert_eq!(out, b"%d and seven");
    }

    #[test]
    fn format_reuses_destination() {
        let dest = buf(b"previous contents");
        let out = format(Some(dest), b"%d", &args![42]);
        assert_eq!(out, b"42");

        let out = format(Some(Buf::new()), b"%d", &args![42]);
        assert_eq!(out, b"42");
    }

    #[test]
    fn format_empty_template_is_empty() {
        let out = format(None, b"", &[]);
        assert!(out.is_allocated());
        assert!(out.is_empty());
    }

    #[test]
    fn format_negative_values() {
        let out = format(None, b"%d", &args![-12]);
        assert_eq!(out, b"-12");
    }

    #[test]
    fn scan_three_fields() {
        let mut fields = outs::<3>();
        let n = scan(&buf(b"unko<>hoge<>fuga"), b"$<>$<>$", &mut fields);
        assert_eq!(n, 3);
        assert_eq!(fields[0], b"unko");
        assert_eq!(fields[1], b"hoge");
        assert_eq!(fields[2], b"fuga");
    }

    #[test]
    fn scan_middle_field_empty() {
        let mut fields = outs::<3>();
        let n = scan(&buf(b"unko<><>fuga"), b"$<>$<>$", &mut fields);
        assert_eq!(n, 3);
        assert_eq!(fields[0], b"unko");
        assert!(fields[1].is_empty());
        assert_eq!(fields[2], b"fuga");
    }

    #[test]
    fn scan_short_source_counts_partial() {
        let mut fields = outs::<3>();
        let n = scan(&buf(b"unko<>hoge"), b"$<>$<>$", &mut fields);
        assert_eq!(n, 2);
        assert_eq!(fields[0], b"unko");
        assert_eq!(fields[1], b"hoge");
        assert!(fields[2].is_empty());
    }

    #[test]
    fn scan_literal_prefix_positions_cursor() {
        let mut fields = outs::<1>();
        let n = scan(&buf(b"key=value"), b"key=$", &mut fields);
        assert_eq!(n, 1);
        assert_eq!(fields[0], b"value");
    }

    #[test]
    fn scan_missing_prefix_extracts_nothing() {
        let mut fields = outs::<1>();
        let n = scan(&buf(b"value"), b"key=$", &mut fields);
        assert_eq!(n, 0);
        assert!(fields[0].is_empty());
    }

    #[test]
    fn scan_doubled_marker_is_literal_dollar() {
        let mut fields = outs::<2>();
        let n = scan(&buf(b"a$b"), b"$$$", &mut fields);
        assert_eq!(n, 2);
        assert_eq!(fields[0], b"a");
        assert_eq!(fields[1], b"b");
    }

    #[test]
    fn scan_without_wildcard_is_zero() {
        let mut fields = outs::<1>();
        assert_eq!(scan(&buf(b"hello"), b"nodollar", &mut fields), 0);
    }

    #[test]
    fn scan_unallocated_source_is_zero() {
        let mut fields = outs::<1>();
        assert_eq!(scan(&Buf::new(), b"$", &mut fields), 0);
    }

    #[test]
    fn scan_unallocated_destination_is_not_counted() {
        let mut fields = [Buf::new(), Buf::with_capacity(8).unwrap()];
        let n = scan(&buf(b"a<>b"), b"$<>$", &mut fields);
        assert_eq!(n, 1);
        assert_eq!(fields[1], b"b");
    }

    #[test]
    fn scan_stops_when_outputs_run_out() {
        let mut fields = outs::<1>();
        let n = scan(&buf(b"a<>b<>c"), b"$<>$<>$", &mut fields);
        assert_eq!(n, 1);
        assert_eq!(fields[0], b"a");
    }

    #[test]
    fn arg_from_conversions() {
        let owned = buf(b"b");
        let built = args!["s", b"raw", &owned, 3, Arg::Int(4)];
        assert_eq!(built.len(), 5);
        assert!(matches!(built[0], Arg::Text(t) if t == b"s"));
        assert!(matches!(built[1], Arg::Text(t) if t == b"raw"));
        assert!(matches!(built[2], Arg::Buf(_)));
        assert!(matches!(built[3], Arg::Int(3)));
        assert!(matches!(built[4], Arg::Int(4)));
    }
}
