//! Integer-to-string conversion for radixes 2 through 36.

use crate::buf::{Buf, SCRATCH_CAPACITY};

/// Renders `value` in the given radix using digits `0-9` then lowercase
/// `a-z`. Returns `None` when the radix is outside `2..=36`.
///
/// A negative value takes a leading `-` only in radix 10, where the
/// magnitude is converted. In every other radix the sign-extended 64-bit
/// two's-complement pattern is rendered, mirroring an unsigned machine-word
/// conversion.
#[must_use]
pub fn int_to_radix(value: i32, radix: u32) -> Option<Buf> {
    if !(2..=36).contains(&radix) {
        return None;
    }
    let mut digits = Buf::alloc_empty(SCRATCH_CAPACITY);
    let mut negative = false;
    let mut magnitude = if value == 0 {
        digits.push_bytes(b"0");
        0
    } else if value < 0 {
        negative = true;
        if radix == 10 {
            u64::from(value.unsigned_abs())
        } else {
            #[allow(clippy::cast_sign_loss)]
            {
                i64::from(value) as u64
            }
        }
    } else {
        #[allow(clippy::cast_sign_loss)]
        {
            value as u64
        }
    };

    // Least-significant digit first; the final reverse puts the string in
    // reading order, with the sign appended last so it ends up leading.
    let base = u64::from(radix);
    while magnitude > 0 {
        #[allow(clippy::cast_possible_truncation)]
        let digit = (magnitude % base) as u8;
        magnitude /= base;
        let byte = if digit >= 10 {
            b'a' + digit - 10
        } else {
            b'0' + digit
        };
        digits.push_bytes(&[byte]);
    }
    if negative && radix == 10 {
        digits.push_bytes(b"-");
    }
    digits.reversed()
}
