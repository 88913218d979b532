use alloc::vec::Vec;

use quickcheck::{QuickCheck, TestResult};

use crate::Buf;

/// Property: initializing from any non-empty byte content reads back exactly
/// those bytes, with the length equal to the byte count.
#[test]
fn init_roundtrip_quickcheck() {
    fn prop(bytes: Vec<u8>) -> TestResult {
        if bytes.is_empty() {
            return TestResult::discard();
        }
        let buf = Buf::from_bytes(&bytes).unwrap();
        TestResult::from_bool(buf.as_bytes() == bytes.as_slice() && buf.len() == bytes.len())
    }

    QuickCheck::new().quickcheck(prop as fn(Vec<u8>) -> TestResult);
}

/// Property: reversing twice is the identity for any non-empty buffer.
#[test]
fn reverse_involution_quickcheck() {
    fn prop(bytes: Vec<u8>) -> TestResult {
        let Some(buf) = Buf::from_bytes(&bytes) else {
            return TestResult::discard();
        };
        let back = buf.reversed().unwrap().reversed().unwrap();
        TestResult::from_bool(back == buf)
    }

    QuickCheck::new().quickcheck(prop as fn(Vec<u8>) -> TestResult);
}

/// Property: appending via `write` at the current length behaves exactly
/// like slice concatenation, and the terminator tracks the new length.
#[test]
fn append_matches_concatenation_quickcheck() {
    fn prop(head: Vec<u8>, tail: Vec<u8>) -> TestResult {
        if head.is_empty() {
            return TestResult::discard();
        }
        let mut buf = Buf::from_bytes(&head).unwrap();
        if !buf.write(buf.len(), &tail) {
            return TestResult::failed();
        }
        let mut expected = head.clone();
        expected.extend_from_slice(&tail);
        TestResult::from_bool(
            buf.as_bytes() == expected.as_slice() && buf.raw_storage()[buf.len()] == 0,
        )
    }

    QuickCheck::new().quickcheck(prop as fn(Vec<u8>, Vec<u8>) -> TestResult);
}

/// Property: `repeated(n)` has length `len * n` and every window of the
/// source length equals the source at stride positions.
#[test]
fn repeat_length_quickcheck() {
    fn prop(bytes: Vec<u8>, count: u8) -> TestResult {
        let count = usize::from(count % 8);
        let Some(buf) = Buf::from_bytes(&bytes) else {
            return TestResult::discard();
        };
        match buf.repeated(count) {
            None => TestResult::from_bool(count == 0),
            Some(out) => {
                let ok = out.len() == buf.len() * count
                    && out.as_bytes().chunks(buf.len()).all(|c| c == buf.as_bytes());
                TestResult::from_bool(ok)
            }
        }
    }

    QuickCheck::new().quickcheck(prop as fn(Vec<u8>, u8) -> TestResult);
}

/// Property: `zero` empties without shrinking, and is idempotent.
#[test]
fn zero_keeps_capacity_quickcheck() {
    fn prop(bytes: Vec<u8>) -> TestResult {
        let Some(mut buf) = Buf::from_bytes(&bytes) else {
            return TestResult::discard();
        };
        let cap = buf.capacity();
        buf.zero();
        let first = buf.len() == 0 && buf.capacity() == cap;
        buf.zero();
        TestResult::from_bool(first && buf.len() == 0 && buf.capacity() == cap)
    }

    QuickCheck::new().quickcheck(prop as fn(Vec<u8>) -> TestResult);
}
