//! Digit packing: folds a sequence of character codes into one `i64`.
//!
//! Each code is appended in its own decimal slot: the accumulator is scaled
//! by `10^digits(code)` before the code is added, so `"ab"` (97, 98) packs to
//! `9798`. Inputs longer than a handful of characters overflow 64 bits; the
//! accumulator wraps in two's complement and the wrapped value is the one the
//! rest of the pipeline sees.

use super::digits::digit_count;

/// Decimal scale for one code slot: 10, 100 or 1000 for byte codes, and up
/// to 10^7 for Unicode scalar values.
#[inline]
pub fn slot_scale(code: u32) -> i64 {
    10i64.pow(digit_count(i64::from(code)))
}

/// Pack character codes into a single wrapping 64-bit integer.
///
/// An empty sequence packs to 0.
pub fn pack_codes<I>(codes: I) -> i64
where
    I: IntoIterator<Item = u32>,
{
    codes.into_iter().fold(0i64, |acc, code| {
        acc.wrapping_mul(slot_scale(code))
            .wrapping_add(i64::from(code))
    })
}

/// Pack the raw bytes of the input.
pub fn pack_bytes(bytes: &[u8]) -> i64 {
    pack_codes(bytes.iter().map(|&b| u32::from(b)))
}

/// Pack the Unicode scalar values of the input.
pub fn pack_chars(text: &str) -> i64 {
    pack_codes(text.chars().map(u32::from))
}
