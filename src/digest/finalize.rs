//! Avalanche finalizer and hex rendering.
//!
//! The packed integer and the quad integer are combined with a golden-ratio
//! salt and pushed through the MurmurHash3 `fmix64` finalizer.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::DigestError;

/// 2^64 / φ, used to spread the quad integer before combining.
const GOLDEN_SALT: u64 = 0x9E37_79B9_7F4A_7C15;
const FMIX_MUL_1: u64 = 0xFF51_AFD7_ED55_8CCD;
const FMIX_MUL_2: u64 = 0xC4CE_B9FE_1A85_EC53;

/// Width of a rendered digest in hex digits.
pub const DIGEST_HEX_LEN: usize = 16;

/// MurmurHash3 64-bit finalizer.
#[inline]
pub const fn fmix64(mut h: u64) -> u64 {
    h ^= h >> 33;
    h = h.wrapping_mul(FMIX_MUL_1);
    h ^= h >> 33;
    h = h.wrapping_mul(FMIX_MUL_2);
    h ^= h >> 33;
    h
}

/// Mix the packed integer with the quad integer into the final 64-bit value.
#[inline]
pub const fn finalize(num: i64, quad: i64) -> u64 {
    fmix64((num as u64) ^ (quad as u64).wrapping_mul(GOLDEN_SALT))
}

/// A finished 64-bit digest.
///
/// Renders as exactly 16 lowercase hex digits, zero-padded, with no prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest(u64);

impl Digest {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Owned hex rendering of the digest.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl From<u64> for Digest {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Digest> for u64 {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl FromStr for Digest {
    type Err = DigestError;

    /// Parse exactly 16 hex digits (either case). Signs, prefixes and
    /// whitespace are rejected.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.len() != DIGEST_HEX_LEN || !text.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(DigestError::invalid_digest(text));
        }
        u64::from_str_radix(text, 16)
            .map(Self)
            .map_err(|_| DigestError::invalid_digest(text))
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
