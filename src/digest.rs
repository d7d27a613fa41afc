//! The digest pipeline.
//!
//! An input string runs through four stages:
//! 1. [`pack`]: character codes are folded into one wrapping `i64`
//! 2. [`digits`]: the packed integer's decimal digits are counted
//! 3. [`quadratic`]: the digits are cut into `a`, `b`, `c` and the roots of
//!    `ax² + bx + c = 0` are packed into a second integer
//! 4. [`finalize`]: both integers are mixed with an avalanche finalizer
//!
//! The output is not cryptographic. It is a reproducible fingerprint for
//! bucketing, deduplication keys and test-oracle checksums. Every call
//! returns owned values, so a [`QuadHasher`] can be shared across threads.

pub mod digits;
pub mod finalize;
pub mod pack;
pub mod quadratic;

use serde::Serialize;

use crate::config::{CodeUnit, DegeneratePolicy, DigestOptions};
use crate::error::DigestResult;

pub use digits::digit_count;
pub use finalize::{DIGEST_HEX_LEN, Digest, finalize, fmix64};
pub use pack::{pack_bytes, pack_chars, pack_codes};
pub use quadratic::{Chunks, Roots, isqrt, quadratic_mix, quadratic_roots, split_chunks};

/// Every intermediate value of one digest computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trace {
    /// Number of character codes fed to the packer.
    pub code_count: usize,
    pub packed: i64,
    pub digits: u32,
    pub chunks: Chunks,
    /// `None` when the leading coefficient was degenerate.
    pub roots: Option<Roots>,
    pub quad: i64,
    /// Whether the degenerate fallback replaced the quadratic step.
    pub fallback: bool,
    pub digest: Digest,
}

/// Configured digest engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuadHasher {
    options: DigestOptions,
}

impl QuadHasher {
    pub fn new(options: DigestOptions) -> Self {
        Self { options }
    }

    /// Engine that reports degenerate inputs as errors.
    pub fn strict() -> Self {
        Self::new(DigestOptions::strict())
    }

    pub fn options(&self) -> DigestOptions {
        self.options
    }

    /// Digest text, decoding it according to the configured code unit.
    pub fn digest(&self, input: &str) -> DigestResult<Digest> {
        self.trace(input).map(|trace| trace.digest)
    }

    /// Digest raw bytes. Bytes are always packed one code per byte.
    pub fn digest_bytes(&self, bytes: &[u8]) -> DigestResult<Digest> {
        self.run(bytes.len(), pack_bytes(bytes))
            .map(|trace| trace.digest)
    }

    /// Digest text and keep every intermediate stage.
    pub fn trace(&self, input: &str) -> DigestResult<Trace> {
        match self.options.code_unit {
            CodeUnit::Byte => self.run(input.len(), pack_bytes(input.as_bytes())),
            CodeUnit::Char => self.run(input.chars().count(), pack_chars(input)),
        }
    }

    fn run(&self, code_count: usize, packed: i64) -> DigestResult<Trace> {
        match self.options.degenerate {
            DegeneratePolicy::Fallback => Ok(fallback_trace(code_count, packed)),
            DegeneratePolicy::Reject => {
                let digits = digit_count(packed);
                let chunks = split_chunks(packed, digits);
                let roots = quadratic_roots(chunks)?;
                Ok(assemble(code_count, packed, digits, chunks, Some(roots)))
            }
        }
    }
}

/// Run the pipeline, mixing degenerate inputs with a quad integer of 0.
fn fallback_trace(code_count: usize, packed: i64) -> Trace {
    let digits = digit_count(packed);
    let chunks = split_chunks(packed, digits);

    let roots = match quadratic_roots(chunks) {
        Ok(roots) => Some(roots),
        Err(degenerate) => {
            log::trace!(
                target: "quadhash::digest",
                "Degenerate quadratic for packed={} ({}), mixing with quad=0",
                packed,
                degenerate
            );
            None
        }
    };
    assemble(code_count, packed, digits, chunks, roots)
}

fn assemble(
    code_count: usize,
    packed: i64,
    digits: u32,
    chunks: Chunks,
    roots: Option<Roots>,
) -> Trace {
    let quad = roots.map_or(0, Roots::pack);
    Trace {
        code_count,
        packed,
        digits,
        chunks,
        roots,
        quad,
        fallback: roots.is_none(),
        digest: Digest::new(finalize(packed, quad)),
    }
}

/// Digest text with the default options and render it as 16 hex digits.
///
/// Never fails: degenerate inputs use the fallback quad integer.
///
/// # Example
///
/// ```
/// use quadhash::hash;
///
/// assert_eq!(hash("hello"), "e85b753388878edf");
/// assert_eq!(hash(""), "0000000000000000");
/// assert_eq!(hash("hello").len(), 16);
/// ```
pub fn hash(input: &str) -> String {
    hash_bytes(input.as_bytes())
}

/// Digest raw bytes with the default options.
///
/// Shares the pipeline of `QuadHasher::default().digest_bytes`.
pub fn hash_bytes(bytes: &[u8]) -> String {
    fallback_trace(bytes.len(), pack_bytes(bytes))
        .digest
        .to_hex()
}

/// Digest text, failing on degenerate input instead of falling back.
pub fn try_hash(input: &str) -> DigestResult<Digest> {
    QuadHasher::strict().digest(input)
}
