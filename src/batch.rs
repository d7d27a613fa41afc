//! Rayon-based parallel digesting of many inputs.
//!
//! Inputs are independent, so each one is digested on whichever worker picks
//! it up. Results come back in input order, and a failing input only marks
//! its own entry.

use rayon::prelude::*;

use crate::digest::{Digest, QuadHasher};
use crate::error::DigestResult;

/// Outcome for one input of a batch.
#[derive(Debug)]
pub struct BatchEntry {
    /// Position of the input in the batch.
    pub index: usize,
    pub result: DigestResult<Digest>,
}

/// Digest every input in parallel, preserving input order.
pub fn digest_all<S>(hasher: &QuadHasher, inputs: &[S]) -> Vec<BatchEntry>
where
    S: AsRef<str> + Sync,
{
    let entries: Vec<BatchEntry> = inputs
        .par_iter()
        .enumerate()
        .map(|(index, input)| BatchEntry {
            index,
            result: hasher.digest(input.as_ref()),
        })
        .collect();

    let failed = entries.iter().filter(|entry| entry.result.is_err()).count();
    if failed > 0 {
        log::debug!(
            target: "quadhash::batch",
            "{} of {} inputs failed to digest",
            failed,
            entries.len()
        );
    }
    entries
}
