//! Chain reconstruction: follow `previous` back-references to the root.
//!
//! A chain is a linear list, never a tree: each subject carries at most one
//! predecessor, embedded as its transport form. Walking re-verifies every
//! link's signature; a chain is only as trustworthy as its weakest link.

use std::collections::HashSet;

use crate::crypto::Verifier;
use crate::error::ChainError;
use crate::subject::Subject;
use crate::wire::decode_subject;

/// Default maximum walk depth before the chain is rejected as too long.
///
/// The `previous` field is attacker-supplied; without a bound a crafted
/// reference loop would never terminate.
pub const MAX_CHAIN_DEPTH: usize = 256;

/// Decode a full subject chain, newest first.
///
/// Decodes the given subject, then repeatedly decodes the `previous` field
/// of the most recently decoded subject until a root (empty `previous`) is
/// reached. Every link's signature is verified independently.
///
/// The walk aborts on the first failing link with [`ChainError::Link`]; no
/// partial chain is ever returned. The result always has length >= 1.
pub fn decode_chain(subject_b64: &str, verifier: &impl Verifier) -> Result<Vec<Subject>, ChainError> {
    decode_chain_with_depth(subject_b64, verifier, MAX_CHAIN_DEPTH)
}

/// [`decode_chain`] with a caller-chosen depth bound.
pub fn decode_chain_with_depth(
    subject_b64: &str,
    verifier: &impl Verifier,
    max_depth: usize,
) -> Result<Vec<Subject>, ChainError> {
    let mut chain: Vec<Subject> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut current = subject_b64.to_string();

    loop {
        let index = chain.len();
        if index >= max_depth {
            return Err(ChainError::TooLong { max: max_depth });
        }
        if !seen.insert(current.clone()) {
            return Err(ChainError::Cycle { index });
        }

        let subject = decode_subject(&current, verifier).map_err(|source| {
            tracing::warn!("rejecting subject chain at link {index}: {source}");
            ChainError::Link { index, source }
        })?;

        let previous = subject.previous.clone();
        chain.push(subject);

        if previous.is_empty() {
            return Ok(chain);
        }
        current = previous;
    }
}
