//! Golden vector verification.
//!
//! Every implementation of the subject wire format must decode these
//! vectors to the same fields and re-encode them byte-identically
//! (Ed25519 signing is deterministic).

use feechain::{FeeCalculator, SubjectChain};
use feechain_testkit::{all_vectors, verify_all_vectors, Ed25519Verifier};

#[test]
fn all_vectors_are_self_consistent() {
    verify_all_vectors().unwrap();
}

#[test]
fn vector_chain_fee_math() {
    let vectors = all_vectors();
    let deep = vectors
        .iter()
        .find(|v| v.name == "third_link")
        .expect("third_link vector exists");

    // third_link: 2.5% markup over (fixed 5.00 over (10% markup)).
    let chain = SubjectChain::decode(&deep.subject_b64, &Ed25519Verifier).unwrap();
    let calc = FeeCalculator::new(2).unwrap();

    // forward: 100 -> 102.5 -> 107.5 -> 118.25
    let gross = chain.gross(100, &calc).unwrap();
    assert!((gross - 118.25).abs() < 1e-9);
}

#[test]
fn unknown_kind_vector_decodes() {
    let vectors = all_vectors();
    let unknown = vectors.iter().find(|v| v.name == "unknown_kind").unwrap();

    let chain = SubjectChain::decode(&unknown.subject_b64, &Ed25519Verifier).unwrap();
    assert_eq!(chain.newest().kind, 7);
    assert_eq!(chain.newest().fee_kind(), None);
}
