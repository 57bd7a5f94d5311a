//! End-to-end tests: real Ed25519 signatures, full chain walks, fee math.

use feechain::{
    ChainError, CodecError, FeeCalculator, FeeKind, FeechainError, RoundingMode, SubjectBuilder,
    SubjectChain,
};
use feechain_testkit::{chain_with_signers, Ed25519Verifier, TestFixture};

#[test]
fn single_subject_roundtrip() {
    let fixture = TestFixture::from_seed([0x42; 32]);
    let encoded = fixture.make_subject(FeeKind::Percentage, 100, "");

    let chain = SubjectChain::decode(&encoded, &Ed25519Verifier).unwrap();
    assert_eq!(chain.len(), 1);
    assert_eq!(chain.newest().amount, 100);
    assert!(chain.root().is_root());
}

#[test]
fn builder_chains_compose() {
    let fixture = TestFixture::from_seed([0x42; 32]);
    let pem = fixture.keypair.public_key_pem();

    let root = SubjectBuilder::new(pem.clone(), FeeKind::Percentage, 100)
        .sign(&fixture.keypair)
        .unwrap();
    let top = SubjectBuilder::new(pem, FeeKind::Fixed, 500)
        .previous(root)
        .sign(&fixture.keypair)
        .unwrap();

    let chain = SubjectChain::decode(&top, &Ed25519Verifier).unwrap();
    assert_eq!(chain.len(), 2);
    assert_eq!(chain.newest().fee_kind(), Some(FeeKind::Fixed));
    assert_eq!(chain.root().fee_kind(), Some(FeeKind::Percentage));
}

#[test]
fn multi_party_chain_order_is_newest_first() {
    let alice = TestFixture::from_seed([0x01; 32]);
    let bob = TestFixture::from_seed([0x02; 32]);
    let carol = TestFixture::from_seed([0x03; 32]);

    let encoded = chain_with_signers(&[
        (&carol, FeeKind::Percentage, 50),
        (&bob, FeeKind::Fixed, 500),
        (&alice, FeeKind::Percentage, 100),
    ]);

    let chain = SubjectChain::decode(&encoded, &Ed25519Verifier).unwrap();
    let amounts: Vec<u64> = chain.subjects().iter().map(|s| s.amount).collect();
    assert_eq!(amounts, vec![50, 500, 100]);
}

#[test]
fn gross_and_net_over_a_real_chain() {
    let fixture = TestFixture::from_seed([0x42; 32]);
    // newest: 10% markup, root: fixed 5.00
    let encoded = fixture.make_chain(&[(FeeKind::Percentage, 100), (FeeKind::Fixed, 500)]);
    let chain = SubjectChain::decode(&encoded, &Ed25519Verifier).unwrap();
    let calc = FeeCalculator::new(2).unwrap();

    let gross = chain.gross(100, &calc).unwrap();
    assert_eq!(gross, 115.0);
    assert_eq!(chain.net(115, &calc).unwrap(), 100.0);
}

#[test]
fn symmetric_rounding_is_opt_in() {
    let fixture = TestFixture::from_seed([0x42; 32]);
    let encoded = fixture.make_chain(&[(FeeKind::Percentage, 1)]);
    let chain = SubjectChain::decode(&encoded, &Ed25519Verifier).unwrap();

    let compat = FeeCalculator::new(2).unwrap();
    assert_eq!(chain.gross(1, &compat).unwrap(), 1.001);

    let symmetric = FeeCalculator::new(2)
        .unwrap()
        .with_rounding(RoundingMode::Symmetric);
    assert_eq!(chain.gross(1, &symmetric).unwrap(), 1.0);
}

#[test]
fn tampered_link_aborts_the_walk() {
    use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

    // capture the rejected-link warning instead of polluting test output
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let fixture = TestFixture::from_seed([0x42; 32]);
    let root = fixture.make_subject(FeeKind::Percentage, 100, "");

    let mut root_bytes = BASE64.decode(&root).unwrap();
    root_bytes[2] ^= 0xff;
    let bad_root = BASE64.encode(root_bytes);

    let top = fixture.make_subject(FeeKind::Fixed, 500, &bad_root);

    let result = SubjectChain::decode(&top, &Ed25519Verifier);
    assert!(matches!(
        result,
        Err(FeechainError::Chain(ChainError::Link {
            index: 1,
            source: CodecError::InvalidSignature,
        }))
    ));
}

#[test]
fn depth_bound_is_enforced() {
    let fixture = TestFixture::from_seed([0x42; 32]);
    let links: Vec<(FeeKind, u64)> = (0..6).map(|i| (FeeKind::Percentage, i)).collect();
    let encoded = fixture.make_chain(&links);

    let result = SubjectChain::decode_with_depth(&encoded, &Ed25519Verifier, 4);
    assert!(matches!(
        result,
        Err(FeechainError::Chain(ChainError::TooLong { max: 4 }))
    ));

    let chain = SubjectChain::decode_with_depth(&encoded, &Ed25519Verifier, 6).unwrap();
    assert_eq!(chain.len(), 6);
}

#[test]
fn unknown_kind_decodes_but_fails_fee_math() {
    let fixture = TestFixture::from_seed([0x42; 32]);
    let pem = fixture.keypair.public_key_pem();
    let encoded = SubjectBuilder::new(pem, FeeKind::Percentage, 100)
        .raw_kind(9)
        .sign(&fixture.keypair)
        .unwrap();

    let chain = SubjectChain::decode(&encoded, &Ed25519Verifier).unwrap();
    assert_eq!(chain.newest().fee_kind(), None);

    let calc = FeeCalculator::new(2).unwrap();
    assert!(matches!(
        chain.gross(100, &calc),
        Err(FeechainError::Fee(_))
    ));
    assert!(matches!(chain.net(100, &calc), Err(FeechainError::Fee(_))));
}
