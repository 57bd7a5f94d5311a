//! Proptest generators for property-based testing.

use proptest::prelude::*;

use feechain_core::{FeeKind, Subject};

use crate::fixtures::Keypair;

/// Generate a keypair seed.
pub fn seed() -> impl Strategy<Value = [u8; 32]> {
    any::<[u8; 32]>()
}

/// Generate a random keypair.
pub fn keypair() -> impl Strategy<Value = Keypair> {
    seed().prop_map(|s| Keypair::from_seed(&s))
}

/// Generate a known fee kind.
pub fn fee_kind() -> impl Strategy<Value = FeeKind> {
    prop_oneof![Just(FeeKind::Percentage), Just(FeeKind::Fixed)]
}

/// Generate any kind discriminant, mostly known ones.
pub fn raw_kind() -> impl Strategy<Value = u8> {
    prop_oneof![
        4 => 0u8..=1u8,
        1 => 2u8..=u8::MAX,
    ]
}

/// Generate an amount across the full u64 range.
pub fn amount() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Generate a schema version byte.
pub fn version() -> impl Strategy<Value = u8> {
    any::<u8>()
}

/// Generate a decimal precision within the supported range.
pub fn decimals() -> impl Strategy<Value = u32> {
    0u32..=18u32
}

/// Generate fee links for a chain, newest first.
pub fn chain_links(max_len: usize) -> impl Strategy<Value = Vec<(FeeKind, u64)>> {
    // amounts kept small enough that fee math stays finite
    prop::collection::vec((fee_kind(), 0u64..=1_000_000u64), 1..=max_len)
}

/// Parameters for generating a signed subject.
#[derive(Debug, Clone)]
pub struct SubjectParams {
    pub seed: [u8; 32],
    pub version: u8,
    pub kind: u8,
    pub amount: u64,
    pub previous: String,
}

/// Strategy producing root-subject parameters.
pub fn subject_params() -> impl Strategy<Value = SubjectParams> {
    (seed(), version(), raw_kind(), amount()).prop_map(|(seed, version, kind, amount)| {
        SubjectParams {
            seed,
            version,
            kind,
            amount,
            previous: String::new(),
        }
    })
}

impl SubjectParams {
    /// The subject these parameters describe, armored key included.
    pub fn to_subject(&self) -> Subject {
        Subject {
            version: self.version,
            kind: self.kind,
            amount: self.amount,
            public_key_pem: Keypair::from_seed(&self.seed).public_key_pem(),
            previous: self.previous.clone(),
        }
    }

    /// The keypair implied by the seed.
    pub fn keypair(&self) -> Keypair {
        Keypair::from_seed(&self.seed)
    }
}

impl Arbitrary for SubjectParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        subject_params().boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Ed25519Verifier;
    use feechain_core::{decode_chain, decode_subject, encode_subject_base64};

    proptest! {
        #[test]
        fn prop_subject_roundtrip(params: SubjectParams) {
            let subject = params.to_subject();
            let encoded = encode_subject_base64(&subject, &params.keypair()).unwrap();
            let decoded = decode_subject(&encoded, &Ed25519Verifier).unwrap();
            prop_assert_eq!(decoded, subject);
        }

        #[test]
        fn prop_encoding_deterministic(params: SubjectParams) {
            let subject = params.to_subject();
            let a = encode_subject_base64(&subject, &params.keypair()).unwrap();
            let b = encode_subject_base64(&subject, &params.keypair()).unwrap();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn prop_chain_length_matches_links(
            seed in seed(),
            links in chain_links(6),
        ) {
            let fixture = crate::fixtures::TestFixture::from_seed(seed);
            let encoded = fixture.make_chain(&links);
            let chain = decode_chain(&encoded, &Ed25519Verifier).unwrap();
            prop_assert_eq!(chain.len(), links.len());
            for (subject, (kind, amount)) in chain.iter().zip(links.iter()) {
                prop_assert_eq!(subject.kind, kind.to_u8());
                prop_assert_eq!(subject.amount, *amount);
            }
        }

        #[test]
        fn prop_gross_net_inverse_for_percentage_chains(
            seed in seed(),
            amounts in prop::collection::vec(0u64..=900u64, 1..=4),
            net in 1u64..=1_000_000u64,
        ) {
            // Percentage-only chains invert cleanly up to rounding.
            let links: Vec<(FeeKind, u64)> =
                amounts.iter().map(|&a| (FeeKind::Percentage, a)).collect();
            let fixture = crate::fixtures::TestFixture::from_seed(seed);
            let encoded = fixture.make_chain(&links);
            let chain = decode_chain(&encoded, &Ed25519Verifier).unwrap();

            let gross = feechain_fees::calculate_gross(net, &chain, 2).unwrap();
            let recovered = feechain_fees::calculate_net(gross.round() as u64, &chain, 2).unwrap();
            // rounding gross to an integer before inverting can shift the
            // result by up to half a unit
            prop_assert!((recovered - net as f64).abs() <= 0.51);
        }
    }
}
