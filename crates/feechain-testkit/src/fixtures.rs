//! Ed25519 capability backends and test fixtures.
//!
//! The core treats signing and verification as injected capabilities; this
//! module supplies a real Ed25519 implementation of both, plus helpers for
//! assembling signed subjects and chains in tests.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use ed25519_dalek::{Signature, Signer as _, SigningKey, Verifier as _, VerifyingKey};

use feechain_core::{
    encode_subject_base64, pem, CapabilityError, FeeKind, Signer, Subject, Verifier,
    SUBJECT_VERSION,
};

/// An Ed25519 keypair implementing the core [`Signer`] capability.
///
/// The private key stays inside the keypair; the codec only ever sees the
/// armored public key and base64 signatures.
#[derive(Clone)]
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    /// Generate a new random keypair.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            signing_key: SigningKey::generate(&mut rng),
        }
    }

    /// Create from a 32-byte seed. Deterministic: the same seed always
    /// yields the same keypair and, with Ed25519, the same signatures.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// Raw public key bytes.
    pub fn public_key_bytes(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// The public key in armored PEM form, as subjects carry it.
    pub fn public_key_pem(&self) -> String {
        pem::armor_bytes(&self.public_key_bytes())
    }
}

impl Signer for Keypair {
    fn sign(&self, message: &[u8]) -> Result<String, CapabilityError> {
        let signature = self.signing_key.sign(message);
        Ok(BASE64.encode(signature.to_bytes()))
    }
}

impl std::fmt::Debug for Keypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Keypair({})", hex::encode(self.public_key_bytes()))
    }
}

/// Ed25519 implementation of the core [`Verifier`] capability.
///
/// Returns `Ok(false)` for signatures that fail cryptographically (wrong
/// bytes, wrong length, wrong key) and `Err` only when the key material
/// itself cannot be interpreted.
pub struct Ed25519Verifier;

impl Verifier for Ed25519Verifier {
    fn verify(
        &self,
        message: &[u8],
        signature_b64: &str,
        public_key_pem: &str,
    ) -> Result<bool, CapabilityError> {
        let raw_key = BASE64
            .decode(pem::strip_armor(public_key_pem))
            .map_err(|e| CapabilityError::new(format!("bad public key base64: {e}")))?;
        let key_bytes: [u8; 32] = raw_key
            .try_into()
            .map_err(|_| CapabilityError::new("ed25519 public key must be 32 bytes"))?;
        let verifying_key = VerifyingKey::from_bytes(&key_bytes)
            .map_err(|e| CapabilityError::new(format!("bad ed25519 public key: {e}")))?;

        let Ok(sig_bytes) = BASE64.decode(signature_b64) else {
            return Ok(false);
        };
        let Ok(signature) = Signature::from_slice(&sig_bytes) else {
            return Ok(false);
        };

        Ok(verifying_key.verify(message, &signature).is_ok())
    }
}

/// A seeded identity plus helpers for building signed subjects.
pub struct TestFixture {
    pub keypair: Keypair,
}

impl TestFixture {
    /// Fixture with a random keypair.
    pub fn new() -> Self {
        Self {
            keypair: Keypair::generate(),
        }
    }

    /// Fixture with a deterministic keypair.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            keypair: Keypair::from_seed(&seed),
        }
    }

    /// Build and sign a single subject, returning its transport form.
    pub fn make_subject(&self, kind: FeeKind, amount: u64, previous: &str) -> String {
        let subject = Subject {
            version: SUBJECT_VERSION,
            kind: kind.to_u8(),
            amount,
            public_key_pem: self.keypair.public_key_pem(),
            previous: previous.to_string(),
        };
        encode_subject_base64(&subject, &self.keypair).expect("fixture subject encodes")
    }

    /// Build a chain signed entirely by this fixture.
    ///
    /// `links[0]` becomes the newest subject, the last entry the root.
    /// Returns the transport form of the newest subject.
    pub fn make_chain(&self, links: &[(FeeKind, u64)]) -> String {
        let mut previous = String::new();
        for &(kind, amount) in links.iter().rev() {
            previous = self.make_subject(kind, amount, &previous);
        }
        previous
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a chain where each link is signed by its own party.
///
/// `links[0]` becomes the newest subject. Panics if `links` is empty; test
/// chains always have at least one link.
pub fn chain_with_signers(links: &[(&TestFixture, FeeKind, u64)]) -> String {
    assert!(!links.is_empty(), "a chain needs at least one link");
    let mut previous = String::new();
    for &(fixture, kind, amount) in links.iter().rev() {
        previous = fixture.make_subject(kind, amount, &previous);
    }
    previous
}

#[cfg(test)]
mod tests {
    use super::*;
    use feechain_core::{decode_chain, decode_subject, CodecError};

    #[test]
    fn test_ed25519_roundtrip() {
        let fixture = TestFixture::from_seed([0x42; 32]);
        let encoded = fixture.make_subject(FeeKind::Percentage, 100, "");
        let decoded = decode_subject(&encoded, &Ed25519Verifier).unwrap();

        assert_eq!(decoded.amount, 100);
        assert_eq!(decoded.public_key_pem, fixture.keypair.public_key_pem());
        assert!(decoded.is_root());
    }

    #[test]
    fn test_wrong_key_rejected() {
        let alice = TestFixture::from_seed([0x01; 32]);
        let mallory = TestFixture::from_seed([0x02; 32]);

        // Subject claims alice's key but is signed by mallory.
        let subject = Subject {
            version: SUBJECT_VERSION,
            kind: 0,
            amount: 1,
            public_key_pem: alice.keypair.public_key_pem(),
            previous: String::new(),
        };
        let encoded = encode_subject_base64(&subject, &mallory.keypair).unwrap();

        let result = decode_subject(&encoded, &Ed25519Verifier);
        assert!(matches!(result, Err(CodecError::InvalidSignature)));
    }

    #[test]
    fn test_multi_party_chain() {
        let alice = TestFixture::from_seed([0x01; 32]);
        let bob = TestFixture::from_seed([0x02; 32]);
        let carol = TestFixture::from_seed([0x03; 32]);

        let encoded = chain_with_signers(&[
            (&carol, FeeKind::Fixed, 500),
            (&bob, FeeKind::Percentage, 100),
            (&alice, FeeKind::Percentage, 50),
        ]);

        let chain = decode_chain(&encoded, &Ed25519Verifier).unwrap();
        assert_eq!(chain.len(), 3);
        assert_eq!(chain[0].public_key_pem, carol.keypair.public_key_pem());
        assert_eq!(chain[2].public_key_pem, alice.keypair.public_key_pem());
    }

    #[test]
    fn test_verifier_rejects_garbage_key_material() {
        let result = Ed25519Verifier.verify(b"msg", "c2ln", "---not a key---");
        // strip_armor leaves "---not a key---" which is not valid base64
        assert!(result.is_err());
    }
}
