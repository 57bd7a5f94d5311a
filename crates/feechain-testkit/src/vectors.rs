//! Golden vectors for cross-implementation verification.
//!
//! Ed25519 signing is deterministic, so a vector generated from a fixed
//! seed re-encodes to a byte-identical transport string on every platform.
//! Vectors are generated programmatically and verified for
//! self-consistency; serialize them with serde_json to export fixtures for
//! other implementations.

use serde::{Deserialize, Serialize};

use feechain_core::{decode_subject, encode_subject_base64, Subject};

use crate::fixtures::{Ed25519Verifier, Keypair};

/// A single golden vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldenVector {
    pub name: String,
    pub description: String,

    // Inputs
    pub signer_seed: String, // 32 bytes hex
    pub version: u8,
    pub kind: u8,
    pub amount: u64,
    pub previous: String, // transport form or empty

    // Derived outputs
    pub public_key_pem: String,
    pub subject_b64: String,
}

/// Generate a golden vector from inputs.
fn generate_vector(
    name: &str,
    description: &str,
    seed: [u8; 32],
    version: u8,
    kind: u8,
    amount: u64,
    previous: String,
) -> GoldenVector {
    let keypair = Keypair::from_seed(&seed);
    let subject = Subject {
        version,
        kind,
        amount,
        public_key_pem: keypair.public_key_pem(),
        previous: previous.clone(),
    };
    let subject_b64 =
        encode_subject_base64(&subject, &keypair).expect("golden vector subject encodes");

    GoldenVector {
        name: name.to_string(),
        description: description.to_string(),
        signer_seed: hex::encode(seed),
        version,
        kind,
        amount,
        previous,
        public_key_pem: keypair.public_key_pem(),
        subject_b64,
    }
}

/// Generate all golden vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    let root = generate_vector(
        "root_percentage",
        "Root subject with a 10% (per-mille 100) markup",
        [0x01; 32],
        1,
        0,
        100,
        String::new(),
    );
    let linked = generate_vector(
        "linked_fixed",
        "Fixed-fee subject referencing root_percentage",
        [0x02; 32],
        1,
        1,
        500,
        root.subject_b64.clone(),
    );
    let deep = generate_vector(
        "third_link",
        "Third link on top of linked_fixed, different signer",
        [0x03; 32],
        1,
        0,
        25,
        linked.subject_b64.clone(),
    );

    vec![
        root,
        linked,
        deep,
        generate_vector(
            "zero_amount",
            "Root subject with amount 0",
            [0x04; 32],
            1,
            0,
            0,
            String::new(),
        ),
        generate_vector(
            "max_amount",
            "Root subject with the maximum u64 amount",
            [0x05; 32],
            1,
            1,
            u64::MAX,
            String::new(),
        ),
        generate_vector(
            "unknown_kind",
            "Root subject with an unknown kind byte; must decode, must not fee-calculate",
            [0x06; 32],
            1,
            7,
            42,
            String::new(),
        ),
    ]
}

/// Verify every vector for self-consistency.
///
/// Checks that each vector decodes, that decoded fields match the inputs,
/// and that re-encoding with the seeded keypair reproduces the transport
/// string byte for byte.
pub fn verify_all_vectors() -> Result<(), String> {
    for vector in all_vectors() {
        let decoded = decode_subject(&vector.subject_b64, &Ed25519Verifier)
            .map_err(|e| format!("{}: decode failed: {e}", vector.name))?;

        if decoded.version != vector.version
            || decoded.kind != vector.kind
            || decoded.amount != vector.amount
            || decoded.previous != vector.previous
            || decoded.public_key_pem != vector.public_key_pem
        {
            return Err(format!("{}: decoded fields differ from inputs", vector.name));
        }

        let seed: [u8; 32] = hex::decode(&vector.signer_seed)
            .map_err(|e| format!("{}: bad seed hex: {e}", vector.name))?
            .try_into()
            .map_err(|_| format!("{}: seed is not 32 bytes", vector.name))?;
        let keypair = Keypair::from_seed(&seed);
        let re_encoded = encode_subject_base64(&decoded, &keypair)
            .map_err(|e| format!("{}: re-encode failed: {e}", vector.name))?;
        if re_encoded != vector.subject_b64 {
            return Err(format!("{}: re-encoding is not byte-identical", vector.name));
        }
    }
    Ok(())
}
