//! Subject: one signed transfer/ownership certificate.
//!
//! A subject is immutable once encoded. A transfer on top of an existing
//! certificate is a new subject whose `previous` field carries the old
//! subject's transport form, which is how chains arise.

use serde::{Deserialize, Serialize};

use crate::crypto::Signer;
use crate::error::CodecError;
use crate::wire;

/// The current subject schema version.
pub const SUBJECT_VERSION: u8 = 1;

/// Maximum raw public key length (single-byte wire prefix).
pub const MAX_KEY_LEN: usize = 255;

/// Maximum signature length (two-byte wire prefix).
pub const MAX_SIG_LEN: usize = 65535;

/// How a subject's `amount` feeds the fee arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum FeeKind {
    /// Per-mille markup: `amount / 1000` applied multiplicatively.
    Percentage = 0,
    /// Flat fee in minor units, scaled by `10^decimals`.
    Fixed = 1,
}

impl FeeKind {
    /// Convert to the wire discriminant.
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// Try to parse from the wire discriminant.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Percentage),
            1 => Some(Self::Fixed),
            _ => None,
        }
    }
}

/// A decoded subject certificate.
///
/// `kind` is kept as the raw wire byte: the codec accepts any discriminant
/// and only the fee arithmetic rejects unknown kinds, so that decoding stays
/// forward-compatible with future kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Schema version.
    pub version: u8,

    /// Raw fee-kind discriminant (see [`FeeKind`]).
    pub kind: u8,

    /// Fee/value magnitude. Big-endian u64 on the wire.
    pub amount: u64,

    /// The signer's public key in armored PEM form.
    pub public_key_pem: String,

    /// Transport (base64) form of the predecessor subject; empty for a root.
    pub previous: String,
}

impl Subject {
    /// Interpret the raw kind byte, if it names a known fee kind.
    pub fn fee_kind(&self) -> Option<FeeKind> {
        FeeKind::from_u8(self.kind)
    }

    /// Whether this subject terminates a chain.
    pub fn is_root(&self) -> bool {
        self.previous.is_empty()
    }
}

/// Builder for constructing and signing subjects.
pub struct SubjectBuilder {
    version: u8,
    kind: u8,
    amount: u64,
    public_key_pem: String,
    previous: String,
}

impl SubjectBuilder {
    /// Start building a subject for the given signer identity.
    pub fn new(public_key_pem: impl Into<String>, kind: FeeKind, amount: u64) -> Self {
        Self {
            version: SUBJECT_VERSION,
            kind: kind.to_u8(),
            amount,
            public_key_pem: public_key_pem.into(),
            previous: String::new(),
        }
    }

    /// Override the schema version.
    pub fn version(mut self, version: u8) -> Self {
        self.version = version;
        self
    }

    /// Set a raw kind discriminant (for kinds this crate does not know).
    pub fn raw_kind(mut self, kind: u8) -> Self {
        self.kind = kind;
        self
    }

    /// Link to a predecessor subject by its transport form.
    pub fn previous(mut self, previous_b64: impl Into<String>) -> Self {
        self.previous = previous_b64.into();
        self
    }

    /// Sign and encode, returning the transport (base64) form.
    pub fn sign(self, signer: &impl Signer) -> Result<String, CodecError> {
        let subject = Subject {
            version: self.version,
            kind: self.kind,
            amount: self.amount,
            public_key_pem: self.public_key_pem,
            previous: self.previous,
        };
        wire::encode_subject_base64(&subject, signer)
    }
}
