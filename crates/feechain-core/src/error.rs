//! Error types for Feechain Core.

use thiserror::Error;

/// Errors that can occur while encoding or decoding a single subject.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The verifier returned false: the signature does not match the message.
    #[error("invalid signature in subject")]
    InvalidSignature,

    /// Raw public key exceeds the single-byte length prefix.
    #[error("public key is {len} bytes, exceeds the 255-byte wire limit")]
    KeyTooLarge { len: usize },

    /// Signature exceeds the two-byte length prefix.
    #[error("signature is {len} bytes, exceeds the 65535-byte wire limit")]
    SignatureTooLarge { len: usize },

    /// Buffer shorter than a declared length field, or a missing field.
    #[error("malformed subject: {0}")]
    MalformedSubject(String),

    /// Transport or embedded base64 failed to decode.
    #[error("invalid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// The signer capability itself failed (opaque backend error).
    #[error("signer error: {0}")]
    Signer(String),

    /// The verifier capability itself failed, as opposed to returning false.
    #[error("verifier error: {0}")]
    Verifier(String),
}

/// Errors that can occur while walking a subject chain.
#[derive(Debug, Error)]
pub enum ChainError {
    /// A link failed to decode or verify. The walk aborts; no partial chain.
    #[error("chain link {index}: {source}")]
    Link {
        index: usize,
        #[source]
        source: CodecError,
    },

    /// The walk exceeded the maximum depth without reaching a root.
    #[error("chain exceeds maximum depth of {max}")]
    TooLong { max: usize },

    /// A `previous` reference loops back to an already-visited subject.
    #[error("cycle detected at chain link {index}")]
    Cycle { index: usize },
}
