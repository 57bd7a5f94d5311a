//! Capability seams for cryptographic backends.
//!
//! The codec never implements cryptography. Callers inject a [`Signer`] at
//! encode time and a [`Verifier`] at decode time; the private key lives
//! inside the signer and is opaque to this crate. Backends may block (a
//! remote signer, an HSM); the core propagates their failures and never
//! retries.

use thiserror::Error;

/// Opaque failure raised by a signing or verification backend.
///
/// The core does not interpret backend internals; the message is carried
/// through for the caller.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct CapabilityError(pub String);

impl CapabilityError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Signing capability: produces a base64 signature over a message.
pub trait Signer {
    fn sign(&self, message: &[u8]) -> Result<String, CapabilityError>;
}

/// Verification capability.
///
/// Must return `Ok(false)` (not `Err`) for a cryptographically invalid
/// signature, so the codec can raise its own invalid-signature error.
/// `Err` is reserved for the backend itself failing and is surfaced
/// distinctly.
pub trait Verifier {
    fn verify(
        &self,
        message: &[u8],
        signature_b64: &str,
        public_key_pem: &str,
    ) -> Result<bool, CapabilityError>;
}

impl<F> Signer for F
where
    F: Fn(&[u8]) -> Result<String, CapabilityError>,
{
    fn sign(&self, message: &[u8]) -> Result<String, CapabilityError> {
        self(message)
    }
}

impl<F> Verifier for F
where
    F: Fn(&[u8], &str, &str) -> Result<bool, CapabilityError>,
{
    fn verify(
        &self,
        message: &[u8],
        signature_b64: &str,
        public_key_pem: &str,
    ) -> Result<bool, CapabilityError> {
        self(message, signature_b64, public_key_pem)
    }
}
