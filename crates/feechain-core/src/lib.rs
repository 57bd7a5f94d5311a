//! # Feechain Core
//!
//! Pure primitives for Feechain: subject certificates, the wire codec,
//! and chain reconstruction.
//!
//! This crate contains no I/O and no cryptography. Signing and verification
//! are injected capabilities; the codec only orchestrates them.
//!
//! ## Key Types
//!
//! - [`Subject`] - One decoded certificate: a signed transfer/ownership record
//! - [`SubjectBuilder`] - Constructs and signs a subject into wire bytes
//! - [`FeeKind`] - Discriminator for how `amount` feeds the fee arithmetic
//! - [`Signer`] / [`Verifier`] - Capability seams for cryptographic backends
//!
//! ## Wire Format
//!
//! All integers big-endian:
//!
//! ```text
//! sigLen(2) | signature(sigLen) | keyLen(1) | key(keyLen) |
//! version(1) | kind(1) | amount(8) | previous(remaining bytes)
//! ```
//!
//! Transport encoding is standard base64 of the entire sequence. The
//! signature covers exactly the bytes from `keyLen` onward (the Message).

pub mod chain;
pub mod crypto;
pub mod error;
pub mod pem;
pub mod subject;
pub mod wire;

pub use chain::{decode_chain, decode_chain_with_depth, MAX_CHAIN_DEPTH};
pub use crypto::{CapabilityError, Signer, Verifier};
pub use error::{ChainError, CodecError};
pub use pem::{armor, armor_bytes, strip_armor};
pub use subject::{FeeKind, Subject, SubjectBuilder, MAX_KEY_LEN, MAX_SIG_LEN, SUBJECT_VERSION};
pub use wire::{decode_subject, encode_subject, encode_subject_base64};
