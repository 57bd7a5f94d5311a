//! # Feechain
//!
//! The unified API for Feechain - signed subject certificates linked into
//! verifiable chains, with gross/net fee propagation over the chain.
//!
//! ## Overview
//!
//! A **subject** is a compact binary certificate representing one signed
//! transfer/ownership record. Each subject may embed the transport form of
//! an earlier subject in its `previous` field, producing a verifiable
//! ancestry from the newest certificate back to the root. Each link also
//! carries a fee - a per-mille markup or a fixed minor-unit amount - and the
//! fee calculator folds the chain to convert between net and gross amounts.
//!
//! ## Key Concepts
//!
//! - **Subject**: Immutable once signed. A transfer is a new subject.
//! - **Chain**: Newest first, root last. Every link's signature is
//!   re-verified during the walk.
//! - **Capabilities**: Signing and verification are injected; the core
//!   never implements cryptography.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use feechain::{FeeCalculator, FeeKind, SubjectBuilder, SubjectChain};
//!
//! // `signer` / `verifier` come from a backend such as
//! // feechain_testkit::{Keypair, Ed25519Verifier}.
//! let root = SubjectBuilder::new(pem.clone(), FeeKind::Percentage, 100)
//!     .sign(&signer)?;
//! let top = SubjectBuilder::new(pem, FeeKind::Fixed, 500)
//!     .previous(root)
//!     .sign(&signer)?;
//!
//! let chain = SubjectChain::decode(&top, &verifier)?;
//! let calc = FeeCalculator::new(2)?;
//! let gross = chain.gross(100, &calc)?;
//! let net = chain.net(gross as u64, &calc)?;
//! ```
//!
//! ## Re-exports
//!
//! - `feechain::core` - primitives (Subject, codec, chain walker)
//! - `feechain::fees` - fee propagation

pub mod chain;
pub mod error;

// Re-export component crates
pub use feechain_core as core;
pub use feechain_fees as fees;

// Re-export main types for convenience
pub use chain::SubjectChain;
pub use error::{FeechainError, Result};

pub use feechain_core::{
    decode_chain, decode_subject, encode_subject, encode_subject_base64, CapabilityError,
    ChainError, CodecError, FeeKind, Signer, Subject, SubjectBuilder, Verifier, MAX_CHAIN_DEPTH,
    MAX_KEY_LEN, MAX_SIG_LEN, SUBJECT_VERSION,
};
pub use feechain_fees::{calculate_gross, calculate_net, FeeCalculator, FeeError, RoundingMode};
