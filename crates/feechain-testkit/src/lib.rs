//! # Feechain Testkit
//!
//! Testing utilities for Feechain.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Ed25519 backends**: [`Keypair`] and [`Ed25519Verifier`] implementing
//!   the core `Signer`/`Verifier` capabilities for real signatures in tests
//! - **Fixtures**: [`TestFixture`] for quickly building signed subjects and
//!   whole chains
//! - **Generators**: Proptest strategies for property-based testing
//! - **Golden vectors**: Seeded, self-verifying vectors for
//!   cross-implementation checks
//!
//! ## Fixtures
//!
//! ```rust
//! use feechain_core::FeeKind;
//! use feechain_testkit::{Ed25519Verifier, TestFixture};
//!
//! let fixture = TestFixture::from_seed([0x42; 32]);
//! let encoded = fixture.make_chain(&[(FeeKind::Fixed, 500), (FeeKind::Percentage, 100)]);
//! let chain = feechain_core::decode_chain(&encoded, &Ed25519Verifier).unwrap();
//! assert_eq!(chain.len(), 2);
//! ```
//!
//! ## Golden Vectors
//!
//! Ed25519 signing is deterministic, so seeded vectors re-encode to
//! byte-identical transport strings:
//!
//! ```rust
//! feechain_testkit::vectors::verify_all_vectors().unwrap();
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{chain_with_signers, Ed25519Verifier, Keypair, TestFixture};
pub use generators::{subject_params, SubjectParams};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
