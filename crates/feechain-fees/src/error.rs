//! Error types for fee propagation.

use thiserror::Error;

/// Errors that can occur during gross/net calculation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeeError {
    /// A chain entry carries a kind outside {0 = percentage, 1 = fixed}.
    #[error("invalid fee kind {kind} in certificate at link {index}")]
    InvalidCertificateType { index: usize, kind: u8 },

    /// Decimal precision outside the supported range.
    #[error("decimal precision {0} exceeds supported maximum of 18")]
    DecimalsOutOfRange(u32),
}
