//! Error types for the unified Feechain API.

use feechain_core::{ChainError, CodecError};
use feechain_fees::FeeError;
use thiserror::Error;

/// Errors that can occur during Feechain operations.
#[derive(Debug, Error)]
pub enum FeechainError {
    /// Subject encode/decode error.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Chain walk error.
    #[error("chain error: {0}")]
    Chain(#[from] ChainError),

    /// Fee calculation error.
    #[error("fee error: {0}")]
    Fee(#[from] FeeError),

    /// Invalid operation.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}

/// Result type for Feechain operations.
pub type Result<T> = std::result::Result<T, FeechainError>;
