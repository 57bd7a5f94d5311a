//! # Feechain Fees
//!
//! Gross/net fee propagation over a decoded subject chain.
//!
//! Each subject in a chain is one intermediary's markup or flat fee applied
//! on top of the previous subject's amount. Computing a gross amount replays
//! the fee stack forward from the most recent subject; computing a net
//! amount unwinds it starting from the root. Ordering is load-bearing:
//! percentage and fixed fees do not commute.
//!
//! ## Example
//!
//! ```
//! use feechain_core::{FeeKind, Subject, SUBJECT_VERSION};
//! use feechain_fees::{calculate_gross, calculate_net};
//!
//! let chain = vec![Subject {
//!     version: SUBJECT_VERSION,
//!     kind: FeeKind::Percentage.to_u8(),
//!     amount: 100, // 100/1000 = 10% markup
//!     public_key_pem: String::new(),
//!     previous: String::new(),
//! }];
//!
//! assert_eq!(calculate_gross(100, &chain, 2).unwrap(), 110.0);
//! assert_eq!(calculate_net(110, &chain, 2).unwrap(), 100.0);
//! ```

pub mod calculator;
pub mod error;

pub use calculator::{
    calculate_gross, calculate_net, FeeCalculator, RoundingMode, MAX_DECIMALS,
};
pub use error::FeeError;
