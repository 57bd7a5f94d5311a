//! Fee-stack arithmetic: net -> gross forward, gross -> net backward.

use feechain_core::{FeeKind, Subject};

use crate::error::FeeError;

/// Largest supported decimal precision. `10^18` is the last power of ten
/// below `u64::MAX`, and minor-unit currencies do not go finer in practice.
pub const MAX_DECIMALS: u32 = 18;

/// Whether rounding applies to both directions or only to net.
///
/// The original behavior rounds only the net direction; `Symmetric` also
/// rounds gross results to the same precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingMode {
    /// Round only `net` results (compatible with the reference behavior).
    #[default]
    NetOnly,
    /// Round both `gross` and `net` results.
    Symmetric,
}

/// Compute the gross amount for a net amount under the given fee chain.
///
/// Walks the chain forward (index 0, the most recent subject, to the root),
/// accumulating each link's fee:
///
/// - percentage: `running += running * (amount / 1000)` (per-mille markup)
/// - fixed: `running += amount / 10^decimals` (minor-unit fee)
///
/// No rounding is applied in this direction; see [`FeeCalculator`] for the
/// symmetric-rounding variant.
pub fn calculate_gross(
    net_amount: u64,
    chain: &[Subject],
    decimals: u32,
) -> Result<f64, FeeError> {
    let scale = minor_unit_scale(decimals)?;

    let mut running = net_amount as f64;
    for (index, link) in chain.iter().enumerate() {
        running = apply_fee(running, link, index, scale)?;
    }
    Ok(running)
}

/// Compute the net amount for a gross amount under the given fee chain.
///
/// Walks the chain backward (root to most recent), inverting each step:
///
/// - percentage: `running /= 1 + amount / 1000`
/// - fixed: `running -= amount / 10^decimals`
///
/// The result is rounded to `decimals` fractional digits.
pub fn calculate_net(
    gross_amount: u64,
    chain: &[Subject],
    decimals: u32,
) -> Result<f64, FeeError> {
    let scale = minor_unit_scale(decimals)?;

    let mut running = gross_amount as f64;
    for (index, link) in chain.iter().enumerate().rev() {
        running = remove_fee(running, link, index, scale)?;
    }
    Ok(round_to(running, scale))
}

/// Fee calculator carrying precision and rounding configuration.
#[derive(Debug, Clone, Copy)]
pub struct FeeCalculator {
    decimals: u32,
    rounding: RoundingMode,
}

impl FeeCalculator {
    /// Create a calculator for a token/currency with the given decimal
    /// precision.
    pub fn new(decimals: u32) -> Result<Self, FeeError> {
        if decimals > MAX_DECIMALS {
            return Err(FeeError::DecimalsOutOfRange(decimals));
        }
        Ok(Self {
            decimals,
            rounding: RoundingMode::default(),
        })
    }

    /// Select a rounding mode.
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// The configured decimal precision.
    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Gross amount for `net_amount` under `chain`.
    pub fn gross(&self, net_amount: u64, chain: &[Subject]) -> Result<f64, FeeError> {
        let gross = calculate_gross(net_amount, chain, self.decimals)?;
        Ok(match self.rounding {
            RoundingMode::NetOnly => gross,
            RoundingMode::Symmetric => round_to(gross, scale_unchecked(self.decimals)),
        })
    }

    /// Net amount for `gross_amount` under `chain`.
    pub fn net(&self, gross_amount: u64, chain: &[Subject]) -> Result<f64, FeeError> {
        calculate_net(gross_amount, chain, self.decimals)
    }
}

fn apply_fee(running: f64, link: &Subject, index: usize, scale: f64) -> Result<f64, FeeError> {
    match link.fee_kind() {
        Some(FeeKind::Percentage) => Ok(running + running * (link.amount as f64 / 1000.0)),
        Some(FeeKind::Fixed) => Ok(running + link.amount as f64 / scale),
        None => Err(FeeError::InvalidCertificateType {
            index,
            kind: link.kind,
        }),
    }
}

fn remove_fee(running: f64, link: &Subject, index: usize, scale: f64) -> Result<f64, FeeError> {
    match link.fee_kind() {
        Some(FeeKind::Percentage) => Ok(running / (1.0 + link.amount as f64 / 1000.0)),
        Some(FeeKind::Fixed) => Ok(running - link.amount as f64 / scale),
        None => Err(FeeError::InvalidCertificateType {
            index,
            kind: link.kind,
        }),
    }
}

fn minor_unit_scale(decimals: u32) -> Result<f64, FeeError> {
    if decimals > MAX_DECIMALS {
        return Err(FeeError::DecimalsOutOfRange(decimals));
    }
    Ok(scale_unchecked(decimals))
}

fn scale_unchecked(decimals: u32) -> f64 {
    10f64.powi(decimals as i32)
}

fn round_to(value: f64, scale: f64) -> f64 {
    (value * scale).round() / scale
}
