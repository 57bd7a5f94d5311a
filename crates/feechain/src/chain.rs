//! `SubjectChain`: decoded ancestry plus fee math in one place.

use feechain_core::{decode_chain, decode_chain_with_depth, Subject, Verifier};
use feechain_fees::FeeCalculator;

use crate::error::{FeechainError, Result};

/// A fully decoded, fully verified subject chain.
///
/// Invariant: at least one subject; index 0 is the most recent, the last
/// element is the root. Construction goes through [`SubjectChain::decode`]
/// (which verifies every link) or [`SubjectChain::from_subjects`] for
/// chains decoded elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectChain {
    subjects: Vec<Subject>,
}

impl SubjectChain {
    /// Decode and verify a chain from the transport form of its newest
    /// subject.
    pub fn decode(subject_b64: &str, verifier: &impl Verifier) -> Result<Self> {
        let subjects = decode_chain(subject_b64, verifier)?;
        tracing::debug!("decoded subject chain of {} links", subjects.len());
        Ok(Self { subjects })
    }

    /// Decode with a caller-chosen depth bound.
    pub fn decode_with_depth(
        subject_b64: &str,
        verifier: &impl Verifier,
        max_depth: usize,
    ) -> Result<Self> {
        let subjects = decode_chain_with_depth(subject_b64, verifier, max_depth)?;
        Ok(Self { subjects })
    }

    /// Wrap already-decoded subjects. The sequence must be newest-first and
    /// non-empty; signatures are not re-checked here.
    pub fn from_subjects(subjects: Vec<Subject>) -> Result<Self> {
        if subjects.is_empty() {
            return Err(FeechainError::InvalidOperation(
                "a subject chain must contain at least one subject".into(),
            ));
        }
        Ok(Self { subjects })
    }

    /// The decoded subjects, newest first.
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// The most recent subject.
    pub fn newest(&self) -> &Subject {
        &self.subjects[0]
    }

    /// The root subject (empty `previous`).
    pub fn root(&self) -> &Subject {
        self.subjects.last().expect("chain is never empty")
    }

    /// Number of links.
    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    /// Always false for a constructed chain; present for slice-like
    /// completeness.
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Gross amount for `net_amount` under this chain.
    pub fn gross(&self, net_amount: u64, calculator: &FeeCalculator) -> Result<f64> {
        Ok(calculator.gross(net_amount, &self.subjects)?)
    }

    /// Net amount for `gross_amount` under this chain.
    pub fn net(&self, gross_amount: u64, calculator: &FeeCalculator) -> Result<f64> {
        Ok(calculator.net(gross_amount, &self.subjects)?)
    }
}

impl IntoIterator for SubjectChain {
    type Item = Subject;
    type IntoIter = std::vec::IntoIter<Subject>;

    fn into_iter(self) -> Self::IntoIter {
        self.subjects.into_iter()
    }
}

impl<'a> IntoIterator for &'a SubjectChain {
    type Item = &'a Subject;
    type IntoIter = std::slice::Iter<'a, Subject>;

    fn into_iter(self) -> Self::IntoIter {
        self.subjects.iter()
    }
}
