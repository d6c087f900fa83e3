//! Table-driven check digit engine.
//!
//! All four identifier families share one algorithm: a weighted sum over the
//! leading digits, reduced to a single check digit. Families with two check
//! digits compute the second one over the payload plus the first check digit,
//! so weight vector `i` is always `payload_len + i` entries long.

use crate::clean::{clean_id, digit_values, RawId};
use crate::error::{Error, Result};
use crate::layout::Layout;
use crate::IdKind;

/// How a weighted sum becomes a check digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Reduction {
    /// `sum % 11`; remainders 0 and 1 give 0, anything else `11 - r`.
    Mod11,
    /// `(sum % 11) % 10`.
    Mod11Mod10,
    /// `10 - ((tens + units of (sum % 100)) % 10)`.
    ///
    /// Yields 10 when the digit sum is a multiple of 10. No digit can match
    /// that, so such stems never validate.
    Mod100DigitSum,
}

impl Reduction {
    pub(crate) fn reduce(self, sum: u32) -> u8 {
        let value = match self {
            Reduction::Mod11 => match sum % 11 {
                0 | 1 => 0,
                r => 11 - r,
            },
            Reduction::Mod11Mod10 => (sum % 11) % 10,
            Reduction::Mod100DigitSum => {
                let low = sum % 100;
                10 - (low / 10 + low % 10) % 10
            }
        };
        value as u8
    }
}

/// Everything that distinguishes one identifier family from another.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Scheme {
    pub(crate) kind: IdKind,
    pub(crate) weights: &'static [&'static [u32]],
    pub(crate) reduction: Reduction,
    pub(crate) layout: Layout,
}

impl Scheme {
    /// Computes check digits for exactly `payload_len` digit values.
    fn compute(&self, payload: &[u8]) -> Vec<u8> {
        let mut digits = payload.to_vec();
        let mut checks = Vec::with_capacity(self.weights.len());

        for weights in self.weights {
            let sum: u32 = weights
                .iter()
                .zip(&digits)
                .map(|(w, d)| w * u32::from(*d))
                .sum();
            let check = self.reduction.reduce(sum);
            digits.push(check);
            checks.push(check);
        }

        checks
    }

    /// The leading `payload_len` digits of `id`.
    fn payload(&self, id: impl RawId) -> Result<String> {
        let mut digits = clean_id(id);
        let expected = self.kind.payload_len();

        if digits.len() < expected {
            return Err(Error::InsufficientLength {
                kind: self.kind,
                expected,
                actual: digits.len(),
            });
        }

        digits.truncate(expected);
        Ok(digits)
    }

    /// Check digits for the leading `payload_len` digits of `id`.
    ///
    /// Digits past the payload are ignored.
    pub(crate) fn check_digits(&self, id: impl RawId) -> Result<Vec<u8>> {
        let payload = self.payload(id)?;
        Ok(self.compute(&digit_values(&payload)))
    }

    pub(crate) fn validate(&self, id: impl RawId) -> bool {
        let digits = clean_id(id);
        if digits.len() != self.kind.length() {
            return false;
        }

        let values = digit_values(&digits);
        let (payload, provided) = values.split_at(self.kind.payload_len());

        self.compute(payload)
            .iter()
            .zip(provided)
            .all(|(computed, given)| computed == given)
    }

    /// Payload digits followed by their computed check digits.
    ///
    /// Digits past the payload are dropped.
    pub(crate) fn complete(&self, stem: impl RawId) -> Result<String> {
        let payload = self.payload(stem)?;
        Ok(self.finish(&payload))
    }

    /// Appends check digits to a clean payload of exactly `payload_len` digits.
    pub(crate) fn finish(&self, payload: &str) -> String {
        debug_assert_eq!(payload.len(), self.kind.payload_len());

        let mut out = String::with_capacity(self.kind.length());
        out.push_str(payload);
        for check in self.compute(&digit_values(payload)) {
            out.push_str(&check.to_string());
        }
        out
    }

    pub(crate) fn format(&self, id: impl RawId) -> String {
        self.layout.apply(&clean_id(id))
    }

    /// Restores leading zeros lost to integer storage.
    pub(crate) fn pad(&self, id: impl RawId, validate: bool) -> Result<String> {
        let digits = clean_id(id);
        if digits.is_empty() {
            return Err(Error::InvalidIdentifier {
                kind: self.kind,
                digits,
            });
        }

        let significant = digits.trim_start_matches('0');
        let padded = format!("{:0>width$}", significant, width = self.kind.length());

        if validate && !self.validate(&padded) {
            return Err(Error::InvalidIdentifier {
                kind: self.kind,
                digits: padded,
            });
        }

        Ok(padded)
    }
}
