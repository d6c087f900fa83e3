//! CEI: 12-digit employer/construction registry number with one check digit.
//!
//! Display form is `00.000.00000/00`.
//!
//! The check value is `10 - s` where `s` is a digit sum modulo 10, so stems
//! with `s == 0` produce the value 10. [`cei_check_digit`] reports it as is
//! and [`validate_cei`] can never accept such a stem.

use rand::Rng;

use crate::checksum::{Reduction, Scheme};
use crate::clean::{clean_id, RawId};
use crate::error::Result;
use crate::layout::Layout;
use crate::IdKind;

/// Weights for the check digit, over digits 0 to 10.
pub const CEI_WEIGHTS: [u32; 11] = [7, 4, 1, 8, 5, 2, 1, 6, 3, 7, 4];

pub(crate) const SCHEME: Scheme = Scheme {
    kind: IdKind::Cei,
    weights: &[&CEI_WEIGHTS],
    reduction: Reduction::Mod100DigitSum,
    layout: Layout::new(&[(2, '.'), (3, '.'), (5, '/')]),
};

/// Takes a CEI and turns it into a string of only digits.
pub fn clean_cei(cei: impl RawId) -> String {
    clean_id(cei)
}

/// Checks whether a CEI is valid.
pub fn validate_cei(cei: impl RawId) -> bool {
    SCHEME.validate(cei)
}

/// Finds the check value for a CEI stem.
///
/// Only the first eleven digits are read. Returns 10 for stems that have no
/// valid check digit.
pub fn cei_check_digit(cei: impl RawId) -> Result<u8> {
    let checks = SCHEME.check_digits(cei)?;
    Ok(checks[0])
}

/// Applies `00.000.00000/00` punctuation.
pub fn format_cei(cei: impl RawId) -> String {
    SCHEME.format(cei)
}

/// Restores leading zeros to a CEI, optionally requiring the result to be valid.
pub fn pad_cei(cei: impl RawId, validate: bool) -> Result<String> {
    SCHEME.pad(cei, validate)
}

/// Creates a random valid CEI.
pub fn random_cei(formatted: bool) -> String {
    random_cei_with(&mut rand::rng(), formatted)
}

/// Creates a random valid CEI from the given RNG.
///
/// Stems without a valid check digit are drawn again.
pub fn random_cei_with<R: Rng + ?Sized>(rng: &mut R, formatted: bool) -> String {
    let cei = loop {
        let stem: u64 = rng.random_range(10_000_000_000..=99_999_999_999);
        let candidate = SCHEME.finish(&stem.to_string());
        if validate_cei(&candidate) {
            break candidate;
        }
    };

    if formatted {
        format_cei(&cei)
    } else {
        cei
    }
}
