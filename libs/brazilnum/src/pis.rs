//! PIS/PASEP: 11-digit worker registry number with one check digit.
//!
//! Display form is `000.0000.000-0`.

use rand::Rng;

use crate::checksum::{Reduction, Scheme};
use crate::clean::{clean_id, RawId};
use crate::error::Result;
use crate::layout::Layout;
use crate::IdKind;

/// Weights for the check digit, over digits 0 to 9.
pub const PIS_WEIGHTS: [u32; 10] = [3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

pub(crate) const SCHEME: Scheme = Scheme {
    kind: IdKind::Pis,
    weights: &[&PIS_WEIGHTS],
    reduction: Reduction::Mod11,
    layout: Layout::new(&[(3, '.'), (4, '.'), (3, '-')]),
};

/// Takes a PIS/PASEP and turns it into a string of only digits.
pub fn clean_pis(pis: impl RawId) -> String {
    clean_id(pis)
}

/// Checks whether a PIS/PASEP is valid.
pub fn validate_pis(pis: impl RawId) -> bool {
    SCHEME.validate(pis)
}

/// Finds the check digit that makes a PIS/PASEP valid.
///
/// Only the first ten digits are read.
pub fn pis_check_digit(pis: impl RawId) -> Result<u8> {
    let checks = SCHEME.check_digits(pis)?;
    Ok(checks[0])
}

/// Alias for [`pis_check_digit`]; PIS/PASEP has a single check digit.
pub fn pis_check_digits(pis: impl RawId) -> Result<u8> {
    pis_check_digit(pis)
}

/// Applies `000.0000.000-0` punctuation.
pub fn format_pis(pis: impl RawId) -> String {
    SCHEME.format(pis)
}

/// Restores leading zeros to a PIS/PASEP, optionally requiring the result to be valid.
pub fn pad_pis(pis: impl RawId, validate: bool) -> Result<String> {
    SCHEME.pad(pis, validate)
}

/// Creates a random valid PIS/PASEP.
pub fn random_pis(formatted: bool) -> String {
    random_pis_with(&mut rand::rng(), formatted)
}

/// Creates a random valid PIS/PASEP from the given RNG.
pub fn random_pis_with<R: Rng + ?Sized>(rng: &mut R, formatted: bool) -> String {
    let stem: u64 = rng.random_range(1_000_000_000..=9_999_999_999);
    let pis = SCHEME.finish(&stem.to_string());
    if formatted {
        format_pis(&pis)
    } else {
        pis
    }
}
