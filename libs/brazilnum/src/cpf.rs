//! CPF: 11-digit individual taxpayer number with two check digits.
//!
//! Display form is `000.000.000-00`.

use rand::Rng;

use crate::checksum::{Reduction, Scheme};
use crate::clean::{clean_id, RawId};
use crate::error::Result;
use crate::layout::Layout;
use crate::IdKind;

/// Weights for the first check digit, over digits 0 to 8.
pub const CPF_WEIGHTS: [u32; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

/// The same nine weights slid one position right for the second check digit,
/// so they cover digits 1 to 9 (the first check digit included).
const CPF_SECOND_WEIGHTS: [u32; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

pub(crate) const SCHEME: Scheme = Scheme {
    kind: IdKind::Cpf,
    weights: &[&CPF_WEIGHTS, &CPF_SECOND_WEIGHTS],
    reduction: Reduction::Mod11Mod10,
    layout: Layout::new(&[(3, '.'), (3, '.'), (3, '-')]),
};

/// Takes a CPF and turns it into a string of only digits.
pub fn clean_cpf(cpf: impl RawId) -> String {
    clean_id(cpf)
}

/// Checks whether a CPF is valid.
pub fn validate_cpf(cpf: impl RawId) -> bool {
    SCHEME.validate(cpf)
}

/// Finds the two check digits that make a CPF valid.
///
/// Only the first nine digits are read.
pub fn cpf_check_digits(cpf: impl RawId) -> Result<(u8, u8)> {
    let checks = SCHEME.check_digits(cpf)?;
    Ok((checks[0], checks[1]))
}

/// Applies `000.000.000-00` punctuation.
pub fn format_cpf(cpf: impl RawId) -> String {
    SCHEME.format(cpf)
}

/// Restores leading zeros to a CPF, optionally requiring the result to be valid.
pub fn pad_cpf(cpf: impl RawId, validate: bool) -> Result<String> {
    SCHEME.pad(cpf, validate)
}

/// Creates a random valid CPF.
pub fn random_cpf(formatted: bool) -> String {
    random_cpf_with(&mut rand::rng(), formatted)
}

/// Creates a random valid CPF from the given RNG.
pub fn random_cpf_with<R: Rng + ?Sized>(rng: &mut R, formatted: bool) -> String {
    let stem: u64 = rng.random_range(100_000_000..=999_999_999);
    let cpf = SCHEME.finish(&stem.to_string());
    if formatted {
        format_cpf(&cpf)
    } else {
        cpf
    }
}
