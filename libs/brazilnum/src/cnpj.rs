//! CNPJ: 14-digit company number with two check digits.
//!
//! The first eight digits identify the firm, the next four the establishment
//! (branch), and the last two are check digits. Display form is
//! `00.000.000/0000-00`.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::checksum::{Reduction, Scheme};
use crate::clean::{clean_id, RawId};
use crate::error::{Error, Result};
use crate::layout::Layout;
use crate::IdKind;

/// Weights for the first check digit, over digits 0 to 11.
pub const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weights for the second check digit, over digits 0 to 12.
pub const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Digits of the firm identifier at the start of a CNPJ.
const FIRM_LEN: usize = 8;

/// Establishment suffix of a company's head office.
pub const DEFAULT_ESTABLISHMENT: &str = "0001";

/// Establishment suffixes drawn by the generator.
const RANDOM_ESTABLISHMENTS: [&str; 5] = ["0001", "0002", "0003", "0004", "0005"];

pub(crate) const SCHEME: Scheme = Scheme {
    kind: IdKind::Cnpj,
    weights: &[&CNPJ_FIRST_WEIGHTS, &CNPJ_SECOND_WEIGHTS],
    reduction: Reduction::Mod11,
    layout: Layout::new(&[(2, '.'), (3, '.'), (3, '/'), (4, '-')]),
};

/// Takes a CNPJ and turns it into a string of only digits.
pub fn clean_cnpj(cnpj: impl RawId) -> String {
    clean_id(cnpj)
}

/// Checks whether a CNPJ is valid.
pub fn validate_cnpj(cnpj: impl RawId) -> bool {
    SCHEME.validate(cnpj)
}

/// Finds the two check digits that make a CNPJ valid.
///
/// Only the first twelve digits are read.
pub fn cnpj_check_digits(cnpj: impl RawId) -> Result<(u8, u8)> {
    let checks = SCHEME.check_digits(cnpj)?;
    Ok((checks[0], checks[1]))
}

/// Builds a complete CNPJ from a firm identifier and an establishment suffix.
///
/// Only the first eight digits of `firm` are read, so a full CNPJ can be
/// passed to derive another branch of the same company. The establishment
/// follows, and both check digits are appended. See [`DEFAULT_ESTABLISHMENT`]
/// for the head-office suffix.
pub fn cnpj_from_firm_id(firm: impl RawId, establishment: impl RawId) -> Result<String> {
    let mut stem = clean_id(firm);
    if stem.len() < FIRM_LEN {
        return Err(Error::InsufficientLength {
            kind: IdKind::Cnpj,
            expected: FIRM_LEN,
            actual: stem.len(),
        });
    }

    stem.truncate(FIRM_LEN);
    stem.push_str(&clean_id(establishment));
    SCHEME.complete(stem)
}

/// Applies `00.000.000/0000-00` punctuation.
pub fn format_cnpj(cnpj: impl RawId) -> String {
    SCHEME.format(cnpj)
}

/// Restores leading zeros to a CNPJ, optionally requiring the result to be valid.
pub fn pad_cnpj(cnpj: impl RawId, validate: bool) -> Result<String> {
    SCHEME.pad(cnpj, validate)
}

/// Creates a random valid CNPJ.
pub fn random_cnpj(formatted: bool) -> String {
    random_cnpj_with(&mut rand::rng(), formatted)
}

/// Creates a random valid CNPJ from the given RNG.
///
/// The establishment is one of the first five branches rather than a random
/// four-digit number.
pub fn random_cnpj_with<R: Rng + ?Sized>(rng: &mut R, formatted: bool) -> String {
    let firm: u32 = rng.random_range(10_000_000..=99_999_999);
    let establishment = RANDOM_ESTABLISHMENTS
        .choose(rng)
        .copied()
        .unwrap_or(DEFAULT_ESTABLISHMENT);

    let cnpj = SCHEME.finish(&format!("{firm}{establishment}"));
    if formatted {
        format_cnpj(&cnpj)
    } else {
        cnpj
    }
}
