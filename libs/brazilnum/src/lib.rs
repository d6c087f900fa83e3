//! # brazilnum
//!
//! Validation, formatting, padding and generation of Brazilian identification
//! numbers.
//!
//! ## Identifiers
//!
//! | kind | digits | check digits | display |
//! |------|--------|--------------|---------|
//! | CPF (individuals) | 11 | 2 | `000.000.000-00` |
//! | CNPJ (companies) | 14 | 2 | `00.000.000/0000-00` |
//! | PIS/PASEP (workers) | 11 | 1 | `000.0000.000-0` |
//! | CEI (employers) | 12 | 1 | `00.000.00000/00` |
//!
//! Every kind exposes the same operations, named after the kind:
//!
//! - `clean_*`: strip everything but digits
//! - `validate_*`: length and check digits, never fails
//! - `*_check_digits` / `*_check_digit`: compute check digits from a stem
//! - `format_*`: apply the display punctuation
//! - `pad_*`: restore leading zeros lost to integer storage
//! - `random_*`: generate a valid identifier
//!
//! All of them accept strings (punctuated or not) and integers through
//! [`RawId`].
//!
//! ```
//! use brazilnum::{format_cpf, pad_cnpj, validate_cpf};
//!
//! assert!(validate_cpf("111.444.777-35"));
//! assert_eq!(format_cpf(11144477735u64), "111.444.777-35");
//! assert_eq!(pad_cnpj(191, true).unwrap(), "00000000000191");
//! ```
//!
//! The [`Cpf`], [`Cnpj`], [`Pis`] and [`Cei`] types wrap an identifier that
//! has already been validated.

mod checksum;
mod clean;
mod error;
mod kind;
mod layout;
mod macros;
mod types;

pub mod cei;
pub mod cnpj;
pub mod cpf;
pub mod pis;

pub use cei::{
    cei_check_digit, clean_cei, format_cei, pad_cei, random_cei, random_cei_with, validate_cei,
};
pub use clean::{clean_id, RawId};
pub use cnpj::{
    clean_cnpj, cnpj_check_digits, cnpj_from_firm_id, format_cnpj, pad_cnpj, random_cnpj,
    random_cnpj_with, validate_cnpj,
};
pub use cpf::{
    clean_cpf, cpf_check_digits, format_cpf, pad_cpf, random_cpf, random_cpf_with, validate_cpf,
};
pub use error::{Error, Result};
pub use kind::IdKind;
pub use pis::{
    clean_pis, format_pis, pad_pis, pis_check_digit, pis_check_digits, random_pis,
    random_pis_with, validate_pis,
};
pub use types::{Cei, Cnpj, Cpf, Pis};
