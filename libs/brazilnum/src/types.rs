//! Validated identifier types.
//!
//! A value of one of these types always holds the bare digits of a valid
//! identifier. Use them at boundaries where an identifier has been checked
//! once and should not be re-validated downstream.

use crate::macros::define_identifier;
use crate::IdKind;

define_identifier!(
    /// A valid CPF.
    Cpf,
    IdKind::Cpf,
    crate::cpf::SCHEME,
    crate::cpf::random_cpf_with
);

define_identifier!(
    /// A valid CNPJ.
    Cnpj,
    IdKind::Cnpj,
    crate::cnpj::SCHEME,
    crate::cnpj::random_cnpj_with
);

define_identifier!(
    /// A valid PIS/PASEP.
    Pis,
    IdKind::Pis,
    crate::pis::SCHEME,
    crate::pis::random_pis_with
);

define_identifier!(
    /// A valid CEI.
    Cei,
    IdKind::Cei,
    crate::cei::SCHEME,
    crate::cei::random_cei_with
);

impl Cnpj {
    /// The eight-digit firm identifier.
    #[must_use]
    pub fn firm(&self) -> &str {
        &self.0[..8]
    }

    /// The four-digit establishment (branch) suffix.
    #[must_use]
    pub fn establishment(&self) -> &str {
        &self.0[8..12]
    }

    /// Returns true for the head office (establishment `0001`).
    #[must_use]
    pub fn is_head_office(&self) -> bool {
        self.establishment() == crate::cnpj::DEFAULT_ESTABLISHMENT
    }
}
