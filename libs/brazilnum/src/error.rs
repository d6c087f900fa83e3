//! Error types for check-digit computation and padding.

use thiserror::Error;

use crate::IdKind;

/// Errors that can occur when computing check digits or padding identifiers.
///
/// Validation itself never fails; `validate_*` functions answer with a bool.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Fewer digits than the checksum needs were supplied.
    #[error("{kind} must have at least {expected} digits, got {actual}")]
    InsufficientLength {
        kind: IdKind,
        expected: usize,
        actual: usize,
    },

    /// The value is not a valid identifier of this kind.
    #[error("invalid {kind}: '{digits}'")]
    InvalidIdentifier { kind: IdKind, digits: String },
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Returns true if this error reports too few digits.
    pub fn is_insufficient_length(&self) -> bool {
        matches!(self, Error::InsufficientLength { .. })
    }

    /// Returns true if this error reports an invalid identifier.
    pub fn is_invalid(&self) -> bool {
        matches!(self, Error::InvalidIdentifier { .. })
    }

    /// The identifier kind the error refers to.
    pub fn kind(&self) -> IdKind {
        match self {
            Error::InsufficientLength { kind, .. } | Error::InvalidIdentifier { kind, .. } => *kind,
        }
    }
}
