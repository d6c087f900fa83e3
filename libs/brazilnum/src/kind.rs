//! The four identifier families.

/// A Brazilian identifier family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum IdKind {
    /// Individual taxpayer registry (Cadastro de Pessoas Físicas).
    Cpf,
    /// Company registry (Cadastro Nacional da Pessoa Jurídica).
    Cnpj,
    /// Worker registry (PIS/PASEP).
    Pis,
    /// Employer/construction registry (Cadastro Específico do INSS).
    Cei,
}

impl IdKind {
    /// All identifier kinds.
    pub const ALL: [IdKind; 4] = [IdKind::Cpf, IdKind::Cnpj, IdKind::Pis, IdKind::Cei];

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            IdKind::Cpf => "CPF",
            IdKind::Cnpj => "CNPJ",
            IdKind::Pis => "PIS/PASEP",
            IdKind::Cei => "CEI",
        }
    }

    /// Canonical number of digits, check digits included.
    #[must_use]
    pub const fn length(self) -> usize {
        match self {
            IdKind::Cpf => 11,
            IdKind::Cnpj => 14,
            IdKind::Pis => 11,
            IdKind::Cei => 12,
        }
    }

    /// Number of trailing check digits.
    #[must_use]
    pub const fn check_len(self) -> usize {
        match self {
            IdKind::Cpf | IdKind::Cnpj => 2,
            IdKind::Pis | IdKind::Cei => 1,
        }
    }

    /// Number of leading digits the check digits are computed from.
    #[must_use]
    pub const fn payload_len(self) -> usize {
        self.length() - self.check_len()
    }
}

impl std::fmt::Display for IdKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
