//! Macro for defining validated identifier types.

/// Defines a newtype holding a clean, valid identifier of one kind.
///
/// Generates:
/// - A `KIND` constant
/// - `parse()` (clean + validate) and `random()` / `random_with()`
/// - `as_str()` for the bare digits and `formatted()` for the display form
/// - `Display` (display form), `FromStr`, `TryFrom<&str>`, `TryFrom<String>`
/// - `Serialize` as the bare digits and `Deserialize` from any punctuated form
///
/// # Example
///
/// ```ignore
/// define_identifier!(Cpf, IdKind::Cpf, crate::cpf::SCHEME, crate::cpf::random_cpf_with);
///
/// let cpf: Cpf = "111.444.777-35".parse()?;
/// assert_eq!(cpf.as_str(), "11144477735");
/// ```
macro_rules! define_identifier {
    ($(#[$meta:meta])* $name:ident, $kind:expr, $scheme:expr, $random:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// The identifier family of this type.
            pub const KIND: $crate::IdKind = $kind;

            /// Parses and validates an identifier, punctuated or not.
            pub fn parse(id: impl $crate::RawId) -> $crate::Result<Self> {
                let digits = $crate::clean_id(id);
                if !$scheme.validate(&digits) {
                    tracing::debug!(
                        kind = %Self::KIND,
                        digits = digits.len(),
                        "rejected identifier"
                    );
                    return Err($crate::Error::InvalidIdentifier {
                        kind: Self::KIND,
                        digits,
                    });
                }
                Ok(Self(digits))
            }

            /// Generates a random valid identifier.
            #[must_use]
            pub fn random() -> Self {
                Self::random_with(&mut rand::rng())
            }

            /// Generates a random valid identifier from the given RNG.
            #[must_use]
            pub fn random_with<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
                Self($random(rng, false))
            }

            /// Returns the bare digits.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the punctuated display form.
            #[must_use]
            pub fn formatted(&self) -> String {
                $scheme.format(&self.0)
            }

            /// Consumes the identifier, returning the bare digits.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.formatted())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = $crate::Error;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::Error;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::parse(s)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::parse(s).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use define_identifier;
