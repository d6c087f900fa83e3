//! Input normalization.
//!
//! Every operation accepts either a string, possibly punctuated, or an
//! integer. Both are reduced to the bare sequence of ASCII digits before any
//! checksum work happens.

/// A value that can be read as an identifier.
///
/// Implemented for string types and the primitive integers. Integers are
/// rendered in base 10; a sign, if any, is discarded like any other
/// non-digit.
pub trait RawId {
    /// Returns the digits of the value in order, dropping everything else.
    fn to_digits(&self) -> String;
}

impl RawId for str {
    fn to_digits(&self) -> String {
        self.chars().filter(char::is_ascii_digit).collect()
    }
}

impl RawId for String {
    fn to_digits(&self) -> String {
        self.as_str().to_digits()
    }
}

impl<T: RawId + ?Sized> RawId for &T {
    fn to_digits(&self) -> String {
        (**self).to_digits()
    }
}

macro_rules! impl_raw_id_for_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl RawId for $t {
                fn to_digits(&self) -> String {
                    self.to_string().to_digits()
                }
            }
        )*
    };
}

impl_raw_id_for_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Strips every non-digit character from an identifier.
///
/// Never fails: garbage input yields an empty or short string, which the
/// validators then reject.
pub fn clean_id(id: impl RawId) -> String {
    id.to_digits()
}

/// Converts clean digit characters into their numeric values.
pub(crate) fn digit_values(digits: &str) -> Vec<u8> {
    digits.bytes().map(|b| b - b'0').collect()
}
