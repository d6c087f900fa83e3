//! Display layouts.

/// Fixed punctuation for an identifier's display form.
///
/// Each entry is a digit group width followed by the separator written after
/// it. Whatever digits remain after the last group form the final group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Layout(&'static [(usize, char)]);

impl Layout {
    pub(crate) const fn new(groups: &'static [(usize, char)]) -> Self {
        Self(groups)
    }

    /// Punctuates a clean digit string.
    ///
    /// Length is not checked. Short input yields empty groups, but every
    /// separator is still written.
    pub(crate) fn apply(&self, digits: &str) -> String {
        let mut out = String::with_capacity(digits.len() + self.0.len());
        let mut rest = digits;
        for &(width, separator) in self.0 {
            let (group, tail) = rest.split_at(width.min(rest.len()));
            out.push_str(group);
            out.push(separator);
            rest = tail;
        }
        out.push_str(rest);
        out
    }
}
