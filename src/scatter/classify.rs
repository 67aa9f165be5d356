use crate::core::types::RunLabel;

/// True for bases that carry no call: `N` and `.`, in either case
#[inline]
#[must_use]
pub fn is_no_call(base: u8) -> bool {
    matches!(base.to_ascii_uppercase(), b'N' | b'.')
}

#[inline]
#[must_use]
pub fn classify(base: u8) -> RunLabel {
    if is_no_call(base) {
        RunLabel::Nmer
    } else {
        RunLabel::AcgtMer
    }
}
