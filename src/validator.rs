//! Binary string validation.

/// Returns true if `input` is a non-empty string of `0` and `1` characters.
///
/// The caller is expected to trim surrounding whitespace first; interior
/// whitespace, signs and any other characters are rejected.
pub fn is_valid_binary(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|c| c == '0' || c == '1')
}
