//! Error types for binary conversion.

use thiserror::Error;

/// Errors produced while turning user text into a decimal value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    /// The trimmed input was empty or contained something other than `0`/`1`.
    #[error("Please enter a valid binary number (only 0s and 1s).")]
    InvalidBinaryFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_message() {
        assert_eq!(
            ConversionError::InvalidBinaryFormat.to_string(),
            "Please enter a valid binary number (only 0s and 1s)."
        );
    }
}
