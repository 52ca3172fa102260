//! Error types for color parsing
//!
//! Hex strings come from two collaborators: the catalog and the person
//! choosing a target. Both are parsed with the same rules and fail with
//! [`ParseColorError`].

use thiserror::Error;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Wrong number of hex digits after stripping `#` (must be 3 or 6)
    #[error("invalid hex color length {0} (expected 3 or 6 digits)")]
    InvalidLength(usize),
    /// A character that is not a hexadecimal digit
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}
