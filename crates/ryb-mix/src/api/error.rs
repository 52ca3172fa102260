//! Unified error type for the ryb-mix public API.

use thiserror::Error;

use crate::paint::ParseColorError;

/// Everything that can make a mix request fail.
///
/// Both variants are caller precondition violations: the engine refuses
/// malformed colors instead of mixing something arbitrary. An empty owned
/// palette is not an error, and neither is the RYB inverse stopping short
/// of convergence.
///
/// # Example
///
/// ```
/// use ryb_mix::{compute_best_mix, MixError};
///
/// let err = compute_best_mix("#12345", &[], &[]).unwrap_err();
/// assert!(matches!(err, MixError::InvalidTarget { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MixError {
    /// The target color is not a valid hex string
    #[error("invalid target color {value:?}: {source}")]
    InvalidTarget {
        value: String,
        #[source]
        source: ParseColorError,
    },
    /// An owned or catalog paint carries an invalid hex string
    #[error("paint {id:?} has invalid color {value:?}: {source}")]
    InvalidPaintColor {
        id: String,
        value: String,
        #[source]
        source: ParseColorError,
    },
}

impl MixError {
    pub(crate) fn paint(paint: &crate::Paint, source: ParseColorError) -> Self {
        MixError::InvalidPaintColor {
            id: paint.id.clone(),
            value: paint.hex_color.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display_and_source() {
        let err = MixError::InvalidTarget {
            value: "#12".to_string(),
            source: ParseColorError::InvalidLength(2),
        };
        assert_eq!(
            err.to_string(),
            "invalid target color \"#12\": invalid hex color length 2 (expected 3 or 6 digits)"
        );
        assert!(err.source().is_some());

        let err = MixError::paint(
            &crate::Paint::new("bad", "Bad", "#xyz", ""),
            ParseColorError::InvalidDigit('x'),
        );
        assert_eq!(
            err.to_string(),
            "paint \"bad\" has invalid color \"#xyz\": invalid hex digit 'x'"
        );
    }
}
