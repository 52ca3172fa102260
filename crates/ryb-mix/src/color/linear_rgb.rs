//! Linear RGB color type
//!
//! Linear RGB is proportional to light intensity. It is only an intermediate
//! step on the way from sRGB to CIE XYZ.

use super::srgb::Srgb;

/// sRGB encoded values at or below this threshold sit on the linear segment
/// of the transfer curve (IEC 61966-2-1).
const SRGB_LINEAR_THRESHOLD: f64 = 0.04045;

/// A color in linear RGB color space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// Decode one gamma-encoded sRGB channel (0.0..=1.0) to linear light.
#[inline]
pub fn srgb_to_linear(encoded: f64) -> f64 {
    if encoded <= SRGB_LINEAR_THRESHOLD {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

impl From<Srgb> for LinearRgb {
    /// Gamma-decode each channel with the exact sRGB transfer function.
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb_to_linear(srgb.r),
            g: srgb_to_linear(srgb.g),
            b: srgb_to_linear(srgb.b),
        }
    }
}
