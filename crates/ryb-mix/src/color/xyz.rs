//! CIE 1931 XYZ tristimulus values
//!
//! Bridge between linear RGB and CIE Lab. Uses the sRGB primaries with the
//! D65 white point.

use super::linear_rgb::LinearRgb;

/// A color in CIE XYZ space, scaled so that Y = 1.0 for D65 white.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<LinearRgb> for Xyz {
    /// Standard sRGB (D65) to XYZ matrix.
    fn from(rgb: LinearRgb) -> Self {
        Self {
            x: rgb.r * 0.4124 + rgb.g * 0.3576 + rgb.b * 0.1805,
            y: rgb.r * 0.2126 + rgb.g * 0.7152 + rgb.b * 0.0722,
            z: rgb.r * 0.0193 + rgb.g * 0.1192 + rgb.b * 0.9505,
        }
    }
}
