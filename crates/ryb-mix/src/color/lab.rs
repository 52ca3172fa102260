//! CIE L*a*b* perceptual color space
//!
//! Lab is where mix candidates are scored: the Euclidean distance between two
//! Lab colors (CIE76 ΔE) approximates how different they look to a person,
//! independently of where in the gamut they fall.
//!
//! # References
//!
//! CIE 15:2004, Colorimetry, 3rd edition.

use std::str::FromStr;

use super::linear_rgb::LinearRgb;
use super::srgb::Srgb;
use super::xyz::Xyz;
use crate::paint::ParseColorError;

/// D65 reference white, normalized to Y = 1.0.
pub const D65_WHITE: Xyz = Xyz {
    x: 0.95047,
    y: 1.0,
    z: 1.08883,
};

/// Breakpoint between the cube-root and linear segments of the Lab
/// transfer function, (6/29)^3.
const LAB_EPSILON: f64 = 0.008856;

/// A color in CIE L*a*b* space.
///
/// # Components
///
/// - `l`: Lightness, 0.0 (black) to 100.0 (diffuse white)
/// - `a`: Green (negative) to red (positive)
/// - `b`: Blue (negative) to yellow (positive)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// CIE76 color difference: Euclidean distance in Lab.
    ///
    /// A ΔE around 2 is just noticeable; above ~25 the colors read as
    /// clearly different hues or values.
    ///
    /// # Example
    ///
    /// ```
    /// use ryb_mix::Lab;
    ///
    /// let a = Lab::new(50.0, 0.0, 0.0);
    /// let b = Lab::new(53.0, 4.0, 0.0);
    /// assert!((a.delta_e(b) - 5.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn delta_e(self, other: Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

impl From<Xyz> for Lab {
    fn from(xyz: Xyz) -> Self {
        let fx = lab_f(xyz.x / D65_WHITE.x);
        let fy = lab_f(xyz.y / D65_WHITE.y);
        let fz = lab_f(xyz.z / D65_WHITE.z);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<LinearRgb> for Lab {
    fn from(rgb: LinearRgb) -> Self {
        Self::from(Xyz::from(rgb))
    }
}

impl From<Srgb> for Lab {
    /// sRGB → linear RGB → XYZ → Lab.
    fn from(srgb: Srgb) -> Self {
        Self::from(LinearRgb::from(srgb))
    }
}

/// Convert a hex color string straight to Lab.
///
/// # Example
///
/// ```
/// use ryb_mix::hex_to_lab;
///
/// let white = hex_to_lab("#ffffff").unwrap();
/// assert!((white.l - 100.0).abs() < 0.01);
/// ```
pub fn hex_to_lab(hex: &str) -> Result<Lab, ParseColorError> {
    Srgb::from_str(hex).map(Lab::from)
}
