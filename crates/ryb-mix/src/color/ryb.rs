//! Red-Yellow-Blue subtractive color model
//!
//! Paints do not mix like light. Blue and yellow light average to grey, blue
//! and yellow pigment make green. The RYB model captures this without
//! spectral data: each axis is the amount of one primary pigment, and the
//! resulting display color is interpolated from eight measured corner colors
//! of the RYB unit cube (Gossett & Chen, "Paint Inspired Color Compositing").
//!
//! The forward map RYB → RGB is exact trilinear interpolation. There is no
//! closed-form inverse, so [`Ryb::from_srgb`] finds one numerically.

use super::srgb::Srgb;

/// The RYB unit cube's corners expressed as sRGB in `0.0..=1.0`.
///
/// Indexed by `r + 2*y + 4*b` for `r, y, b ∈ {0, 1}`.
pub static RYB_CORNERS: [[f64; 3]; 8] = [
    [1.000, 1.000, 1.000], // (0,0,0) white
    [1.000, 0.000, 0.000], // (1,0,0) red
    [1.000, 1.000, 0.000], // (0,1,0) yellow
    [1.000, 0.500, 0.000], // (1,1,0) orange
    [0.163, 0.373, 0.600], // (0,0,1) blue
    [0.380, 0.000, 0.460], // (1,0,1) purple
    [0.000, 0.660, 0.200], // (0,1,1) green
    [0.200, 0.094, 0.000], // (1,1,1) near-black
];

/// Iteration cap for the numerical inverse.
pub const INVERSE_MAX_ITERATIONS: usize = 150;

/// Squared residual below which the inverse stops early.
pub const INVERSE_TOLERANCE: f64 = 1e-9;

/// Finite-difference probe size per axis.
const PROBE_STEP: f64 = 0.005;

/// Gradient step size.
const LEARNING_RATE: f64 = 0.15;

/// A color in RYB pigment space. Each axis is in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ryb {
    /// Amount of red pigment
    pub r: f64,
    /// Amount of yellow pigment
    pub y: f64,
    /// Amount of blue pigment
    pub b: f64,
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

impl Ryb {
    #[inline]
    pub fn new(r: f64, y: f64, b: f64) -> Self {
        Self { r, y, b }
    }

    #[inline]
    fn to_array(self) -> [f64; 3] {
        [self.r, self.y, self.b]
    }

    #[inline]
    fn from_array(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    /// Forward map RYB → sRGB by trilinear interpolation over [`RYB_CORNERS`].
    ///
    /// Interpolates along r, then y, then b. The result is not clamped:
    /// inside the unit cube it stays in `0.0..=1.0`, and outside it the
    /// polynomial extends smoothly, which the numerical inverse relies on
    /// when probing the cube's faces.
    ///
    /// # Example
    ///
    /// ```
    /// use ryb_mix::{Ryb, Srgb};
    ///
    /// // Pure yellow pigment shows as display yellow
    /// assert_eq!(Ryb::new(0.0, 1.0, 0.0).to_srgb(), Srgb::new(1.0, 1.0, 0.0));
    /// ```
    pub fn to_srgb(self) -> Srgb {
        let [c000, c100, c010, c110, c001, c101, c011, c111] = &RYB_CORNERS;
        let channel = |i: usize| {
            let x00 = lerp(c000[i], c100[i], self.r);
            let x10 = lerp(c010[i], c110[i], self.r);
            let x01 = lerp(c001[i], c101[i], self.r);
            let x11 = lerp(c011[i], c111[i], self.r);
            let xy0 = lerp(x00, x10, self.y);
            let xy1 = lerp(x01, x11, self.y);
            lerp(xy0, xy1, self.b)
        };
        Srgb::new(channel(0), channel(1), channel(2))
    }

    /// Numerical inverse sRGB → RYB.
    ///
    /// Local gradient descent on the squared RGB residual, starting from the
    /// RGB triple itself. Each iteration probes every axis with a forward
    /// difference taken from the same prediction, then moves all three axes
    /// by `LEARNING_RATE * gradient`, clamped to the unit cube. Stops after
    /// [`INVERSE_MAX_ITERATIONS`] or once the squared residual drops below
    /// [`INVERSE_TOLERANCE`].
    ///
    /// This is best effort: it is not guaranteed to reach the global
    /// minimum, and colors near the cube's edges can keep a small residual.
    /// That residual shows up as a slight bias in mixed colors and is never
    /// reported as an error.
    pub fn from_srgb(target: Srgb) -> Self {
        let goal = [target.r, target.g, target.b];
        let mut ryb = goal;

        for _ in 0..INVERSE_MAX_ITERATIONS {
            let pred = rgb_array(Self::from_array(ryb).to_srgb());
            let err = [goal[0] - pred[0], goal[1] - pred[1], goal[2] - pred[2]];
            let err_sq = err[0] * err[0] + err[1] * err[1] + err[2] * err[2];
            if err_sq < INVERSE_TOLERANCE {
                break;
            }

            let mut next = ryb;
            for axis in 0..3 {
                // Unclamped: a probe clamped to the cube has zero slope on
                // the upper faces.
                let mut probe = ryb;
                probe[axis] += PROBE_STEP;
                let shifted = rgb_array(Self::from_array(probe).to_srgb());

                let grad = ((shifted[0] - pred[0]) * err[0]
                    + (shifted[1] - pred[1]) * err[1]
                    + (shifted[2] - pred[2]) * err[2])
                    / PROBE_STEP;
                next[axis] = (ryb[axis] + LEARNING_RATE * grad).clamp(0.0, 1.0);
            }
            ryb = next;
        }

        Self::from_array(ryb)
    }

    /// Per-axis weighted sum of RYB colors.
    ///
    /// Weights are expected to sum to 1. Accumulation happens in iteration
    /// order starting from zero, so the same inputs always produce
    /// bit-identical output.
    pub fn weighted_sum<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = (Ryb, f64)>,
    {
        let mut acc = [0.0; 3];
        for (ryb, weight) in parts {
            for (slot, value) in acc.iter_mut().zip(ryb.to_array()) {
                *slot += value * weight;
            }
        }
        Self::from_array(acc)
    }
}

#[inline]
fn rgb_array(c: Srgb) -> [f64; 3] {
    [c.r, c.g, c.b]
}

impl From<Ryb> for Srgb {
    fn from(ryb: Ryb) -> Self {
        ryb.to_srgb()
    }
}

/// Forward conversion on raw channels: RYB in `0.0..=1.0` → RGB in `0.0..=1.0`.
pub fn ryb_to_rgb(r: f64, y: f64, b: f64) -> [f64; 3] {
    rgb_array(Ryb::new(r, y, b).to_srgb())
}

/// Inverse conversion on raw channels: RGB in `0.0..=1.0` → RYB in `0.0..=1.0`.
///
/// See [`Ryb::from_srgb`] for the accuracy caveats.
pub fn rgb_to_ryb(r: f64, g: f64, b: f64) -> [f64; 3] {
    Ryb::from_srgb(Srgb::new(r, g, b)).to_array()
}
