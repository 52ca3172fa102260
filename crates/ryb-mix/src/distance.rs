//! Perceptual distance and accuracy scoring
//!
//! Candidates are ranked by CIE76 ΔE against the target. The winning
//! distance is reported to people as an accuracy percentage: a linear ramp
//! from 100% at ΔE 0 down to 0% at [`ZERO_ACCURACY_DISTANCE`].
//!
//! The ramp is deliberately steep. A ΔE of 6–8 is a usable paint match, and
//! it reads as roughly 70–80%. Anything past ΔE 28 is a different color and
//! reads as 0%.

use crate::color::Lab;

/// ΔE at and beyond which accuracy is reported as 0%.
pub const ZERO_ACCURACY_DISTANCE: f64 = 28.0;

/// CIE76 distance between two Lab colors.
#[inline]
pub fn lab_distance(a: Lab, b: Lab) -> f64 {
    a.delta_e(b)
}

/// Map a ΔE distance to a whole accuracy percentage in `0..=100`.
///
/// `clamp(round((1 - d / 28) * 100), 0, 100)`. Monotonically non-increasing
/// in `d`. NaN maps to 0.
///
/// # Example
///
/// ```
/// use ryb_mix::distance_to_accuracy;
///
/// assert_eq!(distance_to_accuracy(0.0), 100);
/// assert_eq!(distance_to_accuracy(14.0), 50);
/// assert_eq!(distance_to_accuracy(40.0), 0);
/// ```
pub fn distance_to_accuracy(distance: f64) -> u8 {
    let pct = ((1.0 - distance / ZERO_ACCURACY_DISTANCE) * 100.0).round();
    if pct.is_nan() {
        return 0;
    }
    pct.clamp(0.0, 100.0) as u8
}
