#![allow(clippy::module_inception)]

//! ryb-mix: predict which of your paints to mix to hit a color
//!
//! Given a target color, the paints a painter owns, and a catalog of paints
//! for sale, this crate finds the combination of up to three owned paints
//! whose physical mix comes closest to the target, reports how close it is,
//! and for weak matches names one catalog paint that would help.
//!
//! # Quick Start
//!
//! ```
//! use ryb_mix::{compute_best_mix, Paint};
//!
//! let owned = [
//!     Paint::new("white", "Titanium White", "#ffffff", "PW6"),
//!     Paint::new("red", "Cadmium Red", "#e30022", "PR108"),
//!     Paint::new("blue", "French Ultramarine", "#163e6f", "PB29"),
//! ];
//!
//! let outcome = compute_best_mix("#e30022", &owned, &owned).unwrap();
//! assert_eq!(outcome.instructions(), "Use Cadmium Red straight from the tube.");
//! assert_eq!(outcome.accuracy_percent, 100);
//! ```
//!
//! For non-default settings use the [`PaintMixer`] builder.
//!
//! # How a mix is predicted
//!
//! Light mixes additively, paint subtractively: blue and yellow light give
//! grey, blue and yellow paint give green. Each paint's swatch color is
//! mapped into the RYB pigment cube ([`Ryb::from_srgb`]), the pigment
//! amounts are averaged by part weight, and the result is mapped back to
//! display color by trilinear interpolation ([`Ryb::to_srgb`]).
//!
//! ```text
//! hex swatch ──parse──> Srgb ──numerical inverse──> Ryb
//!                                                    │ weighted sum
//! hex result <──format── Srgb <──trilinear map────── Ryb
//! ```
//!
//! # How a mix is scored
//!
//! Candidates are compared to the target by CIE76 ΔE in CIE Lab (D65), the
//! Euclidean distance after sRGB → linear → XYZ → Lab. The winner's ΔE is
//! reported as an accuracy percentage, see [`distance_to_accuracy`].
//!
//! # Search
//!
//! Every owned paint alone, every pair at nine part ratios, every triple at
//! ten part ratios ([`PAIR_RATIOS`], [`TRIPLE_RATIOS`]). On a distance tie
//! the candidate enumerated first wins, so results are fully deterministic.
//! When accuracy is below the suggestion threshold, each catalog paint not
//! already in the mix is tried as an addition at the
//! [`SUGGESTION_WEIGHTS`]; a strict improvement becomes the suggestion.

pub mod api;
pub mod color;
pub mod distance;
pub mod mixing;
pub mod output;
pub mod paint;
pub mod search;


pub use api::{compute_best_mix, MixError, PaintMixer};
pub use color::{
    hex_to_lab, hex_to_rgb, rgb_to_hex, rgb_to_ryb, ryb_to_rgb, Lab, LinearRgb, Ryb, Srgb, Xyz,
};
pub use distance::{distance_to_accuracy, lab_distance};
pub use mixing::{mix_colors, mix_hex};
pub use output::MixOutcome;
pub use paint::{Paint, ParseColorError, WeightedPaint};
pub use search::{
    search_combinations, suggest_addition, BestMix, Suggestion, PAIR_RATIOS,
    SUGGESTION_WEIGHTS, TRIPLE_RATIOS,
};
