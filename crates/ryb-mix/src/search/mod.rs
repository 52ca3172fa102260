//! Mixture search
//!
//! Two exhaustive, bounded searches share the same scoring: synthesize the
//! candidate's color in RYB, quantize it to 8-bit sRGB, and take its ΔE to
//! the target in Lab.
//!
//! - [`search_combinations`] enumerates singles, pairs and triples of owned
//!   paints at fixed part ratios and keeps the closest candidate.
//! - [`suggest_addition`] takes that winner and looks through the whole
//!   catalog for one more paint that would bring the mix closer.
//!
//! Both keep the first candidate seen on an exact distance tie, so the
//! enumeration order below fully determines the result.

mod combo;
mod ratios;
mod suggest;

pub use combo::{search_combinations, BestMix};
pub use ratios::{parts_to_weights, PAIR_RATIOS, SUGGESTION_WEIGHTS, TRIPLE_RATIOS};
pub use suggest::{suggest_addition, Suggestion};

use crate::api::MixError;
use crate::color::{Lab, Ryb, Srgb};
use crate::paint::Paint;

/// A paint parsed and converted once, before the search loops touch it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Swatch<'a> {
    pub paint: &'a Paint,
    pub srgb: Srgb,
    pub ryb: Ryb,
}

impl<'a> Swatch<'a> {
    pub fn prepare(paint: &'a Paint) -> Result<Self, MixError> {
        let srgb = paint.srgb().map_err(|e| MixError::paint(paint, e))?;
        Ok(Self {
            paint,
            srgb,
            ryb: Ryb::from_srgb(srgb),
        })
    }
}

/// Score a synthesized color against the target.
#[inline]
pub(crate) fn score(target: Lab, mixed: Srgb) -> f64 {
    crate::distance::lab_distance(target, Lab::from(mixed))
}
