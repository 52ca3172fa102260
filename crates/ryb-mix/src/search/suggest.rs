//! One-paint-more suggestions from the catalog.

use super::ratios::SUGGESTION_WEIGHTS;
use super::{score, BestMix, Swatch};
use crate::api::MixError;
use crate::color::{Lab, Ryb, Srgb};
use crate::mixing::blend_pigments;
use crate::paint::Paint;

/// A catalog paint that, mixed into the current best, gets closer to the
/// target.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub paint: Paint,
    /// `[current mix, suggested paint]` weights of the improving blend
    pub weights: [f64; 2],
    /// Color of that blend, 8-bit quantized
    pub mixed: Srgb,
    /// ΔE of that blend to the target, strictly below the best mix's
    pub distance: f64,
}

/// Look through `catalog` for one paint to add to `best`.
///
/// Paints already in `best` are skipped. Every other paint is blended with
/// the current mix at each of [`SUGGESTION_WEIGHTS`]; the closest blend wins
/// if it is strictly closer than `best` alone. Ties keep the earliest catalog
/// entry, then the earliest weight pair.
///
/// Returns `Ok(None)` when nothing improves on `best`.
pub fn suggest_addition(
    target: Lab,
    best: &BestMix,
    catalog: &[Paint],
) -> Result<Option<Suggestion>, MixError> {
    let base = Ryb::from_srgb(best.mixed);
    let in_mix = |paint: &Paint| best.components.iter().any(|c| c.paint.id == paint.id);

    let mut leader: Option<(&Paint, usize, Srgb)> = None;
    let mut leader_distance = best.distance;

    for paint in catalog.iter().filter(|p| !in_mix(p)) {
        let candidate = Swatch::prepare(paint)?;
        for (w, [w_mix, w_paint]) in SUGGESTION_WEIGHTS.iter().copied().enumerate() {
            let mixed = blend_pigments([(base, w_mix), (candidate.ryb, w_paint)]);
            let distance = score(target, mixed);
            if distance < leader_distance {
                leader = Some((paint, w, mixed));
                leader_distance = distance;
            }
        }
    }

    Ok(leader.map(|(paint, w, mixed)| Suggestion {
        paint: paint.clone(),
        weights: SUGGESTION_WEIGHTS[w],
        mixed,
        distance: leader_distance,
    }))
}
