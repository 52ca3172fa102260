//! Exhaustive search over 1-, 2- and 3-paint combinations.

use super::ratios::{parts_to_weights, PAIR_RATIOS, TRIPLE_RATIOS};
use super::{score, Swatch};
use crate::api::MixError;
use crate::color::{Lab, Srgb};
use crate::mixing::blend_pigments;
use crate::paint::{Paint, WeightedPaint};

/// The closest candidate found by [`search_combinations`].
#[derive(Debug, Clone, PartialEq)]
pub struct BestMix {
    /// Paints in enumeration order with their parts
    pub components: Vec<WeightedPaint>,
    /// Synthesized color of the mix, 8-bit quantized
    pub mixed: Srgb,
    /// ΔE between `mixed` and the target
    pub distance: f64,
}

/// Running minimum. Only a strictly smaller distance replaces the leader,
/// which is what makes the first-enumerated candidate win ties.
struct Leader {
    members: [usize; 3],
    parts: [u32; 3],
    len: usize,
    mixed: Srgb,
    distance: f64,
}

impl Leader {
    fn new() -> Self {
        Self {
            members: [0; 3],
            parts: [0; 3],
            len: 0,
            mixed: crate::mixing::EMPTY_MIX,
            distance: f64::INFINITY,
        }
    }

    #[inline]
    fn offer(&mut self, members: &[usize], parts: &[u32], mixed: Srgb, distance: f64) {
        if distance < self.distance {
            self.len = members.len();
            self.members[..self.len].copy_from_slice(members);
            self.parts[..self.len].copy_from_slice(parts);
            self.mixed = mixed;
            self.distance = distance;
        }
    }

    fn into_best(self, swatches: &[Swatch<'_>]) -> Option<BestMix> {
        if self.len == 0 {
            return None;
        }
        let components = (0..self.len)
            .map(|k| WeightedPaint::new(swatches[self.members[k]].paint.clone(), self.parts[k]))
            .collect();
        Some(BestMix {
            components,
            mixed: self.mixed,
            distance: self.distance,
        })
    }
}

/// Find the owned-paint combination whose mix is perceptually closest to
/// `target`.
///
/// Enumeration order, which is also the tie-break order:
///
/// 1. every owned paint alone, 1 part
/// 2. every pair `i < j`, crossed with [`PAIR_RATIOS`]
/// 3. every triple `i < j < k`, crossed with [`TRIPLE_RATIOS`]
///
/// `max_components` (1..=3) stops the enumeration early. Cost is
/// `O(n + 9·n² + 10·n³)` in the number of owned paints, fine for the tens
/// of paints a painter owns, not meant for whole catalogs.
///
/// Returns `Ok(None)` when `owned` is empty.
pub fn search_combinations(
    target: Lab,
    owned: &[Paint],
    max_components: usize,
) -> Result<Option<BestMix>, MixError> {
    let swatches = owned
        .iter()
        .map(Swatch::prepare)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(search_with_ratios(
        target,
        &swatches,
        max_components,
        &PAIR_RATIOS,
        &TRIPLE_RATIOS,
    ))
}

pub(crate) fn search_with_ratios(
    target: Lab,
    swatches: &[Swatch<'_>],
    max_components: usize,
    pair_ratios: &[[u32; 2]],
    triple_ratios: &[[u32; 3]],
) -> Option<BestMix> {
    let n = swatches.len();
    let mut leader = Leader::new();

    for (i, swatch) in swatches.iter().enumerate() {
        leader.offer(&[i], &[1], swatch.srgb, score(target, swatch.srgb));
    }

    if max_components >= 2 {
        for i in 0..n {
            for j in i + 1..n {
                for parts in pair_ratios {
                    let [wi, wj] = parts_to_weights(parts);
                    let mixed =
                        blend_pigments([(swatches[i].ryb, wi), (swatches[j].ryb, wj)]);
                    leader.offer(&[i, j], parts, mixed, score(target, mixed));
                }
            }
        }
    }

    if max_components >= 3 {
        for i in 0..n {
            for j in i + 1..n {
                for k in j + 1..n {
                    for parts in triple_ratios {
                        let [wi, wj, wk] = parts_to_weights(parts);
                        let mixed = blend_pigments([
                            (swatches[i].ryb, wi),
                            (swatches[j].ryb, wj),
                            (swatches[k].ryb, wk),
                        ]);
                        leader.offer(&[i, j, k], parts, mixed, score(target, mixed));
                    }
                }
            }
        }
    }

    leader.into_best(swatches)
}
