//! PaintMixer builder, the primary entry point for the crate.
//!
//! [`PaintMixer`] runs the combination search and, for weak matches, the
//! catalog suggestion behind a small fluent configuration.

use crate::color::{Lab, Srgb};
use crate::distance::distance_to_accuracy;
use crate::output::MixOutcome;
use crate::paint::Paint;
use crate::search::{search_combinations, suggest_addition};

use super::MixError;

/// Accuracy below which a catalog paint is suggested.
pub const DEFAULT_SUGGESTION_THRESHOLD: u8 = 80;

/// Largest number of owned paints combined in one mix.
pub const DEFAULT_MAX_COMPONENTS: usize = 3;

/// Mix predictor for a painter's palette.
///
/// # Design
///
/// - Configuration methods consume and return `self`
/// - [`mix()`](Self::mix) takes `&self`, so one mixer serves any number of
///   requests and never keeps state between them
/// - Identical inputs give identical outcomes
///
/// # Example
///
/// ```
/// use ryb_mix::{Paint, PaintMixer};
///
/// let owned = [
///     Paint::new("yellow", "Cadmium Yellow", "#ffff00", "PY35"),
///     Paint::new("blue", "Cobalt Blue", "#0000ff", "PB28"),
/// ];
///
/// let mixer = PaintMixer::new().max_components(2).suggestion_threshold(0);
/// let outcome = mixer.mix("#8daf69", &owned, &[]).unwrap();
///
/// assert_eq!(outcome.instructions(), "1 part Cadmium Yellow + 1 part Cobalt Blue");
/// assert_eq!(outcome.accuracy_percent, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintMixer {
    suggestion_threshold: u8,
    max_components: usize,
}

impl Default for PaintMixer {
    fn default() -> Self {
        Self::new()
    }
}

impl PaintMixer {
    /// Suggest below 80% accuracy, combine up to three paints.
    pub fn new() -> Self {
        Self {
            suggestion_threshold: DEFAULT_SUGGESTION_THRESHOLD,
            max_components: DEFAULT_MAX_COMPONENTS,
        }
    }

    /// Look for a catalog suggestion when accuracy is strictly below
    /// `percent`. 0 turns suggestions off.
    #[inline]
    pub fn suggestion_threshold(mut self, percent: u8) -> Self {
        self.suggestion_threshold = percent.min(100);
        self
    }

    /// Combine at most `count` owned paints, clamped to 1..=3.
    #[inline]
    pub fn max_components(mut self, count: usize) -> Self {
        self.max_components = count.clamp(1, DEFAULT_MAX_COMPONENTS);
        self
    }

    pub fn get_suggestion_threshold(&self) -> u8 {
        self.suggestion_threshold
    }

    pub fn get_max_components(&self) -> usize {
        self.max_components
    }

    /// Find the best mix of `owned` paints for `target`.
    ///
    /// `catalog` is only consulted for the suggestion. The target is
    /// validated first, so a malformed target is reported even for an empty
    /// palette. An empty palette gives [`MixOutcome::unmixed`].
    ///
    /// # Errors
    ///
    /// [`MixError::InvalidTarget`] for a malformed target,
    /// [`MixError::InvalidPaintColor`] for an owned paint with a malformed
    /// color, or for a catalog paint when a suggestion is searched.
    pub fn mix(
        &self,
        target: &str,
        owned: &[Paint],
        catalog: &[Paint],
    ) -> Result<MixOutcome, MixError> {
        let target_srgb: Srgb = target.parse().map_err(|source| MixError::InvalidTarget {
            value: target.to_string(),
            source,
        })?;
        let target_lab = Lab::from(target_srgb);

        let Some(best) = search_combinations(target_lab, owned, self.max_components)? else {
            return Ok(MixOutcome::unmixed());
        };

        let accuracy_percent = distance_to_accuracy(best.distance);
        let suggestion = if accuracy_percent < self.suggestion_threshold {
            suggest_addition(target_lab, &best, catalog)?.map(|s| s.paint)
        } else {
            None
        };

        Ok(MixOutcome {
            mixed_color: best.mixed.to_hex(),
            components: best.components,
            accuracy_percent,
            suggestion,
        })
    }
}

/// Best mix with default settings.
///
/// Shorthand for `PaintMixer::default().mix(target, owned, catalog)`.
pub fn compute_best_mix(
    target: &str,
    owned: &[Paint],
    catalog: &[Paint],
) -> Result<MixOutcome, MixError> {
    PaintMixer::default().mix(target, owned, catalog)
}
