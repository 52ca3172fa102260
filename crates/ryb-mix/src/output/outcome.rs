//! MixOutcome and its plain-language rendering.

use serde::{Deserialize, Serialize};

use crate::paint::{Paint, WeightedPaint};

/// Reported as the mixed color when there was nothing to mix.
pub const UNMIXED_COLOR: &str = "#808080";

/// The answer to one mix request.
///
/// Built fresh for every call and owned by the caller.
///
/// # Example
///
/// ```
/// use ryb_mix::{compute_best_mix, Paint};
///
/// let owned = [
///     Paint::new("white", "Titanium White", "#ffffff", "PW6"),
///     Paint::new("blue", "French Ultramarine", "#163e6f", "PB29"),
/// ];
/// let outcome = compute_best_mix("#163e6f", &owned, &owned).unwrap();
///
/// assert_eq!(outcome.mixed_color, "#163e6f");
/// assert_eq!(outcome.accuracy_percent, 100);
/// assert_eq!(outcome.instructions(), "Use French Ultramarine straight from the tube.");
/// assert!(outcome.suggestion.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixOutcome {
    /// Winning paints in enumeration order; empty only for an empty palette
    pub components: Vec<WeightedPaint>,
    /// Predicted color of the mix, `#rrggbb`
    pub mixed_color: String,
    /// Closeness to the target, 0..=100
    pub accuracy_percent: u8,
    /// A catalog paint that would improve a weak match
    pub suggestion: Option<Paint>,
}

impl MixOutcome {
    /// The outcome for an empty owned palette.
    pub fn unmixed() -> Self {
        Self {
            components: Vec::new(),
            mixed_color: UNMIXED_COLOR.to_string(),
            accuracy_percent: 0,
            suggestion: None,
        }
    }

    /// Sum of all component parts.
    pub fn total_parts(&self) -> u32 {
        self.components.iter().map(|c| c.parts).sum()
    }

    /// The recipe as a sentence.
    ///
    /// A single paint reads "Use X straight from the tube."; a mix reads
    /// "2 parts A + 1 part B". Empty when there are no components.
    pub fn instructions(&self) -> String {
        match self.components.as_slice() {
            [] => String::new(),
            [only] => format!("Use {} straight from the tube.", only.paint.name),
            many => many
                .iter()
                .map(|c| {
                    let unit = if c.parts == 1 { "part" } else { "parts" };
                    format!("{} {unit} {}", c.parts, c.paint.name)
                })
                .collect::<Vec<_>>()
                .join(" + "),
        }
    }

    /// A one-line tip about the suggested paint, if there is one.
    pub fn suggestion_tip(&self) -> Option<String> {
        self.suggestion.as_ref().map(|paint| {
            if paint.pigment_label.is_empty() {
                format!("Adding {} to your mix could improve the match.", paint.name)
            } else {
                format!(
                    "Adding {} ({}) to your mix could improve the match.",
                    paint.name, paint.pigment_label
                )
            }
        })
    }
}
