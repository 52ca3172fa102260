//! Paint and weighted paint records.

use serde::{Deserialize, Serialize};

use super::error::ParseColorError;
use crate::color::Srgb;

/// A paint as supplied by the catalog.
///
/// Immutable reference data: the engine clones paints into its results but
/// never modifies or persists them.
///
/// # Example
///
/// ```
/// use ryb_mix::Paint;
///
/// let paint = Paint::new("wn-ultramarine", "French Ultramarine", "#163e6f", "PB29")
///     .with_brand("Winsor & Newton");
/// assert_eq!(paint.srgb().unwrap().to_hex(), "#163e6f");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Paint {
    /// Unique catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// sRGB swatch color as a hex string
    #[serde(rename = "hex")]
    pub hex_color: String,
    /// Colour Index pigment code(s), e.g. `PB29`
    #[serde(rename = "pigment", default)]
    pub pigment_label: String,
    /// Brand the paint belongs to, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

impl Paint {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        hex_color: impl Into<String>,
        pigment_label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hex_color: hex_color.into(),
            pigment_label: pigment_label.into(),
            brand: None,
        }
    }

    /// Attach a brand name.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Parse the swatch color.
    pub fn srgb(&self) -> Result<Srgb, ParseColorError> {
        self.hex_color.parse()
    }
}

/// A paint together with its integer share of a mix.
///
/// Parts are kept exactly as enumerated (e.g. `2:2:1` is not reduced).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedPaint {
    pub paint: Paint,
    pub parts: u32,
}

impl WeightedPaint {
    pub fn new(paint: Paint, parts: u32) -> Self {
        Self { paint, parts }
    }

    /// This component's share of `total_parts`, rounded to a whole percent.
    ///
    /// Returns 0 when `total_parts` is 0.
    pub fn percent_of(&self, total_parts: u32) -> u32 {
        if total_parts == 0 {
            return 0;
        }
        (self.parts as f64 / total_parts as f64 * 100.0).round() as u32
    }
}
