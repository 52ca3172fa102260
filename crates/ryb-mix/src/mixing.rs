//! Subtractive blending of weighted colors
//!
//! Colors are converted to RYB pigment amounts, averaged with the given
//! weights, and converted back. Mixing in RYB is what makes blue and yellow
//! come out green instead of grey.

use crate::color::{Ryb, Srgb};
use crate::paint::ParseColorError;

/// Returned when there is nothing to mix.
pub const EMPTY_MIX: Srgb = Srgb {
    r: 0.0,
    g: 0.0,
    b: 0.0,
};

/// Blend colors already expressed as pigment amounts.
///
/// The result is snapped to 8-bit sRGB, the precision it is reported in.
pub fn blend_pigments<I>(pigments: I) -> Srgb
where
    I: IntoIterator<Item = (Ryb, f64)>,
{
    Ryb::weighted_sum(pigments).to_srgb().quantized()
}

/// Mix colors at the given weights.
///
/// `weights` is aligned with `colors` by index and expected to sum to 1.
///
/// - no colors: [`EMPTY_MIX`] (black)
/// - one color: returned unchanged, its weight ignored
/// - otherwise: RYB inverse per color, weighted sum, forward map, quantize
///
/// # Example
///
/// ```
/// use ryb_mix::{mix_colors, Srgb};
///
/// let yellow = Srgb::from_u8(255, 255, 0);
/// let blue = Srgb::from_u8(0, 0, 255);
/// let [r, g, b] = mix_colors(&[yellow, blue], &[0.5, 0.5]).to_bytes();
/// // Pigment mixing: green dominates
/// assert!(g > r && g > b);
/// ```
pub fn mix_colors(colors: &[Srgb], weights: &[f64]) -> Srgb {
    debug_assert_eq!(
        colors.len(),
        weights.len(),
        "mix_colors: every color needs a weight"
    );

    match colors {
        [] => EMPTY_MIX,
        [single] => *single,
        _ => blend_pigments(
            colors
                .iter()
                .zip(weights)
                .map(|(&color, &weight)| (Ryb::from_srgb(color), weight)),
        ),
    }
}

/// [`mix_colors`] on hex strings.
///
/// A single color is returned in normalized `#rrggbb` form.
pub fn mix_hex(colors: &[&str], weights: &[f64]) -> Result<String, ParseColorError> {
    let parsed = colors
        .iter()
        .map(|hex| hex.parse::<Srgb>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(mix_colors(&parsed, weights).to_hex())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Lab;

    #[test]
    fn test_empty_is_black() {
        assert_eq!(mix_colors(&[], &[]), EMPTY_MIX);
        assert_eq!(mix_hex(&[], &[]).unwrap(), "#000000");
    }

    #[test]
    fn test_single_color_unchanged() {
        let color = Srgb::from_u8(0x3a, 0x6e, 0xa5);
        // Weight is ignored for a single color
        assert_eq!(mix_colors(&[color], &[0.3]), color);
        assert_eq!(mix_hex(&["#3A6EA5"], &[1.0]).unwrap(), "#3a6ea5");
    }

    #[test]
    fn test_yellow_and_blue_make_green() {
        let mixed = mix_hex(&["#ffff00", "#0000ff"], &[0.5, 0.5]).unwrap();
        let [r, g, b] = mixed.parse::<Srgb>().unwrap().to_bytes();
        assert!(g > r && g > b, "expected a green, got {mixed}");
    }

    #[test]
    fn test_white_lightens() {
        let red = Srgb::from_u8(255, 0, 0);
        let white = Srgb::from_u8(255, 255, 255);
        let tint = mix_colors(&[white, red], &[0.5, 0.5]);

        assert!(Lab::from(tint).l > Lab::from(red).l);
        let [r, g, b] = tint.to_bytes();
        assert!(r > g && r > b, "tint of red should stay reddish, got {tint}");
    }

    #[test]
    fn test_weights_shift_result() {
        let yellow = Srgb::from_u8(255, 255, 0);
        let blue = Srgb::from_u8(0, 0, 255);
        let mostly_yellow = Lab::from(mix_colors(&[yellow, blue], &[0.8, 0.2]));
        let mostly_blue = Lab::from(mix_colors(&[yellow, blue], &[0.2, 0.8]));
        assert!(mostly_yellow.l > mostly_blue.l);
        assert!(mostly_yellow.b > mostly_blue.b);
    }

    #[test]
    fn test_output_is_quantized() {
        let mixed = mix_colors(
            &[Srgb::from_u8(10, 200, 30), Srgb::from_u8(180, 20, 90)],
            &[0.4, 0.6],
        );
        assert_eq!(mixed, mixed.quantized());
    }

    #[test]
    fn test_mix_hex_propagates_parse_errors() {
        assert_eq!(
            mix_hex(&["#ffffff", "#zzzzzz"], &[0.5, 0.5]),
            Err(ParseColorError::InvalidDigit('z'))
        );
    }
}
