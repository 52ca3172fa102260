//! sRGB color type and hex string handling
//!
//! sRGB is the encoding every paint swatch, catalog entry and target color
//! arrives in. Hex strings are parsed into [`Srgb`] once and formatted back
//! in a single normalized form.

use std::fmt;
use std::str::FromStr;

use crate::paint::ParseColorError;

/// A color in sRGB color space.
///
/// Channels are gamma-encoded and stored as `0.0..=1.0` (mapping to
/// `0..=255` for 8-bit). The RYB model operates directly on these encoded
/// values; the Lab conversion linearizes them first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red channel (gamma-encoded, 0.0..=1.0)
    pub r: f64,
    /// Green channel (gamma-encoded, 0.0..=1.0)
    pub g: f64,
    /// Blue channel (gamma-encoded, 0.0..=1.0)
    pub b: f64,
}

impl Srgb {
    /// Create a new Srgb color from float values in `0.0..=1.0`.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create an Srgb color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use ryb_mix::Srgb;
    /// let red = Srgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Create an Srgb color from a byte array `[R, G, B]`.
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`, rounding and clamping each channel.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            channel_to_u8(self.r * 255.0),
            channel_to_u8(self.g * 255.0),
            channel_to_u8(self.b * 255.0),
        ]
    }

    /// Snap to the nearest 8-bit color.
    ///
    /// Every color that leaves the engine as a hex string is quantized this
    /// way before it is scored, so distances always describe the color the
    /// caller actually sees.
    #[inline]
    pub fn quantized(self) -> Self {
        Self::from_bytes(self.to_bytes())
    }

    /// Format as a lower-case `#rrggbb` string.
    ///
    /// # Example
    /// ```
    /// use ryb_mix::Srgb;
    /// assert_eq!(Srgb::from_u8(58, 110, 165).to_hex(), "#3a6ea5");
    /// ```
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

#[inline]
fn channel_to_u8(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Srgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Srgb {
    type Err = ParseColorError;

    /// Parse an sRGB color from a hex string.
    ///
    /// Accepted forms are `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`. The
    /// shorthand form doubles each digit. Parsing is case-insensitive and
    /// surrounding whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ryb_mix::Srgb;
    ///
    /// let white: Srgb = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white.r, 1.0);
    ///
    /// let red: Srgb = "#f00".parse().unwrap();
    /// assert_eq!(red.to_hex(), "#ff0000");
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(s).map(Self::from_bytes)
    }
}

/// Parse a hex color string into three 8-bit channels.
///
/// See [`Srgb::from_str`] for the accepted forms.
pub fn hex_to_rgb(hex: &str) -> Result<[u8; 3], ParseColorError> {
    let s = hex.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    let digits = s
        .chars()
        .map(|c| {
            c.to_digit(16)
                .map(|d| d as u8)
                .ok_or(ParseColorError::InvalidDigit(c))
        })
        .collect::<Result<Vec<u8>, _>>()?;

    match digits[..] {
        // Shorthand: 0xF * 17 = 0xFF
        [r, g, b] => Ok([r * 17, g * 17, b * 17]),
        [r1, r2, g1, g2, b1, b2] => Ok([r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2]),
        _ => Err(ParseColorError::InvalidLength(digits.len())),
    }
}

/// Format three 0–255 channel values as a lower-case `#rrggbb` string.
///
/// Channels are rounded and clamped before formatting, so out-of-range
/// intermediate results are safe to pass in.
///
/// # Example
/// ```
/// use ryb_mix::rgb_to_hex;
/// assert_eq!(rgb_to_hex(300.0, 127.6, -4.0), "#ff8000");
/// ```
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        channel_to_u8(r),
        channel_to_u8(g),
        channel_to_u8(b)
    )
}
