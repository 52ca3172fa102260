//! Color types and conversion utilities
//!
//! Four spaces, each with one job:
//!
//! - **sRGB** ([`Srgb`]): input/output. Hex strings from the catalog and the
//!   target color are parsed here, mixed colors are formatted from here.
//! - **RYB** ([`Ryb`]): pigment arithmetic. Paints are blended as weighted
//!   sums of pigment amounts.
//! - **Linear RGB / XYZ** ([`LinearRgb`], [`Xyz`]): intermediate steps toward Lab.
//! - **CIE Lab** ([`Lab`]): scoring. ΔE between a candidate and the target
//!   decides which mix wins.
//!
//! # Example
//!
//! ```
//! use ryb_mix::{Lab, Ryb, Srgb};
//!
//! let yellow: Srgb = "#ffff00".parse().unwrap();
//! let pigment = Ryb::from_srgb(yellow);
//! let back = Srgb::from(pigment);
//! assert!(Lab::from(back).delta_e(Lab::from(yellow)) < 2.0);
//! ```

mod lab;
mod linear_rgb;
mod ryb;
mod srgb;
mod xyz;

pub use lab::{hex_to_lab, Lab, D65_WHITE};
pub use linear_rgb::{srgb_to_linear, LinearRgb};
pub use ryb::{
    rgb_to_ryb, ryb_to_rgb, Ryb, INVERSE_MAX_ITERATIONS, INVERSE_TOLERANCE, RYB_CORNERS,
};
pub use srgb::{hex_to_rgb, rgb_to_hex, Srgb};
pub use xyz::Xyz;
