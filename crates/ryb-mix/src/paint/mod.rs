//! Paint reference data
//!
//! [`Paint`] records are owned by the catalog and only read here.
//! [`WeightedPaint`] pairs one of them with its share of a mix.

mod error;
mod paint;

pub use error::ParseColorError;
pub use paint::{Paint, WeightedPaint};
