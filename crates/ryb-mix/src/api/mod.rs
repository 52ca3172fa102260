//! Public API for the ryb-mix crate.
//!
//! This module provides the high-level API: the [`PaintMixer`] builder, the
//! [`compute_best_mix`] shortcut, and the [`MixError`] unified error type.

mod builder;
mod error;

pub use builder::{
    compute_best_mix, PaintMixer, DEFAULT_MAX_COMPONENTS, DEFAULT_SUGGESTION_THRESHOLD,
};
pub use error::MixError;
