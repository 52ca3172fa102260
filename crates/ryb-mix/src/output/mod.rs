//! Result of a mix request.
//!
//! [`MixOutcome`] is what [`compute_best_mix`](crate::compute_best_mix)
//! returns: the winning components with their parts, the color they mix to,
//! the accuracy against the target, and optionally one catalog paint worth
//! buying. It also renders the recipe as a sentence for display.

mod outcome;

pub use outcome::{MixOutcome, UNMIXED_COLOR};
