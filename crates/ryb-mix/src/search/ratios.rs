//! Fixed part-ratio tables.
//!
//! Table order is significant: on an exact distance tie the entry listed
//! first wins.

/// Part ratios tried for every pair of owned paints. The first value goes to
/// the pair's first paint.
pub static PAIR_RATIOS: [[u32; 2]; 9] = [
    [1, 1],
    [1, 2],
    [2, 1],
    [1, 3],
    [3, 1],
    [1, 4],
    [4, 1],
    [2, 3],
    [3, 2],
];

/// Part ratios tried for every triple of owned paints.
pub static TRIPLE_RATIOS: [[u32; 3]; 10] = [
    [1, 1, 1],
    [2, 1, 1],
    [1, 2, 1],
    [1, 1, 2],
    [3, 1, 1],
    [1, 3, 1],
    [1, 1, 3],
    [2, 2, 1],
    [2, 1, 2],
    [1, 2, 2],
];

/// `[current mix, candidate paint]` weights tried when looking for a paint
/// to add.
pub static SUGGESTION_WEIGHTS: [[f64; 2]; 3] = [[0.25, 0.75], [0.5, 0.5], [0.75, 0.25]];

/// Normalize integer parts to weights summing to 1.
pub fn parts_to_weights<const N: usize>(parts: &[u32; N]) -> [f64; N] {
    let total = parts.iter().sum::<u32>() as f64;
    let mut weights = [0.0; N];
    for (w, &p) in weights.iter_mut().zip(parts) {
        *w = p as f64 / total;
    }
    weights
}
