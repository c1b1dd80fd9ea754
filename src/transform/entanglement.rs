//! Entanglement mode: mirrored halves blended with their inverse, then BGR

use crate::math::parameters::entanglement_mix;
use ndarray::{Array3, Axis, s};

/// Blend the halves and reverse the channel order
///
/// The split point is `width / 2`. The left half becomes
/// `left * (1 - mix) + (255 - mirror(right)) * mix` and the right half its
/// mirror image. On odd widths the last column sits outside both halves and
/// keeps its values (it is still channel-swapped). Callers guarantee
/// `width >= 2`.
pub fn apply(working: &mut Array3<f64>, probability: f64) {
    let mid = working.len_of(Axis(1)) / 2;
    let mix = entanglement_mix(probability);

    let left = working.slice(s![.., ..mid, ..]).to_owned();
    let right_inverted = working
        .slice(s![.., mid..2 * mid;-1, ..])
        .mapv(|value| 255.0 - value);
    let blended = left * (1.0 - mix) + right_inverted * mix;

    working.slice_mut(s![.., ..mid, ..]).assign(&blended);
    working
        .slice_mut(s![.., mid..2 * mid, ..])
        .assign(&blended.slice(s![.., ..;-1, ..]));

    *working = swap_to_bgr(working);

    tracing::debug!(mix, probability, "entanglement applied");
}

/// Reverse the channel axis, turning RGB into BGR
pub fn swap_to_bgr(working: &Array3<f64>) -> Array3<f64> {
    working.slice(s![.., .., ..;-1]).to_owned()
}
