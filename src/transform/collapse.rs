//! Collapse mode: bands of rows sheared sideways, then a red fade

use crate::math::parameters::{
    COLLAPSE_ORIGIN_MARGIN, COLLAPSE_RAW_SHIFT, COLLAPSE_RED_GAIN, COLLAPSE_THICKNESS,
    collapse_shift, collapse_slice_count,
};
use crate::math::roll::roll;
use ndarray::{Array3, Axis, s};
use rand::Rng;

/// Displace `collapse_slice_count(probability)` random bands of rows
///
/// Each band starts above the bottom margin, is 10 to 49 rows thick (clipped at
/// the last row) and wraps horizontally by a raw draw in [200, 500) scaled by
/// `probability`. Images no taller than the margin take every band from row 0.
pub fn apply<R: Rng>(working: &mut Array3<f64>, probability: f64, rng: &mut R) {
    let height = working.len_of(Axis(0));
    let origin_limit = height.saturating_sub(COLLAPSE_ORIGIN_MARGIN).max(1);
    let slices = collapse_slice_count(probability);

    for _ in 0..slices {
        let top = rng.random_range(0..origin_limit);
        let thickness = rng.random_range(COLLAPSE_THICKNESS);
        let shift = collapse_shift(rng.random_range(COLLAPSE_RAW_SHIFT), probability);
        let bottom = (top + thickness).min(height);

        let band = roll(working.slice(s![top..bottom, .., ..]), shift, Axis(1));
        working.slice_mut(s![top..bottom, .., ..]).assign(&band);
    }

    working
        .index_axis_mut(Axis(2), 0)
        .mapv_inplace(|red| red * COLLAPSE_RED_GAIN);

    tracing::debug!(slices, probability, "collapse applied");
}
