//! Tunneling mode: a sparse mask of pixels swapped for a shifted, cooled layer

use crate::math::parameters::{
    TUNNELING_COOL_GAIN, TUNNELING_RED_GAIN, tunneling_attenuation, tunneling_density,
    tunneling_shift,
};
use crate::math::roll::roll;
use ndarray::{Array2, Array3, Axis, Zip, s};
use rand::Rng;

/// Draw a per-pixel mask where each entry is independently true with `density`
pub fn tunneling_mask<R: Rng>(
    height: usize,
    width: usize,
    density: f64,
    rng: &mut R,
) -> Array2<bool> {
    Array2::from_shape_simple_fn((height, width), || rng.random::<f64>() < density)
}

/// Build the tunnel layer: the image wrapped down and right by `shift`, with
/// green and blue boosted and red suppressed
pub fn tunnel_layer(working: &Array3<f64>, shift: usize) -> Array3<f64> {
    let shifted_rows = roll(working.view(), shift, Axis(0));
    let mut layer = roll(shifted_rows.view(), shift, Axis(1));

    layer
        .slice_mut(s![.., .., 1..3])
        .mapv_inplace(|value| value * TUNNELING_COOL_GAIN);
    layer
        .index_axis_mut(Axis(2), 0)
        .mapv_inplace(|red| red * TUNNELING_RED_GAIN);
    layer
}

/// Replace masked pixels with the tunnel layer and dim the rest
pub fn apply<R: Rng>(working: &mut Array3<f64>, probability: f64, rng: &mut R) {
    let (height, width, _) = working.dim();
    let density = tunneling_density(probability);
    let mask = tunneling_mask(height, width, density, rng);
    let layer = tunnel_layer(working, tunneling_shift(probability));
    let attenuation = tunneling_attenuation(probability);

    Zip::from(working.lanes_mut(Axis(2)))
        .and(layer.lanes(Axis(2)))
        .and(&mask)
        .for_each(|mut pixel, tunneled, &masked| {
            if masked {
                pixel.assign(&tunneled);
            } else {
                pixel.mapv_inplace(|value| value * attenuation);
            }
        });

    tracing::debug!(density, attenuation, probability, "tunneling applied");
}
