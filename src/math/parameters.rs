//! Probability-to-parameter mappings for the three transform modes
//!
//! The sampled probability only sets the strength of each effect. Positions,
//! thicknesses and masks are drawn separately by the transforms themselves.

use crate::io::error::{MementoError, Result};

/// Fewest slices displaced in collapse mode (probability 0)
pub const COLLAPSE_MIN_SLICES: usize = 10;
/// Additional slices reached at probability 1
pub const COLLAPSE_SLICE_SPAN: f64 = 60.0;
/// Rows near the bottom edge excluded from slice origins
pub const COLLAPSE_ORIGIN_MARGIN: usize = 30;
/// Half-open range of slice thicknesses in rows
pub const COLLAPSE_THICKNESS: std::ops::Range<usize> = 10..50;
/// Half-open range of raw horizontal shifts before probability scaling
pub const COLLAPSE_RAW_SHIFT: std::ops::Range<u32> = 200..500;
/// Red channel gain applied after slicing
pub const COLLAPSE_RED_GAIN: f64 = 0.4;

/// Mask density at probability 0
pub const TUNNELING_BASE_DENSITY: f64 = 0.05;
/// Density added at probability 1
pub const TUNNELING_DENSITY_SPAN: f64 = 0.15;
/// Layer offset in pixels at probability 1
pub const TUNNELING_MAX_SHIFT: f64 = 50.0;
/// Gain on green and blue in the tunnel layer
pub const TUNNELING_COOL_GAIN: f64 = 1.5;
/// Gain on red in the tunnel layer
pub const TUNNELING_RED_GAIN: f64 = 0.2;

/// Ensure a probability lies within the closed unit interval
///
/// # Errors
///
/// Returns [`MementoError::InvalidProbability`] for values below 0, above 1, or NaN
pub fn validate_probability(probability: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&probability) {
        Ok(probability)
    } else {
        Err(MementoError::InvalidProbability { value: probability })
    }
}

/// Number of horizontal slices displaced in collapse mode, in [10, 70]
pub fn collapse_slice_count(probability: f64) -> usize {
    (probability * COLLAPSE_SLICE_SPAN).floor() as usize + COLLAPSE_MIN_SLICES
}

/// Horizontal displacement of one slice given its raw draw
pub fn collapse_shift(raw_shift: u32, probability: f64) -> usize {
    (f64::from(raw_shift) * probability).floor() as usize
}

/// Fraction of pixels replaced by the tunnel layer, in [0.05, 0.20]
pub fn tunneling_density(probability: f64) -> f64 {
    probability.mul_add(TUNNELING_DENSITY_SPAN, TUNNELING_BASE_DENSITY)
}

/// Row and column offset of the tunnel layer
pub fn tunneling_shift(probability: f64) -> usize {
    (TUNNELING_MAX_SHIFT * probability).floor() as usize
}

/// Gain applied to pixels the tunnel layer leaves untouched
pub fn tunneling_attenuation(probability: f64) -> f64 {
    0.05_f64.mul_add(1.0 - probability, 0.95)
}

/// Blend weight of the inverted mirror half, peaking at 1 for probability 0.5
pub fn entanglement_mix(probability: f64) -> f64 {
    (probability - 0.5).abs().mul_add(-2.0, 1.0)
}
