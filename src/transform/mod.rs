//! Probability-driven image distortion
//!
//! Images are `height × width × 3` RGB arrays. Every mode works on an `f64`
//! copy of the input, then clamps to [0, 255] and truncates back to `u8`, so the
//! caller's image is never modified.

/// Horizontal slice displacement with a red fade
pub mod collapse;
/// Mirrored, inverted blending of the two halves
pub mod entanglement;
/// Sparse replacement by a shifted, recoloured copy
pub mod tunneling;

use crate::io::error::{MementoError, Result, invalid_image};
use crate::math::parameters::validate_probability;
use ndarray::Array3;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Number of colour channels every transform expects
pub const CHANNELS: usize = 3;

/// Selects the distortion algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Shear random bands of rows sideways and fade the red channel
    Collapse,
    /// Punch a sparse mask of pixels through to a shifted, cooled layer
    Tunneling,
    /// Blend the left half with the inverted mirror of the right half
    Entanglement,
}

impl Mode {
    /// Every mode, in presentation order
    pub const ALL: [Self; 3] = [Self::Collapse, Self::Tunneling, Self::Entanglement];

    /// Lower-case key used in the research log and on the command line
    pub const fn key(self) -> &'static str {
        match self {
            Self::Collapse => "collapse",
            Self::Tunneling => "tunneling",
            Self::Entanglement => "entanglement",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Mode {
    type Err = MementoError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.key() == key)
            .ok_or_else(|| MementoError::InvalidMode {
                value: s.to_string(),
            })
    }
}

/// Apply `mode` to `image` with strength set by `probability`
///
/// Secondary randomness (slice positions, mask pixels) comes from `rng`, so a
/// seeded generator gives reproducible output.
///
/// # Errors
///
/// Returns an error if:
/// - `probability` is outside [0, 1] or NaN
/// - The image is empty or does not have exactly 3 channels
/// - The image is narrower than 2 pixels in entanglement mode
pub fn transform<R: Rng>(
    image: &Array3<u8>,
    probability: f64,
    mode: Mode,
    rng: &mut R,
) -> Result<Array3<u8>> {
    let probability = validate_probability(probability)?;
    validate_shape(image, mode)?;

    let mut working = image.mapv(f64::from);
    match mode {
        Mode::Collapse => collapse::apply(&mut working, probability, rng),
        Mode::Tunneling => tunneling::apply(&mut working, probability, rng),
        Mode::Entanglement => entanglement::apply(&mut working, probability),
    }

    Ok(quantize(&working))
}

fn validate_shape(image: &Array3<u8>, mode: Mode) -> Result<()> {
    let (height, width, channels) = image.dim();
    if channels != CHANNELS {
        return Err(invalid_image(&format!(
            "expected {CHANNELS} channels, found {channels}"
        )));
    }
    if height == 0 || width == 0 {
        return Err(invalid_image(&format!("empty image ({width}x{height})")));
    }
    if mode == Mode::Entanglement && width < 2 {
        return Err(invalid_image(&format!(
            "entanglement needs at least 2 columns, found {width}"
        )));
    }
    Ok(())
}

/// Clamp to the displayable range and truncate toward zero
fn quantize(working: &Array3<f64>) -> Array3<u8> {
    working.mapv(|value| value.clamp(0.0, 255.0) as u8)
}
