//! Photo distortion driven by the measured bias of a simulated qubit
//!
//! A run samples binary outcomes from a [`source::qubit::ProbabilitySource`],
//! turns the fraction of ones into the strength of one of three image
//! transforms, appends a line to an append-only research log and renders a
//! certificate documenting the result.

/// Certificates and circuit diagrams
pub mod certificate;
/// Input/output operations and error handling
pub mod io;
/// Parameter mappings and array helpers
pub mod math;
/// Run orchestration
pub mod pipeline;
/// Probability sources
pub mod source;
/// The three distortion modes
pub mod transform;

pub use io::error::{MementoError, Result};
pub use transform::Mode;
