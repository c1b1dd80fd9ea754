//! Numeric helpers shared by the transforms

/// Mapping from the sampled probability to per-mode filter parameters
pub mod parameters;
/// Circular shifts along an array axis
pub mod roll;
