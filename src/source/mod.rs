//! Random-probability sources feeding the transforms

/// Simulated qubit sampler and the injectable source trait
pub mod qubit;
/// Two-outcome count record and derived probability
pub mod sample;
/// Timeout wrapper for blocking samplers
pub mod timeout;
