//! Per-run orchestration: sample, transform, record, certify

/// Session owning the run dependencies
pub mod session;
/// Run token minting
pub mod token;
