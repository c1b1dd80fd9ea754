//! Aggregated measurement counts and the probability derived from them

use crate::io::error::{Result, invalid_parameter};

/// Outcome counts of a batch of binary measurements
///
/// The outcome space is closed, so the counts live in two fields rather than a
/// keyed map. A total of zero is rejected at construction, which keeps
/// [`probability_of_one`] total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleResult {
    count_zero: u64,
    count_one: u64,
}

impl SampleResult {
    /// Build a result from the two outcome counts
    ///
    /// # Errors
    ///
    /// Returns an error if both counts are zero or their sum overflows `u64`
    pub fn new(count_zero: u64, count_one: u64) -> Result<Self> {
        if count_zero == 0 && count_one == 0 {
            return Err(invalid_parameter(
                "counts",
                &"0/0",
                &"a sample must contain at least one shot",
            ));
        }
        if count_zero.checked_add(count_one).is_none() {
            return Err(invalid_parameter(
                "counts",
                &format!("{count_zero}/{count_one}"),
                &"total shot count overflows",
            ));
        }
        Ok(Self {
            count_zero,
            count_one,
        })
    }

    /// Occurrences of outcome "0"
    pub const fn count_zero(&self) -> u64 {
        self.count_zero
    }

    /// Occurrences of outcome "1"
    pub const fn count_one(&self) -> u64 {
        self.count_one
    }

    /// Total number of shots in the sample
    pub const fn total(&self) -> u64 {
        self.count_zero + self.count_one
    }
}

/// Empirical probability that an outcome equals 1
pub fn probability_of_one(result: &SampleResult) -> f64 {
    result.count_one() as f64 / result.total() as f64
}
