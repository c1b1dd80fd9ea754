//! Deadline enforcement for blocking probability sources

use crate::io::error::{MementoError, Result, source_unavailable};
use crate::source::qubit::ProbabilitySource;
use crate::source::sample::SampleResult;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

/// Runs an inner source on a worker thread and gives up after a deadline
///
/// Every failure, including a late or miscounted result, is reported as
/// [`MementoError::SourceUnavailable`]. A sampler that overruns keeps its worker
/// thread until it returns; the result is then discarded.
pub struct TimedSource {
    inner: Arc<dyn ProbabilitySource>,
    timeout: Duration,
}

impl TimedSource {
    /// Wrap `inner` so each call fails once `timeout` has elapsed
    pub fn new(inner: Arc<dyn ProbabilitySource>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    /// Configured deadline per call
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl ProbabilitySource for TimedSource {
    fn sample(&self, shots: NonZeroU32) -> Result<SampleResult> {
        let (sender, receiver) = mpsc::channel();
        let inner = Arc::clone(&self.inner);

        let _worker = thread::Builder::new()
            .name("probability-source".to_string())
            .spawn(move || {
                // Receiver is gone if the deadline already passed
                let _ = sender.send(inner.sample(shots));
            })
            .map_err(|e| source_unavailable(&format!("cannot start sampler thread: {e}")))?;

        let result = match receiver.recv_timeout(self.timeout) {
            Ok(Ok(result)) => result,
            Ok(Err(error @ MementoError::SourceUnavailable { .. })) => return Err(error),
            Ok(Err(other)) => return Err(source_unavailable(&other)),
            Err(RecvTimeoutError::Timeout) => {
                tracing::warn!(
                    source = self.inner.name(),
                    timeout = ?self.timeout,
                    "sampler timed out"
                );
                return Err(source_unavailable(&format!(
                    "no result from '{}' within {:?}",
                    self.inner.name(),
                    self.timeout
                )));
            }
            Err(RecvTimeoutError::Disconnected) => {
                return Err(source_unavailable(&"sampler thread exited without a result"));
            }
        };

        if result.total() != u64::from(shots.get()) {
            return Err(source_unavailable(&format!(
                "requested {shots} shots but '{}' returned {}",
                self.inner.name(),
                result.total()
            )));
        }

        Ok(result)
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}
