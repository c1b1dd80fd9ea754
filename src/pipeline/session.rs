//! Sequential run pipeline with explicitly injected dependencies

use crate::certificate::renderer::CertificateRenderer;
use crate::io::error::{Result, source_unavailable};
use crate::io::logger::{LogRecord, RunLogger};
use crate::pipeline::token::mint_token;
use crate::source::qubit::ProbabilitySource;
use crate::source::sample::{SampleResult, probability_of_one};
use crate::source::timeout::TimedSource;
use crate::transform::{Mode, transform};
use chrono::{Local, NaiveDateTime, SubsecRound};
use image::RgbImage;
use ndarray::Array3;
use rand::Rng;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Everything a finished run produced
///
/// The transformed image is always present. Logging and certificate rendering
/// are auxiliary, so their failures are carried here instead of aborting the run.
#[derive(Debug)]
pub struct RunOutcome {
    /// Distorted copy of the input image
    pub image: Array3<u8>,
    /// Counts returned by the probability source
    pub sample: SampleResult,
    /// Probability of outcome 1 derived from `sample`
    pub probability: f64,
    /// Transform that was applied
    pub mode: Mode,
    /// Display token minted for this run
    pub token: String,
    /// Time of the run, shared by the log record and certificate
    pub timestamp: NaiveDateTime,
    /// Result of appending to the research log
    pub log: Result<LogRecord>,
    /// Rendered certificate, or why it is unavailable; `None` when the
    /// session does not issue certificates
    pub certificate: Option<Result<RgbImage>>,
}

/// Holds the source, logger and renderer for the lifetime of the program
pub struct Session {
    source: Arc<dyn ProbabilitySource>,
    logger: RunLogger,
    renderer: Option<CertificateRenderer>,
}

impl Session {
    /// Session calling `source` directly
    pub fn new(
        source: Arc<dyn ProbabilitySource>,
        logger: RunLogger,
        renderer: CertificateRenderer,
    ) -> Self {
        Self {
            source,
            logger,
            renderer: Some(renderer),
        }
    }

    /// Session whose sampling calls fail after `timeout`
    pub fn with_timeout(
        source: Arc<dyn ProbabilitySource>,
        timeout: Duration,
        logger: RunLogger,
        renderer: CertificateRenderer,
    ) -> Self {
        Self::new(Arc::new(TimedSource::new(source, timeout)), logger, renderer)
    }

    /// Stop rendering certificates for subsequent runs
    #[must_use]
    pub fn without_certificates(mut self) -> Self {
        self.renderer = None;
        self
    }

    /// Research log shared by every run of this session
    pub const fn logger(&self) -> &RunLogger {
        &self.logger
    }

    /// Execute one run
    ///
    /// Sampling and transforming are fatal steps: if either fails nothing is
    /// logged and no image is returned. Logging and rendering failures are
    /// reported through [`RunOutcome`] and a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The probability source is unavailable or miscounts the shots
    /// - The image does not satisfy the transform's shape requirements
    pub fn run<R: Rng>(
        &self,
        image: &Array3<u8>,
        mode: Mode,
        shots: NonZeroU32,
        rng: &mut R,
    ) -> Result<RunOutcome> {
        let sample = self.source.sample(shots)?;
        if sample.total() != u64::from(shots.get()) {
            return Err(source_unavailable(&format!(
                "requested {shots} shots but received {}",
                sample.total()
            )));
        }

        let probability = probability_of_one(&sample);
        tracing::info!(
            source = self.source.name(),
            shots = shots.get(),
            ones = sample.count_one(),
            probability,
            %mode,
            "sampled"
        );

        let image = transform(image, probability, mode, rng)?;

        let log = self.logger.append(mode, shots.get(), probability);
        let timestamp = match &log {
            Ok(record) => record.timestamp,
            Err(e) => {
                tracing::warn!(error = %e, "run not recorded in research log");
                Local::now().naive_local().trunc_subsecs(0)
            }
        };

        let token = mint_token();
        let certificate = self
            .renderer
            .as_ref()
            .map(|renderer| renderer.render(&token, probability, mode, timestamp));
        if let Some(Err(e)) = &certificate {
            tracing::warn!(error = %e, "certificate unavailable");
        }

        Ok(RunOutcome {
            image,
            sample,
            probability,
            mode,
            token,
            timestamp,
            log,
            certificate,
        })
    }
}
