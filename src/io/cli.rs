//! Command-line interface: capture moments from photos, inspect the research log

use crate::certificate::circuit::render_circuit_diagram;
use crate::certificate::renderer::CertificateRenderer;
use crate::io::configuration::{
    CERTIFICATE_SUFFIX, DEFAULT_BACKGROUND_FILE, DEFAULT_CIRCUIT_FILE, DEFAULT_LOG_FILE,
    DEFAULT_SHOTS, DEFAULT_SOURCE_TIMEOUT, EQUAL_SUPERPOSITION, MAX_SHOTS, MIN_SHOTS,
    OUTPUT_SUFFIX,
};
use crate::io::error::{MementoError, Result, invalid_parameter};
use crate::io::image::{array_to_rgb, load_rgb_array, save_rgb};
use crate::io::logger::RunLogger;
use crate::io::progress::ProgressManager;
use crate::pipeline::session::Session;
use crate::source::qubit::SimulatedQubit;
use crate::transform::Mode;
use clap::{Args, Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Extensions accepted as uploads
pub const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

#[derive(Parser)]
#[command(name = "qmemento")]
#[command(
    author,
    version,
    about = "Distort photos with qubit-sampled randomness and issue a certificate per run"
)]
/// Command-line arguments shared by all subcommands
pub struct Cli {
    /// Action to perform
    #[command(subcommand)]
    pub command: Command,

    /// Append-only research log
    #[arg(long, global = true, env = "QMEMENTO_LOG", default_value = DEFAULT_LOG_FILE)]
    pub log: PathBuf,

    /// Suppress progress output and informational logs
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Capture a quantum moment for a photo or every photo in a directory
    Run(RunArgs),
    /// Print the runs recorded in the research log
    History,
    /// Write a diagram of the sampling circuit
    Circuit {
        /// Output PNG path
        #[arg(default_value = DEFAULT_CIRCUIT_FILE)]
        output: PathBuf,
    },
}

/// Arguments of the `run` subcommand
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
#[derive(Args)]
pub struct RunArgs {
    /// Input photo (PNG or JPEG) or directory of photos
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Distortion mode: collapse, tunneling or entanglement
    #[arg(short, long, default_value = "collapse")]
    pub mode: Mode,

    /// Number of shots drawn from the qubit
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_SHOTS,
        value_parser = clap::value_parser!(u32).range(i64::from(MIN_SHOTS)..=i64::from(MAX_SHOTS))
    )]
    pub shots: u32,

    /// Probability that a shot measures 1
    #[arg(short, long, default_value_t = EQUAL_SUPERPOSITION)]
    pub bias: f64,

    /// Seed for reproducible sampling and distortion
    #[arg(long)]
    pub seed: Option<u64>,

    /// Seconds to wait for the sampler before giving up
    #[arg(short, long, default_value_t = DEFAULT_SOURCE_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Certificate background, used when the file exists
    #[arg(long, env = "QMEMENTO_BACKGROUND", default_value = DEFAULT_BACKGROUND_FILE)]
    pub background: PathBuf,

    /// Skip writing certificates
    #[arg(long)]
    pub no_certificate: bool,

    /// Process photos even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl RunArgs {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }
}

/// Install the diagnostic subscriber; `RUST_LOG` overrides the default level
pub fn init_tracing(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A subscriber installed earlier (e.g. by a test harness) stays in place
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

impl Cli {
    /// Dispatch to the selected subcommand
    ///
    /// # Errors
    ///
    /// Returns an error if the subcommand fails; see [`FileProcessor::process`]
    pub fn execute(self) -> Result<()> {
        match self.command {
            Command::Run(args) => {
                let mut processor = FileProcessor::new(args, &self.log, self.quiet)?;
                processor.process()
            }
            Command::History => print_history(&RunLogger::new(&self.log)),
            Command::Circuit { output } => {
                save_rgb(&render_circuit_diagram(), &output)?;
                tracing::info!(path = %output.display(), "circuit diagram written");
                Ok(())
            }
        }
    }
}

// Allow print for the history listing, which is the command's output
#[allow(clippy::print_stdout)]
fn print_history(logger: &RunLogger) -> Result<()> {
    let records = logger.records()?;
    if records.is_empty() {
        tracing::info!(path = %logger.path().display(), "research log is empty");
        return Ok(());
    }
    for record in &records {
        println!("{record}");
    }
    let mean = records.iter().map(|r| r.probability).sum::<f64>() / records.len() as f64;
    tracing::info!(runs = records.len(), mean_probability = mean, "history summary");
    Ok(())
}

/// Runs every photo of a target through one shared [`Session`]
pub struct FileProcessor {
    args: RunArgs,
    session: Session,
    shots: NonZeroU32,
    rng: StdRng,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Build the session (sampler, logger, renderer) once for the whole batch
    ///
    /// # Errors
    ///
    /// Returns an error if the bias is outside [0, 1] or the shot count is zero
    pub fn new(args: RunArgs, log_path: &Path, quiet: bool) -> Result<Self> {
        let shots = NonZeroU32::new(args.shots)
            .ok_or_else(|| invalid_parameter("shots", &args.shots, &"must be positive"))?;
        let qubit = SimulatedQubit::with_bias(args.bias, args.seed)?;
        let mut session = Session::with_timeout(
            Arc::new(qubit),
            Duration::from_secs(args.timeout),
            RunLogger::new(log_path),
            CertificateRenderer::with_background(&args.background),
        );
        if args.no_certificate {
            session = session.without_certificates();
        }
        // Offset keeps the distortion stream independent of the sampler stream
        let rng = args.seed.map_or_else(StdRng::from_os_rng, |seed| {
            StdRng::seed_from_u64(seed.wrapping_add(1))
        });
        let progress_manager = (!quiet).then(ProgressManager::new);

        Ok(Self {
            args,
            session,
            shots,
            rng,
            progress_manager,
        })
    }

    /// Process every photo named by the target
    ///
    /// # Errors
    ///
    /// Returns an error if target validation fails, or if a photo cannot be
    /// loaded, sampled, transformed or saved. Log and certificate failures are
    /// only warned about.
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.args.target;
        if target.is_file() {
            if is_image(target) {
                Ok(if self.should_process_file(target) {
                    vec![target.clone()]
                } else {
                    vec![]
                })
            } else {
                Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"must be a PNG or JPEG image",
                ))
            }
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|e| read_dir_failed(target, e))?;
            let mut files = Vec::new();
            for entry in entries {
                let path = entry.map_err(|e| read_dir_failed(target, e))?.path();
                if is_image(&path) && !is_generated(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be an image file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.args.skip_existing() {
            return true;
        }

        if output_path(input_path).exists() {
            tracing::info!(path = %input_path.display(), "skipping (output exists)");
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        let spinner = self
            .progress_manager
            .as_ref()
            .map(|pm| pm.start_file(input_path, self.shots.get()));

        let result = self.capture(input_path);

        if let (Some(pm), Some(spinner)) = (&self.progress_manager, &spinner) {
            if result.is_ok() {
                pm.complete_file(spinner);
            } else {
                pm.abandon_file(spinner);
            }
        }

        result
    }

    fn capture(&mut self, input_path: &Path) -> Result<()> {
        let photo = load_rgb_array(input_path)?;
        let outcome = self
            .session
            .run(&photo, self.args.mode, self.shots, &mut self.rng)?;

        let output = output_path(input_path);
        save_rgb(&array_to_rgb(&outcome.image)?, &output)?;

        // Certificates are auxiliary: a failed render or save never stops the batch
        match outcome.certificate {
            Some(Ok(certificate)) => {
                if let Err(e) = save_rgb(&certificate, certificate_path(input_path)) {
                    tracing::warn!(error = %e, "certificate not written");
                }
            }
            Some(Err(e)) => tracing::warn!(error = %e, "certificate not written"),
            None => {}
        }

        tracing::info!(
            input = %input_path.display(),
            output = %output.display(),
            token = %outcome.token,
            energy_index = %format!("{:.4}%", outcome.probability * 100.0),
            logged = outcome.log.is_ok(),
            "moment captured"
        );

        Ok(())
    }
}

fn read_dir_failed(path: &Path, source: std::io::Error) -> MementoError {
    MementoError::FileSystem {
        path: path.to_path_buf(),
        operation: "read directory",
        source,
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

fn is_generated(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX) || stem.ends_with(CERTIFICATE_SUFFIX))
}

/// Where the distorted copy of `input_path` is written
pub fn output_path(input_path: &Path) -> PathBuf {
    sibling_png(input_path, OUTPUT_SUFFIX)
}

/// Where the certificate for `input_path` is written
pub fn certificate_path(input_path: &Path) -> PathBuf {
    sibling_png(input_path, CERTIFICATE_SUFFIX)
}

fn sibling_png(input_path: &Path, suffix: &str) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let name = format!("{}{suffix}.png", stem.to_string_lossy());

    if let Some(parent) = input_path.parent() {
        parent.join(name)
    } else {
        PathBuf::from(name)
    }
}
