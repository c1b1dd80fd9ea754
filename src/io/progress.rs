//! Spinner while the sampler blocks, plus a batch bar for multi-file runs

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

const SPINNER_TICK: Duration = Duration::from_millis(100);

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg} [{elapsed}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Photos: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for one or more photos
///
/// A batch bar only appears when more than one photo is processed.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
        }
    }

    /// Prepare the display for `file_count` photos
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }
    }

    /// Show a spinner while a photo is being sampled and transformed
    pub fn start_file(&self, path: &Path, shots: u32) -> ProgressBar {
        let spinner = self.multi_progress.add(ProgressBar::new_spinner());
        spinner.set_style(SPINNER_STYLE.clone());
        spinner.set_message(format!(
            "Calculating quantum state for {} ({shots} shots)",
            path.file_name().unwrap_or_default().to_string_lossy()
        ));
        spinner.enable_steady_tick(SPINNER_TICK);
        spinner
    }

    /// Remove the spinner and advance the batch bar
    pub fn complete_file(&self, spinner: &ProgressBar) {
        spinner.finish_and_clear();
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Remove the spinner of a photo that failed, leaving the batch bar as is
    pub fn abandon_file(&self, spinner: &ProgressBar) {
        spinner.finish_and_clear();
        self.multi_progress.remove(spinner);
    }

    /// Number of photos completed so far in a batch
    pub fn completed(&self) -> u64 {
        self.batch_bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All photos processed");
        }
        let _ = self.multi_progress.clear();
    }
}
