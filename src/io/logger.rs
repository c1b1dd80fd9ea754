//! Append-only research log with one CSV line per run

use crate::io::configuration::TIMESTAMP_FORMAT;
use crate::io::error::{MementoError, Result};
use crate::transform::Mode;
use chrono::{Local, NaiveDateTime, SubsecRound};
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{Arc, Mutex};

/// One run as stored in the research log
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    /// Local wall-clock time of the run, second precision
    pub timestamp: NaiveDateTime,
    /// Transform applied
    pub mode: Mode,
    /// Number of shots sampled
    pub shots: u32,
    /// Sampled probability of outcome 1
    pub probability: f64,
}

impl LogRecord {
    /// Record stamped with the current local time
    pub fn now(mode: Mode, shots: u32, probability: f64) -> Self {
        Self {
            timestamp: Local::now().naive_local().trunc_subsecs(0),
            mode,
            shots,
            probability,
        }
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{:.4}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.mode,
            self.shots,
            self.probability
        )
    }
}

impl FromStr for LogRecord {
    type Err = String;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let fields: Vec<&str> = line.trim_end().split(',').collect();
        let [timestamp, mode, shots, probability] = fields.as_slice() else {
            return Err(format!("expected 4 fields, found {}", fields.len()));
        };

        let timestamp = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
            .map_err(|e| format!("bad timestamp '{timestamp}': {e}"))?;
        let mode = mode.parse::<Mode>().map_err(|e| e.to_string())?;
        let shots = shots
            .parse::<u32>()
            .map_err(|e| format!("bad shot count '{shots}': {e}"))?;
        let probability = probability
            .parse::<f64>()
            .map_err(|e| format!("bad probability '{probability}': {e}"))?;

        Ok(Self {
            timestamp,
            mode,
            shots,
            probability,
        })
    }
}

/// Appends [`LogRecord`]s to a file, creating it on first write
///
/// Clones share one lock, so concurrent runs never interleave partial lines.
/// Each append opens the file, writes the whole line in a single call, flushes
/// and closes it again, so no handle outlives the call.
#[derive(Debug, Clone)]
pub struct RunLogger {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl RunLogger {
    /// Logger writing to `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Location of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a record for a run that just finished
    ///
    /// # Errors
    ///
    /// Returns [`MementoError::LogWriteFailed`] if the file cannot be opened,
    /// written or flushed
    pub fn append(&self, mode: Mode, shots: u32, probability: f64) -> Result<LogRecord> {
        let record = LogRecord::now(mode, shots, probability);
        self.append_record(&record)?;
        Ok(record)
    }

    /// Append an already-built record
    ///
    /// # Errors
    ///
    /// Returns [`MementoError::LogWriteFailed`] if the file cannot be opened,
    /// written or flushed
    pub fn append_record(&self, record: &LogRecord) -> Result<()> {
        // A poisoned lock only means another append panicked; the file is still usable
        let _guard = self
            .lock
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let line = format!("{record}\n");
        let mut file = self.open_for_append()?;
        file.write_all(line.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| self.write_failed(e))?;

        tracing::debug!(path = %self.path.display(), %record, "run recorded");
        Ok(())
    }

    /// Read every record back in file order
    ///
    /// A missing file yields an empty history.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - A line does not match the log format
    pub fn records(&self) -> Result<Vec<LogRecord>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.read_failed(e)),
        };

        let mut records = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| self.read_failed(e))?;
            if line.trim().is_empty() {
                continue;
            }
            let record = line
                .parse::<LogRecord>()
                .map_err(|reason| MementoError::InvalidLogRecord {
                    line: index + 1,
                    reason,
                })?;
            records.push(record);
        }
        Ok(records)
    }

    fn open_for_append(&self) -> Result<File> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.write_failed(e))
    }

    fn write_failed(&self, source: std::io::Error) -> MementoError {
        MementoError::LogWriteFailed {
            path: self.path.clone(),
            source,
        }
    }

    fn read_failed(&self, source: std::io::Error) -> MementoError {
        MementoError::FileSystem {
            path: self.path.clone(),
            operation: "read research log",
            source,
        }
    }
}
