//! Artifact persistence.
//!
//! # Layout
//! ```text
//! <data_dir>/
//!     network_data_YYYYMMDD.json      one Sample per line, appended each cycle
//!     traceroute_YYYYMMDD_HHMMSS.txt  written when a diagnostics trace succeeds
//!     report_YYYYMMDD_HHMMSS.txt      hourly and at shutdown
//! ```
//!
//! # Design Decisions
//! - Writes are plain blocking file I/O; one small write per cycle
//! - Failures are returned to the caller, which logs them and carries on;
//!   in-memory history is never touched from here

pub mod sample_log;

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::monitor::types::Sample;

/// Errors raised while reading or writing artifacts.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode sample: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("{path}:{line}: malformed sample: {source}")]
    Parse {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StorageError + '_ {
    move |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Writes and reads monitoring artifacts under one directory.
#[derive(Debug, Clone)]
pub struct DataStore {
    dir: PathBuf,
}

impl DataStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the sample log for a `YYYYMMDD` day key.
    pub fn daily_log_path(&self, day_key: &str) -> PathBuf {
        self.dir.join(format!("network_data_{day_key}.json"))
    }

    pub fn trace_path(&self, stamp_key: &str) -> PathBuf {
        self.dir.join(format!("traceroute_{stamp_key}.txt"))
    }

    pub fn report_path(&self, stamp_key: &str) -> PathBuf {
        self.dir.join(format!("report_{stamp_key}.txt"))
    }

    fn ensure_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(io_error(&self.dir))
    }

    /// Append a sample to the log of the day it was taken.
    pub fn append_sample(&self, sample: &Sample) -> Result<PathBuf, StorageError> {
        self.ensure_dir()?;
        let path = self.daily_log_path(&sample.day_key());
        let line = sample_log::encode_line(sample)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(io_error(&path))?;
        file.write_all(line.as_bytes()).map_err(io_error(&path))?;
        Ok(path)
    }

    /// Read every sample from a daily log, in file order.
    pub fn read_samples(&self, path: &Path) -> Result<Vec<Sample>, StorageError> {
        let file = File::open(path).map_err(io_error(path))?;
        let mut samples = Vec::new();
        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(io_error(path))?;
            if line.trim().is_empty() {
                continue;
            }
            let sample = sample_log::decode_line(&line).map_err(|source| StorageError::Parse {
                path: path.to_path_buf(),
                line: idx + 1,
                source,
            })?;
            samples.push(sample);
        }
        Ok(samples)
    }

    pub fn write_trace(&self, stamp_key: &str, output: &str) -> Result<PathBuf, StorageError> {
        self.write_text(self.trace_path(stamp_key), output)
    }

    /// Save a report. A report already written under the same stamp is kept
    /// and the new one gets a numeric suffix.
    pub fn write_report(&self, stamp_key: &str, report: &str) -> Result<PathBuf, StorageError> {
        self.ensure_dir()?;
        let mut path = self.report_path(stamp_key);
        let mut suffix = 1;
        while path.exists() {
            path = self.dir.join(format!("report_{stamp_key}_{suffix}.txt"));
            suffix += 1;
        }
        self.write_text(path, report)
    }

    fn write_text(&self, path: PathBuf, text: &str) -> Result<PathBuf, StorageError> {
        self.ensure_dir()?;
        fs::write(&path, text).map_err(io_error(&path))?;
        Ok(path)
    }
}
