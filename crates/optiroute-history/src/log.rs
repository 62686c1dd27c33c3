// SPDX-FileCopyrightText: 2026 OptiRoute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Append-only JSONL request log.
//!
//! One JSON record per line. The log is owned entirely by the calling layer;
//! the router itself stays stateless. `clear` resets history and stats to
//! zero.

use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use optiroute_core::OptirouteError;
use tracing::{debug, warn};

use crate::record::{RequestRecord, RouterStats};

/// Persistent request log backed by a JSONL file.
pub struct HistoryLog {
    path: PathBuf,
}

impl HistoryLog {
    /// Open a history log at the given path, creating parent directories.
    ///
    /// The file itself is created lazily on first append; a missing file
    /// reads as an empty log.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, OptirouteError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(map_io_err)?;
            }
        }
        Ok(Self { path })
    }

    /// Path of the underlying log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a record to the log.
    pub fn append(&self, record: &RequestRecord) -> Result<(), OptirouteError> {
        let line = serde_json::to_string(record).map_err(|e| OptirouteError::History {
            source: Box::new(e),
        })?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(map_io_err)?;
        writeln!(file, "{line}").map_err(map_io_err)?;
        debug!(path = %self.path.display(), target = %record.target, "request recorded");
        Ok(())
    }

    /// Load all records, oldest first.
    ///
    /// Malformed lines are skipped with a warning so a torn write cannot
    /// make the whole log unreadable.
    pub fn load(&self) -> Result<Vec<RequestRecord>, OptirouteError> {
        let file = match fs::File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(map_io_err(e)),
        };

        let mut records = Vec::new();
        for (number, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(map_io_err)?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<RequestRecord>(&line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!(line = number + 1, error = %e, "skipping malformed history record");
                }
            }
        }
        Ok(records)
    }

    /// Load the most recent `limit` records, newest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<RequestRecord>, OptirouteError> {
        let mut records = self.load()?;
        records.reverse();
        records.truncate(limit);
        Ok(records)
    }

    /// Reset the log to zero, removing all records.
    pub fn clear(&self) -> Result<(), OptirouteError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(map_io_err(e)),
        }
    }

    /// Compute aggregate stats over the whole log.
    pub fn stats(&self, savings_per_fast_route_usd: f64) -> Result<RouterStats, OptirouteError> {
        let records = self.load()?;
        let mut stats = RouterStats::default();
        for record in &records {
            stats.total_requests += 1;
            match record.target.as_str() {
                "fast" => stats.fast_requests += 1,
                "smart" => stats.smart_requests += 1,
                other => warn!(target = other, "unknown routing target in history record"),
            }
            if !record.success {
                stats.failed_requests += 1;
            }
        }
        stats.estimated_savings_usd = stats.fast_requests as f64 * savings_per_fast_route_usd;
        Ok(stats)
    }
}

/// Convert an I/O error into `OptirouteError::History`.
fn map_io_err(e: std::io::Error) -> OptirouteError {
    OptirouteError::History {
        source: Box::new(e),
    }
}
