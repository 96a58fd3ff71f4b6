//! Append-only monthly log store.
//!
//! One plain-text file per calendar month, one JSON record per line. Every
//! call performs a full open→operate→close cycle; there is no locking and
//! no cached state across calls. Validation of the records themselves is
//! the callers' responsibility.

use crate::errors::{AppError, AppResult};
use crate::models::InterruptEvent;
use chrono::{DateTime, Datelike, Local, Month};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Lines, Write};
use std::path::{Path, PathBuf};

/// Identifies one monthly log file. Callers derive the key once per
/// logical operation and thread it through, so that a record's timestamp
/// and its target file always come from the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32, // 1..=12
}

impl MonthKey {
    pub fn from_datetime(now: DateTime<Local>) -> Self {
        Self {
            year: now.year(),
            month: now.month(),
        }
    }

    /// English month name ("January", ..., "December").
    pub fn month_name(&self) -> &'static str {
        // self.month comes from chrono and is always in 1..=12
        Month::try_from(self.month as u8)
            .map(|m| m.name())
            .unwrap_or("Unknown")
    }

    pub fn file_name(&self) -> String {
        format!("{}-{}-interrupts.json.log", self.year, self.month_name())
    }
}

/// Durable store for interrupt events, partitioned by month.
pub struct MonthlyLogStore {
    data_dir: PathBuf,
}

impl MonthlyLogStore {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, key: &MonthKey) -> PathBuf {
        self.data_dir.join(key.file_name())
    }

    /// Append one event to the month's log file, creating the file if it
    /// does not exist yet. The line either fully lands or the call fails;
    /// there is no partial-write repair.
    pub fn append(&self, key: &MonthKey, event: &InterruptEvent) -> AppResult<()> {
        let mut line = serde_json::to_vec(event)
            .map_err(|e| AppError::StoreUnavailable(format!("cannot encode record: {}", e)))?;
        line.push(b'\n');

        let path = self.path_for(key);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                AppError::StoreUnavailable(format!("cannot open {}: {}", path.display(), e))
            })?;

        file.write_all(&line).and_then(|_| file.flush()).map_err(|e| {
            AppError::StoreUnavailable(format!("cannot write {}: {}", path.display(), e))
        })
    }

    /// Open the month's log for a full scan. An absent file is created
    /// empty, so "no data yet" reads the same as an empty month. Each call
    /// re-opens the file and starts from the first line.
    pub fn scan(&self, key: &MonthKey) -> AppResult<Scan> {
        let path = self.path_for(key);
        let file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&path)
            .map_err(|e| {
                AppError::StoreUnavailable(format!("cannot open {}: {}", path.display(), e))
            })?;

        Ok(Scan {
            lines: BufReader::new(file).lines(),
            malformed: 0,
        })
    }
}

/// Lazy, file-order iterator over one month's records.
///
/// Each line decodes into a fresh record. A line that fails to decode is
/// skipped and counted in `malformed`; only a stream-level read fault
/// surfaces as `ScanFailed`.
pub struct Scan {
    lines: Lines<BufReader<File>>,
    pub malformed: usize,
}

impl Iterator for Scan {
    type Item = AppResult<InterruptEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next()? {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    match serde_json::from_str::<InterruptEvent>(&line) {
                        Ok(event) => return Some(Ok(event)),
                        Err(_) => {
                            self.malformed += 1;
                            continue;
                        }
                    }
                }
                Err(e) => return Some(Err(AppError::ScanFailed(e.to_string()))),
            }
        }
    }
}
