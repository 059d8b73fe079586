//! Internal audit log: one semicolon-separated line per ledger mutation.

use super::store::DELIMITER;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::Local;
use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry (header on first write).
    pub fn write(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        // Timestamp locale, ISO 8601
        let now = Local::now().to_rfc3339();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let is_empty = file.metadata()?.len() == 0;

        let mut wtr = WriterBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(is_empty)
            .from_writer(file);

        wtr.serialize(AuditEntry {
            date: now,
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        })?;
        wtr.flush()?;

        Ok(())
    }

    /// Non-blocking variant: a failing audit write only warns.
    pub fn note(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = self.write(operation, target, message) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }

    pub fn read_all(&self) -> AppResult<Vec<AuditEntry>> {
        let file = match fs::File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut rdr = ReaderBuilder::new().delimiter(DELIMITER).from_reader(file);

        let mut entries = Vec::new();
        for r in rdr.deserialize() {
            entries.push(r?);
        }
        Ok(entries)
    }
}
