//! Persisted overtime balance (incremental model).
//!
//! A single YAML document next to the ledger, e.g.
//!
//! ```yaml
//! balance_hours: 1.5
//! updated_at: 2025-01-15T17:30:00+01:00
//! ```

use super::codec::stored_hours;
use super::fs_utils::replace_file;
use crate::errors::{AppError, AppResult};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Balance {
    pub balance_hours: f64,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone)]
pub struct BalanceFile {
    path: PathBuf,
}

impl BalanceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file → zero balance.
    pub fn load(&self) -> AppResult<Balance> {
        match fs::read_to_string(&self.path) {
            Ok(content) => serde_yaml::from_str(&content).map_err(|e| {
                AppError::Config(format!(
                    "cannot read balance file {}: {}",
                    self.path.display(),
                    e
                ))
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Balance::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn store(&self, hours: f64) -> AppResult<Balance> {
        let balance = Balance {
            balance_hours: stored_hours(hours),
            updated_at: Local::now().to_rfc3339(),
        };
        let yaml = serde_yaml::to_string(&balance).map_err(|_| AppError::ConfigSave)?;
        replace_file(&self.path, yaml.as_bytes())?;
        Ok(balance)
    }

    /// Persist `current` moved by `delta` hours and return the new state.
    /// Callers load `current` before touching the ledger, so an unreadable
    /// balance file aborts the operation before any row is written.
    pub fn apply_delta(&self, current: &Balance, delta: f64) -> AppResult<Balance> {
        self.store(current.balance_hours + stored_hours(delta))
    }
}
