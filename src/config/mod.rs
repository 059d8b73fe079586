use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// How `current overtime` derives the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "snake_case")]
pub enum OvertimeModel {
    /// Persisted running balance, updated by `net - standard` at each day end.
    #[default]
    Incremental,
    /// Verbatim sum of the ledger's net-hours column.
    LedgerSum,
}

impl OvertimeModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            OvertimeModel::Incremental => "incremental",
            OvertimeModel::LedgerSum => "ledger_sum",
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_ledger")]
    pub ledger: String,
    #[serde(default = "default_balance_file")]
    pub balance_file: String,
    #[serde(default = "default_audit_log")]
    pub audit_log: String,
    #[serde(default = "default_standard_day_hours")]
    pub standard_day_hours: f64,
    #[serde(default)]
    pub overtime_model: OvertimeModel,
    #[serde(default = "default_max_comment_chars")]
    pub max_comment_chars: usize,
}

fn default_ledger() -> String {
    "worktime.csv".to_string()
}
fn default_balance_file() -> String {
    "overtime.yml".to_string()
}
fn default_audit_log() -> String {
    "worktime.log.csv".to_string()
}
fn default_standard_day_hours() -> f64 {
    8.0
}
fn default_max_comment_chars() -> usize {
    500
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger: default_ledger(),
            balance_file: default_balance_file(),
            audit_log: default_audit_log(),
            standard_day_hours: default_standard_day_hours(),
            overtime_model: OvertimeModel::default(),
            max_comment_chars: default_max_comment_chars(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".worktime")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("worktime.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !(self.standard_day_hours > 0.0 && self.standard_day_hours <= 24.0) {
            return Err(AppError::Config(format!(
                "standard_day_hours must be within (0, 24], got {}",
                self.standard_day_hours
            )));
        }
        if self.ledger.trim().is_empty() {
            return Err(AppError::Config("ledger path is empty".into()));
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)
    }

    /// Write the configuration file, creating its directory.
    pub fn save(&self) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        let yaml = self.to_yaml()?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(path)
    }
}
