//! Unified application error type.
//! All modules (ledger, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Ledger file error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected DD.MM.YYYY)")]
    InvalidDate(String),

    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Malformed ledger row at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    // ---------------------------
    // State machine
    // ---------------------------
    #[error("{0}")]
    InvalidTransition(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

pub type AppResult<T> = Result<T, AppError>;
