//! Unified application error type.
//! Every module (config, input, core, export, cli) returns AppError so a
//! failed run always surfaces as one clear message.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time window: {0}")]
    InvalidWindow(String),

    #[error("Invalid timestamp at row {row} for employee '{employee}': {value}")]
    InvalidTimestamp {
        row: usize,
        employee: String,
        value: String,
    },

    #[error("Missing required columns: {0}")]
    MissingColumns(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),

    // ---------------------------
    // Export / convert errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Conversion error: {0}")]
    Convert(String),
}

pub type AppResult<T> = Result<T, AppError>;
