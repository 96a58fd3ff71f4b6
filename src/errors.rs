//! Unified application error type.
//! All modules (store, core, bot, cli) return AppError to keep the error
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

    // ---------------------------
    // Command arguments
    // ---------------------------
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ---------------------------
    // Log store
    // ---------------------------
    #[error("Interrupt log unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Failed to scan interrupt log: {0}")]
    ScanFailed(String),

    // ---------------------------
    // Config / startup errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing chat credential: environment variable {0} is not set")]
    MissingToken(String),
}

pub type AppResult<T> = Result<T, AppError>;
