//! Unified application error type.
//! All modules (api, session, forms, cli, utils) return AppError to keep the
//! error handling consistent and easy to manage.

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
    // Network / API
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Session / auth
    // ---------------------------
    #[error("Failed to decode token")]
    TokenDecode,

    #[error("Not logged in. Run `volmgr login` first")]
    NotLoggedIn,

    #[error("You do not have permission to perform this action")]
    Forbidden,

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid task status: {0}")]
    InvalidStatus(String),

    #[error("Invalid field specification: {0}")]
    InvalidFieldSpec(String),

    #[error("Invalid field assignment: {0}")]
    InvalidFieldAssignment(String),

    // ---------------------------
    // Form logic errors
    // ---------------------------
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
