//! Error types for the st-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for both CLI and GUI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to parse database: {0}")]
    Parse(String),

    #[error("Failed to read database file: {path}")]
    DatabaseRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Alloy not found: {0}")]
    NotFound(String),

    #[error("Alloy '{alloy}' has no observations to fit")]
    InsufficientData { alloy: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Export failed for {path}: {message}")]
    Export { path: PathBuf, message: String },

    #[error("No database loaded")]
    NoDatabase,

    #[error("No alloy selected")]
    NoSelection,
}

/// Result type for st-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<st_db::DbError> for AppError {
    fn from(err: st_db::DbError) -> Self {
        match err {
            st_db::DbError::NotFound { alloy } => AppError::NotFound(alloy),
            other => AppError::Parse(other.to_string()),
        }
    }
}

impl From<st_core::CoreError> for AppError {
    fn from(err: st_core::CoreError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}
