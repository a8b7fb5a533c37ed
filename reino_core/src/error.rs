//! Error types for the core crate.
//!
//! Library errors are typed with `thiserror`; the desktop shell wraps
//! them with `anyhow` context at its boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// No home directory to resolve the settings path against.
    #[error("no home directory to store settings in")]
    NoHome,

    /// Persisted state failed to serialize.
    #[error("settings serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Underlying file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CoreResult<T> = Result<T, CoreError>;
