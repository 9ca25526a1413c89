// src/error.rs

//! Error types for the upmwrap conversion pipeline
//!
//! Only two failures are hard: an unreadable source archive and a
//! pre-existing destination without `--force`. Everything else in the
//! pipeline degrades to a logged diagnostic.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the conversion pipeline
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to open archive {}: {source}", .path.display())]
    ArchiveOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Package directory already exists: {} (use --force to overwrite)", .0.display())]
    DestinationExists(PathBuf),

    #[error("Path traversal attempt: {0}")]
    PathTraversal(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Version control step failed: {0}")]
    VersionControl(String),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
