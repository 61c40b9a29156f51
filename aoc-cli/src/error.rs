//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("HTTP client error: {0}")]
    Http(#[from] aoc_http_client::AocError),

    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    #[error("Submission history error: {0}")]
    Store(#[from] aoc_submission::StoreError),

    /// Some puzzles could not be attempted; each was already reported
    #[error("{0} puzzle attempt(s) failed")]
    AttemptsFailed(usize),
}

/// Cache-specific errors
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create {}: {source}", path.display())]
    DirCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
