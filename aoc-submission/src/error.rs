//! Error types for submission tracking

use crate::model::PuzzleId;
use std::path::PathBuf;
use thiserror::Error;

/// Boxed error returned by external collaborators
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failures while loading or persisting the submission history
///
/// All of these are fatal: losing or misreading history can lead to answers
/// being submitted twice.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store file did not exist and could not be created
    #[error("Failed to create submission store {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store file exists but could not be read
    #[error("Failed to read submission store {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store file is not a valid list of submissions
    #[error("Submission store {} is malformed (repair or delete it): {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The history could not be encoded
    #[error("Failed to serialize submission history for {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The history could not be written back
    #[error("Failed to write submission store {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures of a single puzzle attempt
#[derive(Error, Debug)]
pub enum AttemptError {
    #[error("{puzzle}: failed to fetch input: {source}")]
    Input {
        puzzle: PuzzleId,
        #[source]
        source: BoxError,
    },

    #[error("{puzzle}: failed to read sample input: {source}")]
    Sample {
        puzzle: PuzzleId,
        #[source]
        source: BoxError,
    },

    #[error("{puzzle}: solver failed: {source}")]
    Solve {
        puzzle: PuzzleId,
        #[source]
        source: BoxError,
    },

    #[error("{puzzle}: failed to submit answer {answer}: {source}")]
    Submit {
        puzzle: PuzzleId,
        answer: String,
        #[source]
        source: BoxError,
    },

    #[error("{puzzle}: failed to fetch puzzle page: {source}")]
    PuzzlePage {
        puzzle: PuzzleId,
        #[source]
        source: BoxError,
    },
}

impl AttemptError {
    /// The puzzle whose attempt failed
    pub fn puzzle(&self) -> PuzzleId {
        match self {
            Self::Input { puzzle, .. }
            | Self::Sample { puzzle, .. }
            | Self::Solve { puzzle, .. }
            | Self::Submit { puzzle, .. }
            | Self::PuzzlePage { puzzle, .. } => *puzzle,
        }
    }
}
