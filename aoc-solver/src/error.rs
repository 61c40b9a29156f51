//! Error types for the solver registry

use thiserror::Error;

/// Error type for parsing input data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
    #[error("Parse error: {0}")]
    Other(String),
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The requested part is outside `1..=PARTS`
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for looking up and running a registered solver
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("No solver registered for year {0} day {1}")]
    NotFound(u16, u8),
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Error type for building the registration table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    /// Year before 2015 or day outside 1..=25
    #[error("Year {0} day {1} is not an Advent of Code puzzle")]
    InvalidPuzzle(u16, u8),
    /// A solver must provide one or two parts
    #[error("Solver for year {year} day {day} declares {parts} parts, expected 1 or 2")]
    InvalidPartCount { year: u16, day: u8, parts: u8 },
    #[error("No solver registered for year {0} day {1}")]
    UnknownSolver(u16, u8),
    #[error("Year {year} day {day} has no part {part}")]
    InvalidPart { year: u16, day: u8, part: u8 },
}
