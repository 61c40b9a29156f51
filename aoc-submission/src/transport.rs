//! Interfaces to the outside world used by the orchestrator

use crate::error::BoxError;
use crate::model::PuzzleId;

/// Source of puzzle inputs
pub trait PuzzleInputs {
    /// The personal puzzle input
    fn input(&self, puzzle: PuzzleId) -> Result<String, BoxError>;

    /// The example input from the puzzle text, if one was provided
    fn sample(&self, puzzle: PuzzleId) -> Result<Option<String>, BoxError>;
}

/// Connection to the puzzle server
pub trait SubmissionTransport {
    /// Send an answer and return the server's response message as plain text
    fn submit_answer(&self, puzzle: PuzzleId, answer: &str) -> Result<String, BoxError>;

    /// Fetch the raw HTML of the puzzle page for the puzzle's day
    fn puzzle_page(&self, puzzle: PuzzleId) -> Result<String, BoxError>;
}

impl<T: PuzzleInputs + ?Sized> PuzzleInputs for &T {
    fn input(&self, puzzle: PuzzleId) -> Result<String, BoxError> {
        (**self).input(puzzle)
    }

    fn sample(&self, puzzle: PuzzleId) -> Result<Option<String>, BoxError> {
        (**self).sample(puzzle)
    }
}

impl<T: SubmissionTransport + ?Sized> SubmissionTransport for &T {
    fn submit_answer(&self, puzzle: PuzzleId, answer: &str) -> Result<String, BoxError> {
        (**self).submit_answer(puzzle, answer)
    }

    fn puzzle_page(&self, puzzle: PuzzleId) -> Result<String, BoxError> {
        (**self).puzzle_page(puzzle)
    }
}
