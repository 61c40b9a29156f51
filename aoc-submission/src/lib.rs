//! Submission tracking for Advent of Code
//!
//! Remembers every answer sent to the puzzle server and decides, before an
//! answer goes out, whether the server's verdict is already known. The server
//! rate-limits submissions and adds a growing delay for wrong answers, so
//! avoiding a pointless submission is worth a lot.
//!
//! # Overview
//!
//! - [`SubmissionRecord`]: one answer and the server's reply. Its
//!   [`SubmissionStatus`] is always derived from the reply text.
//! - [`judge`]: classifies a candidate answer from past submissions, including
//!   "too high"/"too low" inference for numeric answers.
//! - [`SubmissionStore`]: the persistent history, loaded once and flushed once.
//! - [`Orchestrator`]: runs one puzzle attempt end to end.
//!
//! # Example
//!
//! ```
//! use aoc_submission::{judge, PuzzleId, SubmissionRecord, SubmissionStatus};
//!
//! let puzzle = PuzzleId::new(2023, 1, 1);
//! let history = [SubmissionRecord::new(
//!     puzzle,
//!     "42",
//!     0,
//!     "That's not the right answer; your answer is too high.",
//! )];
//!
//! assert_eq!(judge(&history, "50"), SubmissionStatus::TooHigh);
//! assert_eq!(judge(&history, "30"), SubmissionStatus::Unknown);
//! ```
//!
//! The store is meant to be owned by the top-level run loop through
//! [`with_store`], which flushes it whatever the outcome of the run:
//!
//! ```no_run
//! use aoc_submission::{with_store, PuzzleId, StoreError};
//!
//! # fn main() -> Result<(), StoreError> {
//! with_store("/tmp/aoc/submissions.json", |store| {
//!     let solved = store.is_already_solved(PuzzleId::new(2023, 1, 1));
//!     println!("already solved: {}", solved);
//!     Ok::<_, StoreError>(())
//! })?;
//! # Ok(())
//! # }
//! ```

mod error;
mod judge;
mod model;
mod orchestrator;
mod reconcile;
mod store;
mod transport;

pub use error::{AttemptError, BoxError, StoreError};
pub use judge::judge;
pub use model::{
    CORRECT_PHRASE, INCORRECT_PHRASE, PuzzleId, SubmissionRecord, SubmissionStatus,
    TOO_HIGH_PHRASE, TOO_LOW_PHRASE,
};
pub use orchestrator::{Attempt, Orchestrator, Verdict};
pub use reconcile::{extract_correct_answers, reconciled_records};
pub use store::{SubmissionStore, with_store};
pub use transport::{PuzzleInputs, SubmissionTransport};
