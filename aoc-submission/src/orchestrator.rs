//! Driving one puzzle attempt from solving to a recorded verdict

use crate::error::{AttemptError, BoxError};
use crate::model::{PuzzleId, SubmissionRecord, SubmissionStatus};
use crate::reconcile::{extract_correct_answers, reconciled_records};
use crate::store::SubmissionStore;
use crate::transport::{PuzzleInputs, SubmissionTransport};
use chrono::{TimeDelta, Utc};
use tracing::{info, warn};

/// How an attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// An accepted answer is already on record; nothing was run
    AlreadySolved,
    /// The answer was computed but submission is disabled for this part
    ReportOnly,
    /// Previous submissions already decide the answer; nothing was sent
    Judged(SubmissionStatus),
    /// The answer was sent and the server's reply was recognised
    Submitted(SubmissionRecord),
    /// The server's reply was not recognised; history was rebuilt from the
    /// puzzle page and `record` carries the verdict derived from it
    Reconciled {
        record: SubmissionRecord,
        server_message: String,
    },
}

impl Verdict {
    /// The answer status this verdict establishes, if any
    pub fn status(&self) -> Option<SubmissionStatus> {
        match self {
            Self::AlreadySolved => Some(SubmissionStatus::Correct),
            Self::ReportOnly => None,
            Self::Judged(status) => Some(*status),
            Self::Submitted(record) | Self::Reconciled { record, .. } => Some(record.status()),
        }
    }
}

/// Outcome of [`Orchestrator::attempt`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub puzzle: PuzzleId,
    /// The computed answer, absent when the puzzle was skipped
    pub answer: Option<String>,
    /// Time spent solving the real input
    pub solve_duration: Option<TimeDelta>,
    pub verdict: Verdict,
}

/// Runs puzzle attempts against a submission store
///
/// Attempts are meant to run one after another; the store is borrowed
/// mutably for the orchestrator's whole lifetime.
pub struct Orchestrator<'s, I, T> {
    store: &'s mut SubmissionStore,
    inputs: I,
    transport: T,
}

impl<'s, I, T> Orchestrator<'s, I, T>
where
    I: PuzzleInputs,
    T: SubmissionTransport,
{
    pub fn new(store: &'s mut SubmissionStore, inputs: I, transport: T) -> Self {
        Self {
            store,
            inputs,
            transport,
        }
    }

    pub fn store(&self) -> &SubmissionStore {
        &*self.store
    }

    /// Solve `puzzle` and, when `auto_submit` is set, submit the answer unless
    /// the history already decides it
    pub fn attempt<S, E>(
        &mut self,
        puzzle: PuzzleId,
        solver: S,
        auto_submit: bool,
    ) -> Result<Attempt, AttemptError>
    where
        S: Fn(&str) -> Result<String, E>,
        E: Into<BoxError>,
    {
        if self.store.is_already_solved(puzzle) {
            info!("{puzzle} has already been solved, skipping");
            return Ok(Attempt {
                puzzle,
                answer: None,
                solve_duration: None,
                verdict: Verdict::AlreadySolved,
            });
        }

        self.run_on_sample(puzzle, &solver)?;

        let input = self
            .inputs
            .input(puzzle)
            .map_err(|source| AttemptError::Input { puzzle, source })?;

        let solve_start = Utc::now();
        let answer = solver(input.as_str()).map_err(|e| AttemptError::Solve {
            puzzle,
            source: e.into(),
        })?;
        let solve_duration = Utc::now() - solve_start;
        info!("{puzzle}: {answer}");

        let verdict = if auto_submit {
            self.judge_or_submit(puzzle, &answer)?
        } else {
            Verdict::ReportOnly
        };

        Ok(Attempt {
            puzzle,
            answer: Some(answer),
            solve_duration: Some(solve_duration),
            verdict,
        })
    }

    fn run_on_sample<S, E>(&self, puzzle: PuzzleId, solver: &S) -> Result<(), AttemptError>
    where
        S: Fn(&str) -> Result<String, E>,
        E: Into<BoxError>,
    {
        let sample = self
            .inputs
            .sample(puzzle)
            .map_err(|source| AttemptError::Sample { puzzle, source })?;

        if let Some(sample) = sample {
            match solver(sample.as_str()) {
                Ok(answer) => info!("{puzzle} (sample input): {answer}"),
                Err(e) => {
                    let e: BoxError = e.into();
                    warn!("{puzzle} (sample input) failed: {e}");
                }
            }
        }
        Ok(())
    }

    fn judge_or_submit(&mut self, puzzle: PuzzleId, answer: &str) -> Result<Verdict, AttemptError> {
        let judged = self.store.judge(puzzle, answer);
        if judged != SubmissionStatus::Unknown {
            info!(
                "{puzzle} (judged from {} previous submission(s)): {judged}",
                self.store.history(puzzle).len()
            );
            return Ok(Verdict::Judged(judged));
        }

        let response = self
            .transport
            .submit_answer(puzzle, answer)
            .map_err(|source| AttemptError::Submit {
                puzzle,
                answer: answer.to_string(),
                source,
            })?;

        let record = SubmissionRecord::now(puzzle, answer, response);
        if record.status() == SubmissionStatus::Unknown {
            return self.reconcile(record);
        }

        info!("{record}");
        self.store.record([record.clone()]);
        Ok(Verdict::Submitted(record))
    }

    /// Rebuild history from the puzzle page after an unrecognised reply
    ///
    /// The unrecognised submission itself is not stored.
    fn reconcile(&mut self, submission: SubmissionRecord) -> Result<Verdict, AttemptError> {
        let puzzle = submission.puzzle();
        warn!(
            "{puzzle}: unrecognised server response, checking the puzzle page: {}",
            submission.response()
        );

        let page = self
            .transport
            .puzzle_page(puzzle)
            .map_err(|source| AttemptError::PuzzlePage { puzzle, source })?;

        let answers = extract_correct_answers(&page);
        let recovered = reconciled_records(puzzle, &answers, Utc::now().timestamp_millis());
        info!(
            "{puzzle}: recovered {} accepted answer(s) from the puzzle page",
            recovered.len()
        );
        self.store.record(recovered);

        let status = self.store.judge(puzzle, submission.answer());
        let record = SubmissionRecord::now(puzzle, submission.answer(), status.canonical_message());
        info!("{record}");

        Ok(Verdict::Reconciled {
            record,
            server_message: submission.response().to_string(),
        })
    }
}
