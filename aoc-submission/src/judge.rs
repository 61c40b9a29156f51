//! Answer judgment from previous submissions
//!
//! Classifies a candidate answer against the submission history of one puzzle
//! without contacting the server.
//!
//! The history is walked in chronological order:
//! - a previous submission with the exact same answer decides the verdict
//! - otherwise the first previous submission that is numerically comparable
//!   with the candidate decides, using the bound it established
//!
//! Only the first comparable submission is consulted. A tighter bound deeper in
//! the history is not looked for.

use crate::model::{SubmissionRecord, SubmissionStatus};
use std::cmp::Ordering;

/// Judge `candidate` against the history of a single puzzle
///
/// Returns [`SubmissionStatus::Unknown`] when nothing in the history says
/// anything about the candidate, which means it is safe to submit.
pub fn judge(history: &[SubmissionRecord], candidate: &str) -> SubmissionStatus {
    let candidate_value = Numeric::parse(candidate);

    for previous in history {
        if previous.answer() == candidate {
            return previous.status();
        }

        if let (Some(current), Some(bound)) = (candidate_value, Numeric::parse(previous.answer())) {
            return judge_against_bound(current, bound, previous.status());
        }
    }

    SubmissionStatus::Unknown
}

fn judge_against_bound(
    current: Numeric,
    bound: Numeric,
    bound_status: SubmissionStatus,
) -> SubmissionStatus {
    use crate::model::SubmissionStatus::*;

    match current.partial_cmp(&bound) {
        Some(Ordering::Less) if matches!(bound_status, TooLow | Correct) => TooLow,
        Some(Ordering::Greater) if matches!(bound_status, TooHigh | Correct) => TooHigh,
        _ => Unknown,
    }
}

/// A parsed numeric answer
///
/// Integers are kept exact so that large answers beyond `f64` precision still
/// compare correctly.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Numeric {
    Integer(i128),
    Float(f64),
}

impl Numeric {
    fn parse(text: &str) -> Option<Self> {
        if let Ok(value) = text.parse::<i128>() {
            return Some(Self::Integer(value));
        }
        text.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Self::Float)
    }

    fn as_f64(self) -> f64 {
        match self {
            Self::Integer(value) => value as f64,
            Self::Float(value) => value,
        }
    }
}

impl PartialOrd for Numeric {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Some(a.cmp(b)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}
