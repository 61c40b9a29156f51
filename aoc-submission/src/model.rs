//! Puzzle identifiers and submission records

use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Phrase the server uses when an answer is accepted
pub const CORRECT_PHRASE: &str = "That's the right answer!";
/// Phrase the server uses when an answer is rejected
pub const INCORRECT_PHRASE: &str = "That's not the right answer";
/// Hint appended to a rejection when the answer is below the solution
pub const TOO_LOW_PHRASE: &str = "your answer is too low";
/// Hint appended to a rejection when the answer is above the solution
pub const TOO_HIGH_PHRASE: &str = "your answer is too high";

/// One (year, day, part) unit of work
///
/// Ordered by year, then day, then part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PuzzleId {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl PuzzleId {
    pub const fn new(year: u16, day: u8, part: u8) -> Self {
        Self { year, day, part }
    }

    /// Same puzzle day, different part
    pub const fn with_part(self, part: u8) -> Self {
        Self { part, ..self }
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:02} Part {}", self.year, self.day, self.part)
    }
}

/// Verdict carried by a server response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionStatus {
    Correct,
    Incorrect,
    TooHigh,
    TooLow,
    Unknown,
}

impl SubmissionStatus {
    /// Classify a response message by the phrases it contains
    ///
    /// The bound hints are checked before the generic rejection phrase because
    /// the server sends both in the same sentence.
    pub fn from_response(response: &str) -> Self {
        if response.contains(CORRECT_PHRASE) {
            Self::Correct
        } else if response.contains(TOO_HIGH_PHRASE) {
            Self::TooHigh
        } else if response.contains(TOO_LOW_PHRASE) {
            Self::TooLow
        } else if response.contains(INCORRECT_PHRASE) {
            Self::Incorrect
        } else {
            // Already solved, not unlocked yet, throttled, or a wording change.
            Self::Unknown
        }
    }

    /// The server phrase that reproduces this status when classified again
    ///
    /// `Incorrect` and `Unknown` both render the generic rejection.
    pub fn canonical_message(self) -> &'static str {
        match self {
            Self::Correct => CORRECT_PHRASE,
            Self::TooHigh => TOO_HIGH_PHRASE,
            Self::TooLow => TOO_LOW_PHRASE,
            Self::Incorrect | Self::Unknown => INCORRECT_PHRASE,
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Correct => "correct",
            Self::Incorrect => "incorrect",
            Self::TooHigh => "too high",
            Self::TooLow => "too low",
            Self::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// One answer sent for one puzzle part, with the server's reply
///
/// Records are immutable. The status is derived from `response` every time it
/// is asked for, so stored data never disagrees with its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    #[serde(rename = "puzzleId")]
    puzzle: PuzzleId,
    #[serde(default, deserialize_with = "null_as_empty")]
    answer: String,
    #[serde(rename = "epochMillis")]
    epoch_millis: i64,
    response: String,
}

/// Older histories may hold `null` answers; they read as empty and never
/// compare as numbers.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl SubmissionRecord {
    pub fn new(
        puzzle: PuzzleId,
        answer: impl Into<String>,
        epoch_millis: i64,
        response: impl Into<String>,
    ) -> Self {
        Self {
            puzzle,
            answer: answer.into(),
            epoch_millis,
            response: response.into(),
        }
    }

    /// Create a record stamped with the current time
    pub fn now(puzzle: PuzzleId, answer: impl Into<String>, response: impl Into<String>) -> Self {
        Self::new(puzzle, answer, Utc::now().timestamp_millis(), response)
    }

    pub fn puzzle(&self) -> PuzzleId {
        self.puzzle
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn epoch_millis(&self) -> i64 {
        self.epoch_millis
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn status(&self) -> SubmissionStatus {
        SubmissionStatus::from_response(&self.response)
    }
}

impl fmt::Display for SubmissionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.puzzle, self.status(), self.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_puzzle_ordering() {
        let mut puzzles = vec![
            PuzzleId::new(2023, 2, 1),
            PuzzleId::new(2022, 25, 2),
            PuzzleId::new(2023, 1, 2),
            PuzzleId::new(2023, 1, 1),
        ];
        puzzles.sort();
        assert_eq!(
            puzzles,
            vec![
                PuzzleId::new(2022, 25, 2),
                PuzzleId::new(2023, 1, 1),
                PuzzleId::new(2023, 1, 2),
                PuzzleId::new(2023, 2, 1),
            ]
        );
    }

    #[test]
    fn test_puzzle_display() {
        assert_eq!(PuzzleId::new(2023, 7, 2).to_string(), "2023/07 Part 2");
    }

    #[test]
    fn test_status_from_server_messages() {
        let cases = [
            ("That's the right answer! You are one gold star closer.", SubmissionStatus::Correct),
            (
                "That's not the right answer; your answer is too low. Please wait one minute.",
                SubmissionStatus::TooLow,
            ),
            (
                "That's not the right answer; your answer is too high.",
                SubmissionStatus::TooHigh,
            ),
            (
                "That's not the right answer. If you're stuck, make sure you're using the full input data.",
                SubmissionStatus::Incorrect,
            ),
            (
                "You don't seem to be solving the right level.  Did you already complete it?",
                SubmissionStatus::Unknown,
            ),
            ("", SubmissionStatus::Unknown),
        ];
        for (message, expected) in cases {
            assert_eq!(SubmissionStatus::from_response(message), expected, "{message}");
        }
    }

    #[test]
    fn test_canonical_message_classifies_back() {
        for status in [
            SubmissionStatus::Correct,
            SubmissionStatus::TooHigh,
            SubmissionStatus::TooLow,
            SubmissionStatus::Incorrect,
        ] {
            assert_eq!(SubmissionStatus::from_response(status.canonical_message()), status);
        }
        assert_eq!(SubmissionStatus::Unknown.canonical_message(), INCORRECT_PHRASE);
    }

    #[test]
    fn test_record_json_layout() {
        let record = SubmissionRecord::new(
            PuzzleId::new(2023, 1, 1),
            "142",
            1_701_406_800_000,
            CORRECT_PHRASE,
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "puzzleId": { "year": 2023, "day": 1, "part": 1 },
                "answer": "142",
                "epochMillis": 1_701_406_800_000_i64,
                "response": "That's the right answer!",
            })
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_unrecognised_text_is_unknown(text in "[a-zA-Z0-9 .,?]{0,120}") {
            prop_assume!(!text.contains("right answer") && !text.contains("your answer is"));
            prop_assert_eq!(SubmissionStatus::from_response(&text), SubmissionStatus::Unknown);
        }

        #[test]
        fn prop_status_follows_response(
            prefix in "[a-zA-Z ]{0,40}",
            suffix in "[a-zA-Z ]{0,40}",
            phrase in prop::sample::select(vec![
                CORRECT_PHRASE, INCORRECT_PHRASE, TOO_LOW_PHRASE, TOO_HIGH_PHRASE,
            ]),
        ) {
            let response = format!("{prefix}{phrase}{suffix}");
            let record = SubmissionRecord::now(PuzzleId::new(2020, 5, 1), "1", response.clone());
            prop_assert_eq!(record.status(), SubmissionStatus::from_response(&response));
            prop_assert_ne!(record.status(), SubmissionStatus::Unknown);
        }
    }
}
