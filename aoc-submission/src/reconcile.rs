//! Recovering accepted answers from a puzzle page

use crate::model::{CORRECT_PHRASE, PuzzleId, SubmissionRecord};
use regex::Regex;
use std::sync::LazyLock;

static ANSWER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Your puzzle answer was <code>(.+?)</code>").expect("answer pattern is valid")
});

/// Accepted answers shown on a puzzle page, part 1 first
pub fn extract_correct_answers(page: &str) -> Vec<String> {
    ANSWER_REGEX
        .captures_iter(page)
        .filter_map(|captures| captures.get(1))
        .map(|answer| answer.as_str().to_string())
        .collect()
}

/// Build accepted submissions for the parts of `puzzle`'s day from page answers
///
/// One answer belongs to part 1, two answers to parts 1 and 2. Any other count
/// is not recognised and yields nothing.
pub fn reconciled_records(
    puzzle: PuzzleId,
    answers: &[String],
    epoch_millis: i64,
) -> Vec<SubmissionRecord> {
    if !(1..=2).contains(&answers.len()) {
        return Vec::new();
    }
    answers
        .iter()
        .zip(1u8..)
        .map(|(answer, part)| {
            SubmissionRecord::new(
                puzzle.with_part(part),
                answer.as_str(),
                epoch_millis,
                CORRECT_PHRASE,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SubmissionStatus;

    const PAGE: &str = r#"<main>
<article class="day-desc"><h2>--- Day 1: Trebuchet?! ---</h2><p>...</p></article>
<p>Your puzzle answer was <code>7</code>.</p>
<article class="day-desc"><h2 id="part2">--- Part Two ---</h2><p>...</p></article>
<p>Your puzzle answer was <code>14</code>.</p>
<p class="day-success">Both parts of this puzzle are complete! They provide two gold stars: **</p>
</main>"#;

    #[test]
    fn test_extract_both_answers() {
        assert_eq!(extract_correct_answers(PAGE), vec!["7", "14"]);
    }

    #[test]
    fn test_extract_nothing_from_unsolved_page() {
        let page = "<main><article><p>Some puzzle text</p></article></main>";
        assert!(extract_correct_answers(page).is_empty());
    }

    #[test]
    fn test_answers_on_one_line_stay_separate() {
        let page = "Your puzzle answer was <code>a</code>. Your puzzle answer was <code>b</code>.";
        assert_eq!(extract_correct_answers(page), vec!["a", "b"]);
    }

    #[test]
    fn test_records_for_two_answers() {
        let puzzle = PuzzleId::new(2023, 1, 2);
        let records = reconciled_records(puzzle, &["7".to_string(), "14".to_string()], 99);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].puzzle(), PuzzleId::new(2023, 1, 1));
        assert_eq!(records[0].answer(), "7");
        assert_eq!(records[1].puzzle(), PuzzleId::new(2023, 1, 2));
        assert_eq!(records[1].answer(), "14");
        assert!(records.iter().all(|r| r.status() == SubmissionStatus::Correct));
        assert!(records.iter().all(|r| r.epoch_millis() == 99));
    }

    #[test]
    fn test_records_for_one_answer() {
        let records = reconciled_records(PuzzleId::new(2023, 1, 2), &["7".to_string()], 0);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].puzzle().part, 1);
    }

    #[test]
    fn test_records_for_unexpected_count() {
        let answers: Vec<String> = vec!["1".into(), "2".into(), "3".into()];
        assert!(reconciled_records(PuzzleId::new(2023, 1, 1), &answers, 0).is_empty());
        assert!(reconciled_records(PuzzleId::new(2023, 1, 1), &[], 0).is_empty());
    }
}
