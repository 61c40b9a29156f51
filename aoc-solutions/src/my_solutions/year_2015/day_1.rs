//! Not Quite Lisp: follow parentheses up and down a building

use aoc_solver::{AutoRegisterSolver, ParseError, SolveError};

#[derive(AutoRegisterSolver)]
#[aoc(year = 2015, day = 1, tags = ["parsing", "easy"], submit = [1, 2])]
pub struct Solver;

impl aoc_solver::Solver for Solver {
    /// Floor change per instruction
    type Parsed = Vec<i8>;
    const PARTS: u8 = 2;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        input
            .trim_end()
            .chars()
            .enumerate()
            .map(|(position, c)| match c {
                '(' => Ok(1),
                ')' => Ok(-1),
                _ => Err(ParseError::InvalidFormat(format!(
                    "unexpected {c:?} at position {}",
                    position + 1
                ))),
            })
            .collect()
    }

    fn solve_part(parsed: &mut Self::Parsed, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(parsed.iter().map(|&step| i64::from(step)).sum::<i64>().to_string()),
            2 => first_basement_position(parsed)
                .map(|position| position.to_string())
                .ok_or_else(|| SolveError::SolveFailed("Santa never enters the basement".into())),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

/// 1-based position of the first instruction that reaches floor -1
fn first_basement_position(steps: &[i8]) -> Option<usize> {
    steps
        .iter()
        .scan(0i64, |floor, &step| {
            *floor += i64::from(step);
            Some(*floor)
        })
        .position(|floor| floor == -1)
        .map(|index| index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;
    use proptest::prelude::*;

    fn solve(input: &str, part: u8) -> String {
        let mut parsed = Solver::parse(input).unwrap();
        Solver::solve_part(&mut parsed, part).unwrap()
    }

    #[test]
    fn test_part1_examples() {
        for (input, floor) in [
            ("(())", "0"),
            ("()()", "0"),
            ("(((", "3"),
            ("(()(()(", "3"),
            ("))(((((", "3"),
            ("())", "-1"),
            (")())())", "-3"),
        ] {
            assert_eq!(solve(input, 1), floor, "input {input}");
        }
    }

    #[test]
    fn test_part2_examples() {
        assert_eq!(solve(")", 2), "1");
        assert_eq!(solve("()())", 2), "5");
    }

    #[test]
    fn test_never_in_basement() {
        let mut parsed = Solver::parse("(()").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut parsed, 2),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_trailing_newline_and_bad_characters() {
        assert_eq!(solve("(()\n", 1), "1");
        assert!(matches!(
            Solver::parse("(x)"),
            Err(ParseError::InvalidFormat(message)) if message.contains("position 2")
        ));
    }

    proptest! {
        #[test]
        fn prop_final_floor_is_balance(input in "[()]{1,200}") {
            let ups = input.chars().filter(|&c| c == '(').count() as i64;
            let downs = input.len() as i64 - ups;
            prop_assert_eq!(solve(&input, 1), (ups - downs).to_string());
        }
    }
}
