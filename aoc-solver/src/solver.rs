//! Core solver trait

use crate::error::{ParseError, SolveError};

/// A solution for one Advent of Code day
///
/// The input is parsed once; each part is then solved from the parsed value.
/// When both parts of a day run, they share `parsed` in order, so part 2 may
/// reuse anything part 1 left behind. A part can also run alone on a fresh
/// parse, e.g. when only part 2 is selected.
///
/// # Example
///
/// ```
/// use aoc_solver::{ParseError, SolveError, Solver};
///
/// struct Day1;
///
/// impl Solver for Day1 {
///     type Parsed = Vec<i64>;
///     const PARTS: u8 = 2;
///
///     fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
///
///     fn solve_part(parsed: &mut Self::Parsed, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(parsed.iter().sum::<i64>().to_string()),
///             2 => Ok(parsed.iter().product::<i64>().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut parsed = Day1::parse("2\n3\n4").unwrap();
/// assert_eq!(Day1::solve_part(&mut parsed, 1).unwrap(), "9");
/// assert_eq!(Day1::solve_part(&mut parsed, 2).unwrap(), "24");
/// ```
pub trait Solver {
    /// Parsed form of the puzzle input, shared by all parts
    type Parsed;

    /// Number of parts this solver implements
    const PARTS: u8;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError>;

    /// Solve a specific part of the problem
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::SolveFailed)` - An error occurred while solving
    fn solve_part(parsed: &mut Self::Parsed, part: u8) -> Result<String, SolveError>;
}

pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`], rejecting parts outside `1..=PARTS`
    fn solve_part_checked_range(parsed: &mut Self::Parsed, part: u8) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(parsed, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
