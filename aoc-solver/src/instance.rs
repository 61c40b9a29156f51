//! Parsed solver instances behind a uniform interface

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};

/// A solver together with its parsed input
pub struct SolverInstance<S: Solver> {
    year: u16,
    day: u8,
    parsed: S::Parsed,
}

impl<S: Solver> SolverInstance<S> {
    /// Parse `input` for the given year and day
    pub fn new(year: u16, day: u8, input: &str) -> Result<Self, ParseError> {
        Ok(Self {
            year,
            day,
            parsed: S::parse(input)?,
        })
    }
}

/// Type-erased interface for working with any solver through dynamic dispatch
///
/// # Example
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn both_parts(mut solver: Box<dyn DynSolver>) -> Result<(), aoc_solver::SolveError> {
///     for part in 1..=solver.parts() {
///         println!("{}/{} part {}: {}", solver.year(), solver.day(), part, solver.solve(part)?);
///     }
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve the specified part, rejecting parts the solver does not have
    fn solve(&mut self, part: u8) -> Result<String, SolveError>;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    /// Number of parts this solver supports
    fn parts(&self) -> u8;
}

impl<S: Solver> DynSolver for SolverInstance<S> {
    fn solve(&mut self, part: u8) -> Result<String, SolveError> {
        S::solve_part_checked_range(&mut self.parsed, part)
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}
