//! Sequential run loop over the selected puzzles

use crate::config::Config;
use crate::output::OutputFormatter;
use aoc_solver::{DynSolver, SolverError, SolverRegistry};
use aoc_submission::{
    Attempt, AttemptError, Orchestrator, PuzzleId, PuzzleInputs, SubmissionStore,
    SubmissionTransport,
};
use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use std::cell::RefCell;
use tracing::{debug, warn};

/// Puzzles unlock at midnight in this offset (UTC-5)
const UNLOCK_OFFSET_SECS: i32 = -5 * 3600;

/// One puzzle part to attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkItem {
    pub puzzle: PuzzleId,
    pub auto_submit: bool,
}

/// Outcome of one puzzle in a run
#[derive(Debug)]
pub enum SolverResult {
    Attempted(Attempt),
    Failed(AttemptError),
    /// The puzzle has not been released yet
    Locked(PuzzleId),
}

/// When a day's puzzle becomes available
pub fn release_time(year: u16, day: u8) -> Option<DateTime<Utc>> {
    let offset = FixedOffset::east_opt(UNLOCK_OFFSET_SECS)?;
    let midnight = NaiveDate::from_ymd_opt(year.into(), 12, day.into())?.and_hms_opt(0, 0, 0)?;
    offset
        .from_local_datetime(&midnight)
        .single()
        .map(|time| time.with_timezone(&Utc))
}

pub fn is_released(year: u16, day: u8, now: DateTime<Utc>) -> bool {
    release_time(year, day).is_some_and(|release| release <= now)
}

/// Every registered puzzle part matching the config filters, in ascending order
pub fn collect_work_items(registry: &SolverRegistry, config: &Config) -> Vec<WorkItem> {
    registry
        .iter_info()
        .filter(|info| config.year_filter.is_none_or(|y| info.year == y))
        .filter(|info| config.day_filter.is_none_or(|d| info.day == d))
        .flat_map(|info| {
            (1..=info.parts)
                .filter(|&part| config.part_filter.is_none_or(|p| part == p))
                .map(move |part| WorkItem {
                    puzzle: PuzzleId::new(info.year, info.day, part),
                    auto_submit: config.submit
                        || registry.is_auto_submit(info.year, info.day, part),
                })
        })
        .collect()
}

/// Solvers already parsed for the current day, keyed by the input text
///
/// Both parts of a day share one parsed solver, and the sample gets its own.
#[derive(Default)]
struct ParsedDay {
    day: Option<(u16, u8)>,
    solvers: Vec<(String, Box<dyn DynSolver>)>,
}

impl ParsedDay {
    fn solve(
        &mut self,
        registry: &SolverRegistry,
        puzzle: PuzzleId,
        input: &str,
    ) -> Result<String, SolverError> {
        let day = (puzzle.year, puzzle.day);
        if self.day != Some(day) {
            self.day = Some(day);
            self.solvers.clear();
        }

        let index = match self.solvers.iter().position(|(parsed_from, _)| parsed_from == input) {
            Some(index) => {
                debug!("{puzzle}: reusing parsed input");
                index
            }
            None => {
                let solver = registry.create_solver(puzzle.year, puzzle.day, input)?;
                self.solvers.push((input.to_string(), solver));
                self.solvers.len() - 1
            }
        };
        Ok(self.solvers[index].1.solve(puzzle.part)?)
    }
}

/// Runs work items one at a time against a submission store
pub struct Executor<'r> {
    registry: &'r SolverRegistry,
    formatter: OutputFormatter,
}

impl<'r> Executor<'r> {
    pub fn new(registry: &'r SolverRegistry, formatter: OutputFormatter) -> Self {
        Self {
            registry,
            formatter,
        }
    }

    /// Attempt every work item, printing each result as it completes
    pub fn execute<I, T>(
        &self,
        work_items: &[WorkItem],
        store: &mut SubmissionStore,
        inputs: I,
        transport: T,
        now: DateTime<Utc>,
    ) -> Vec<SolverResult>
    where
        I: PuzzleInputs,
        T: SubmissionTransport,
    {
        let mut orchestrator = Orchestrator::new(store, inputs, transport);
        let parsed = RefCell::new(ParsedDay::default());
        let mut results = Vec::with_capacity(work_items.len());

        for work in work_items {
            let puzzle = work.puzzle;
            let result = if !is_released(puzzle.year, puzzle.day, now) {
                warn!("{puzzle} is not released yet, skipping");
                SolverResult::Locked(puzzle)
            } else {
                let registry = self.registry;
                let parsed = &parsed;
                let solve = move |input: &str| -> Result<String, SolverError> {
                    parsed.borrow_mut().solve(registry, puzzle, input)
                };
                match orchestrator.attempt(puzzle, solve, work.auto_submit) {
                    Ok(attempt) => SolverResult::Attempted(attempt),
                    Err(e) => SolverResult::Failed(e),
                }
            };
            self.formatter.print_result(&result);
            results.push(result);
        }

        self.formatter.print_summary(&results);
        results
    }
}
