//! Output formatting for solver results

use crate::executor::SolverResult;
use aoc_submission::{Attempt, Verdict};
use chrono::TimeDelta;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        match result {
            SolverResult::Attempted(attempt) if self.quiet => {
                if let Some(answer) = &attempt.answer {
                    println!("{}", answer);
                }
            }
            SolverResult::Attempted(attempt) => println!("{}", format_attempt(attempt)),
            SolverResult::Failed(e) => eprintln!("Error: {}", e),
            SolverResult::Locked(puzzle) if !self.quiet => {
                println!("{}: not released yet", puzzle)
            }
            SolverResult::Locked(_) => {}
        }
    }

    /// Print a summary after all results
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }
        let summary = Summary::of(results);

        println!();
        println!("--- Summary ---");
        println!(
            "Puzzles: {} solved, {} failed, {} locked",
            summary.solved, summary.failed, summary.locked
        );
        println!(
            "Submissions: {} sent, {} judged from history",
            summary.submitted, summary.judged
        );
        println!("Total solve time: {}", format_duration(summary.solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    solved: usize,
    failed: usize,
    locked: usize,
    submitted: usize,
    judged: usize,
    solve_time: TimeDelta,
}

impl Summary {
    fn of(results: &[SolverResult]) -> Self {
        let mut summary = Summary::default();
        for result in results {
            match result {
                SolverResult::Attempted(attempt) => {
                    summary.solved += 1;
                    summary.solve_time += attempt.solve_duration.unwrap_or_default();
                    match attempt.verdict {
                        Verdict::Submitted(_) | Verdict::Reconciled { .. } => {
                            summary.submitted += 1
                        }
                        Verdict::Judged(_) => summary.judged += 1,
                        Verdict::AlreadySolved | Verdict::ReportOnly => {}
                    }
                }
                SolverResult::Failed(_) => summary.failed += 1,
                SolverResult::Locked(_) => summary.locked += 1,
            }
        }
        summary
    }
}

fn format_attempt(attempt: &Attempt) -> String {
    let Some(answer) = &attempt.answer else {
        return format!("{}: already solved", attempt.puzzle);
    };
    let timing = attempt
        .solve_duration
        .map(|d| format!(" (solve: {})", format_duration(d)))
        .unwrap_or_default();

    format!(
        "{}: {}{}{}",
        attempt.puzzle,
        answer,
        timing,
        format_verdict(&attempt.verdict)
    )
}

fn format_verdict(verdict: &Verdict) -> String {
    match verdict {
        Verdict::AlreadySolved | Verdict::ReportOnly => String::new(),
        Verdict::Judged(status) => format!(" - {} (from history)", status),
        Verdict::Submitted(record) => format!(" - {}: {}", record.status(), record.response()),
        Verdict::Reconciled {
            record,
            server_message,
        } => format!(
            " - {} (reconciled, server said: {})",
            record.status(),
            server_message
        ),
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    TimeDelta::from_std(d).map_or_else(|_| "N/A".to_string(), format_duration)
}
