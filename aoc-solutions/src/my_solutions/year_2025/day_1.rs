use anyhow::{anyhow, bail};
use aoc_solver::{AutoRegisterSolver, ParseError, SolveError};

#[derive(AutoRegisterSolver)]
#[aoc(year = 2025, day = 1, tags = ["khangp0000", "dial"], submit = [1])]
pub struct Solver;

#[derive(Debug)]
pub struct Rotations {
    steps: Vec<i16>,
    counts: Option<ZeroCounts>,
}

#[derive(Debug, Clone, Copy)]
struct ZeroCounts {
    /// Rotations that leave the dial on 0
    stops: u16,
    /// Clicks that land on 0, mid-rotation included
    passes: u16,
}

fn parse_rotation(line: &str) -> anyhow::Result<i16> {
    let (direction, amount) = line.split_at_checked(1).ok_or_else(|| anyhow!("empty line"))?;
    let amount: i16 = amount.parse()?;
    if amount < 0 {
        bail!("rotation amount must be non negative");
    }
    match direction {
        "L" => Ok(-amount),
        "R" => Ok(amount),
        _ => bail!("first character needs to be 'L' or 'R'"),
    }
}

impl aoc_solver::Solver for Solver {
    type Parsed = Rotations;
    const PARTS: u8 = 2;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        let steps = input
            .trim()
            .lines()
            .enumerate()
            .map(|(index, line)| {
                parse_rotation(line)
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", index + 1, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Rotations {
            steps,
            counts: None,
        })
    }

    fn solve_part(parsed: &mut Self::Parsed, part: u8) -> Result<String, SolveError> {
        let counts = *parsed
            .counts
            .get_or_insert_with(|| count_zeroes(&parsed.steps));
        match part {
            1 => Ok(counts.stops.to_string()),
            2 => Ok(counts.passes.to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

fn count_zeroes(steps: &[i16]) -> ZeroCounts {
    let (_, stops, passes) = steps.iter().fold(
        (50i16, 0u16, 0u16),
        |(mut dial, mut stops, mut passes), &rotation| {
            let before = dial;
            dial += rotation;
            if dial <= 0 && before != 0 {
                passes += 1;
            }
            passes += (dial / 100).unsigned_abs();
            dial = dial.rem_euclid(100);
            if dial == 0 {
                stops += 1;
            }
            (dial, stops, passes)
        },
    );
    ZeroCounts { stops, passes }
}
