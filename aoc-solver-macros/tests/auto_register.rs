use aoc_solver::{AutoRegisterSolver, ParseError, RegistryBuilder, SolveError, Solver};

#[derive(AutoRegisterSolver)]
#[aoc(year = 2015, day = 24, tags = ["macro-test", "sum"], submit = [2])]
struct SumSolver;

impl Solver for SumSolver {
    type Parsed = Vec<u32>;
    const PARTS: u8 = 2;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        input
            .split_whitespace()
            .map(|n| n.parse().map_err(|_| ParseError::InvalidFormat(n.to_string())))
            .collect()
    }

    fn solve_part(parsed: &mut Self::Parsed, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(parsed.iter().sum::<u32>().to_string()),
            2 => Ok(parsed.iter().max().copied().unwrap_or_default().to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

#[derive(AutoRegisterSolver)]
#[aoc(year = 2015, day = 25, tags = ["macro-test"])]
struct LengthSolver;

impl Solver for LengthSolver {
    type Parsed = usize;
    const PARTS: u8 = 1;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        Ok(input.len())
    }

    fn solve_part(parsed: &mut Self::Parsed, _part: u8) -> Result<String, SolveError> {
        Ok(parsed.to_string())
    }
}

fn registry_with(tag: &'static str) -> aoc_solver::SolverRegistry {
    RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&tag))
        .expect("plugins register cleanly")
        .build()
}

#[test]
fn test_derived_plugins_are_collected() {
    let registry = registry_with("macro-test");

    let days: Vec<_> = registry.iter_info().map(|info| (info.year, info.day, info.parts)).collect();
    assert_eq!(days, vec![(2015, 24, 2), (2015, 25, 1)]);

    let mut solver = registry.create_solver(2015, 24, "3 9 4").unwrap();
    assert_eq!(solver.solve(1).unwrap(), "16");
    assert_eq!(solver.solve(2).unwrap(), "9");
}

#[test]
fn test_submit_attribute_opts_parts_in() {
    let registry = registry_with("macro-test");

    assert!(!registry.is_auto_submit(2015, 24, 1));
    assert!(registry.is_auto_submit(2015, 24, 2));
    assert!(!registry.is_auto_submit(2015, 25, 1));
}

#[test]
fn test_tag_filter_selects_subset() {
    let registry = registry_with("sum");

    assert_eq!(registry.len(), 1);
    assert!(registry.contains(2015, 24));
    assert!(!registry.contains(2015, 25));
}
