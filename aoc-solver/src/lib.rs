//! Advent of Code solver registry
//!
//! Maps `(year, day)` to a solver that parses the day's input once and answers
//! each of its parts. Solvers are registered explicitly through
//! [`RegistryBuilder`], or collected at link time from
//! `#[derive(AutoRegisterSolver)]` plugins.
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{ParseError, RegistryBuilder, SolveError, Solver};
//!
//! pub struct MyDay1;
//!
//! impl Solver for MyDay1 {
//!     type Parsed = Vec<i32>;
//!     const PARTS: u8 = 1;
//!
//!     fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| {
//!                 line.parse()
//!                     .map_err(|_| ParseError::InvalidFormat("Expected integer".to_string()))
//!             })
//!             .collect()
//!     }
//!
//!     fn solve_part(parsed: &mut Self::Parsed, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => Ok(parsed.iter().sum::<i32>().to_string()),
//!             _ => Err(SolveError::PartNotImplemented(part)),
//!         }
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register::<MyDay1>(2023, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2023, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap(), "6");
//! ```
//!
//! # Plugins
//!
//! ```ignore
//! #[derive(AutoRegisterSolver)]
//! #[aoc(year = 2023, day = 1, tags = ["easy"], submit = [1, 2])]
//! struct Day1Solver;
//! ```
//!
//! `submit` lists the parts whose answers may be sent to the server without
//! asking; see [`SolverRegistry::is_auto_submit`].

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolverInstance};
pub use registry::{
    DAYS_PER_YEAR, FIRST_YEAR, MAX_PARTS, RegisterableSolver, RegistryBuilder, SolverFactory,
    SolverInfo, SolverPlugin, SolverRegistry,
};
pub use solver::{Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

pub use aoc_solver_macros::AutoRegisterSolver;
