//! Advent of Code puzzle solutions with automatic registration
//!
//! Solutions are organized by year. Each one uses the `AutoRegisterSolver`
//! derive macro, so linking this crate is enough to make it available to the
//! runner.

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
