//! Registration table mapping puzzles to solver factories

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;
use std::collections::BTreeMap;

/// First year of Advent of Code
pub const FIRST_YEAR: u16 = 2015;
/// Days per year in AoC (1-25)
pub const DAYS_PER_YEAR: u8 = 25;
/// Most parts a puzzle can have
pub const MAX_PARTS: u8 = 2;

/// Thread-safe factory function type for creating solver instances
pub type SolverFactory =
    Box<dyn Fn(&str) -> Result<Box<dyn DynSolver>, ParseError> + Send + Sync>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SolverInfo {
    pub year: u16,
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
}

struct SolverEntry {
    factory: SolverFactory,
    parts: u8,
    /// Bit `n - 1` set when part `n` submits automatically
    auto_submit: u8,
}

fn validate(year: u16, day: u8, parts: u8) -> Result<(), RegistrationError> {
    if year < FIRST_YEAR || !(1..=DAYS_PER_YEAR).contains(&day) {
        return Err(RegistrationError::InvalidPuzzle(year, day));
    }
    if !(1..=MAX_PARTS).contains(&parts) {
        return Err(RegistrationError::InvalidPartCount { year, day, parts });
    }
    Ok(())
}

/// Builder for constructing a [`SolverRegistry`] with fluent API
///
/// Every registration is validated; once built, the registry cannot change.
///
/// # Example
///
/// ```
/// # use aoc_solver::{ParseError, RegistryBuilder, SolveError, Solver};
/// struct Day1;
///
/// impl Solver for Day1 {
///     type Parsed = String;
///     const PARTS: u8 = 1;
///
///     fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
///         Ok(input.trim().to_string())
///     }
///
///     fn solve_part(parsed: &mut Self::Parsed, _part: u8) -> Result<String, SolveError> {
///         Ok(parsed.len().to_string())
///     }
/// }
///
/// let registry = RegistryBuilder::new()
///     .register::<Day1>(2023, 1)?
///     .auto_submit(2023, 1, &[1])?
///     .build();
///
/// let mut solver = registry.create_solver(2023, 1, "hello").unwrap();
/// assert_eq!(solver.solve(1).unwrap(), "5");
/// assert!(registry.is_auto_submit(2023, 1, 1));
/// # Ok::<(), aoc_solver::RegistrationError>(())
/// ```
#[derive(Default)]
pub struct RegistryBuilder {
    entries: BTreeMap<(u16, u8), SolverEntry>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register solver type `S` for a year and day
    pub fn register<S>(self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
        S::Parsed: 'static,
    {
        self.register_factory(year, day, S::PARTS, move |input: &str| {
            let instance = SolverInstance::<S>::new(year, day, input)?;
            Ok(Box::new(instance) as Box<dyn DynSolver>)
        })
    }

    /// Register a solver factory with an explicit parts count
    ///
    /// Returns an error if the puzzle is out of bounds, the parts count is not
    /// 1 or 2, or a solver is already registered for the year and day.
    pub fn register_factory<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: Fn(&str) -> Result<Box<dyn DynSolver>, ParseError> + Send + Sync + 'static,
    {
        validate(year, day, parts)?;
        if self.entries.contains_key(&(year, day)) {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        self.entries.insert(
            (year, day),
            SolverEntry {
                factory: Box::new(factory),
                parts,
                auto_submit: 0,
            },
        );
        Ok(self)
    }

    /// Opt the given parts of an already registered solver into automatic
    /// submission
    pub fn auto_submit(mut self, year: u16, day: u8, parts: &[u8]) -> Result<Self, RegistrationError> {
        let entry = self
            .entries
            .get_mut(&(year, day))
            .ok_or(RegistrationError::UnknownSolver(year, day))?;
        for &part in parts {
            if !(1..=entry.parts).contains(&part) {
                return Err(RegistrationError::InvalidPart { year, day, part });
            }
            entry.auto_submit |= 1 << (part - 1);
        }
        Ok(self)
    }

    /// Register all collected solver plugins
    ///
    /// Iterates through all plugins submitted via `inventory::submit!`,
    /// usually generated by `#[derive(AutoRegisterSolver)]`.
    ///
    /// ```no_run
    /// # use aoc_solver::RegistryBuilder;
    /// let registry = RegistryBuilder::new()
    ///     .register_all_plugins()
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register solver plugins that match the given filter predicate
    ///
    /// ```no_run
    /// # use aoc_solver::RegistryBuilder;
    /// // Register only solvers tagged as "easy"
    /// let registry = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.tags.contains(&"easy"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = self.register_plugin(plugin)?;
            }
        }
        Ok(self)
    }

    fn register_plugin(self, plugin: &SolverPlugin) -> Result<Self, RegistrationError> {
        plugin
            .solver
            .register_with(self, plugin.year, plugin.day)?
            .auto_submit(plugin.year, plugin.day, plugin.submit)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

/// Immutable registry for looking up and creating solvers
pub struct SolverRegistry {
    entries: BTreeMap<(u16, u8), SolverEntry>,
}

impl SolverRegistry {
    /// Parse `input` with the solver registered for a year and day
    pub fn create_solver(
        &self,
        year: u16,
        day: u8,
        input: &str,
    ) -> Result<Box<dyn DynSolver>, SolverError> {
        let entry = self
            .entries
            .get(&(year, day))
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }

    /// Metadata for every registered solver, ascending by year and day
    pub fn iter_info(&self) -> impl Iterator<Item = SolverInfo> + '_ {
        self.entries.iter().map(|(&(year, day), entry)| SolverInfo {
            year,
            day,
            parts: entry.parts,
        })
    }

    pub fn get_info(&self, year: u16, day: u8) -> Option<SolverInfo> {
        self.entries.get(&(year, day)).map(|entry| SolverInfo {
            year,
            day,
            parts: entry.parts,
        })
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.entries.contains_key(&(year, day))
    }

    /// Whether answers for this part are submitted without being asked
    pub fn is_auto_submit(&self, year: u16, day: u8, part: u8) -> bool {
        (1..=MAX_PARTS).contains(&part)
            && self
                .entries
                .get(&(year, day))
                .is_some_and(|entry| entry.auto_submit & (1 << (part - 1)) != 0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Trait for solvers that can register themselves with a registry builder
///
/// Unlike [`Solver`], it has no associated types, so different solver types
/// can live side by side as `&'static dyn RegisterableSolver` in plugins.
pub trait RegisterableSolver: Sync {
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
    S::Parsed: 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register::<S>(year, day)
    }
}

/// Plugin information for automatic solver registration
///
/// ```no_run
/// use aoc_solver::{ParseError, SolveError, Solver, SolverPlugin};
///
/// struct Day1Solver;
///
/// impl Solver for Day1Solver {
///     type Parsed = ();
///     const PARTS: u8 = 1;
///
///     fn parse(_: &str) -> Result<Self::Parsed, ParseError> {
///         Ok(())
///     }
///
///     fn solve_part(_: &mut Self::Parsed, part: u8) -> Result<String, SolveError> {
///         Err(SolveError::PartNotImplemented(part))
///     }
/// }
///
/// inventory::submit! {
///     SolverPlugin {
///         year: 2023,
///         day: 1,
///         solver: &Day1Solver,
///         tags: &["2023", "easy"],
///         submit: &[1],
///     }
/// }
/// ```
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Tags for filtering (e.g., "easy", "grid", "2023")
    pub tags: &'static [&'static str],
    /// Parts whose answers are submitted automatically
    pub submit: &'static [u8],
}

inventory::collect!(SolverPlugin);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;

    struct Echo;

    impl Solver for Echo {
        type Parsed = String;
        const PARTS: u8 = 2;

        fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
            if input.is_empty() {
                return Err(ParseError::MissingData("empty input".into()));
            }
            Ok(input.to_string())
        }

        fn solve_part(parsed: &mut Self::Parsed, part: u8) -> Result<String, SolveError> {
            Ok(format!("{parsed}:{part}"))
        }
    }

    fn noop_factory(_: &str) -> Result<Box<dyn DynSolver>, ParseError> {
        Err(ParseError::Other("unused".into()))
    }

    #[test]
    fn test_register_rejects_invalid_puzzles() {
        for (year, day) in [(2014, 1), (2023, 0), (2023, 26)] {
            let result = RegistryBuilder::new().register::<Echo>(year, day);
            assert!(matches!(result, Err(RegistrationError::InvalidPuzzle(y, d)) if y == year && d == day));
        }
    }

    #[test]
    fn test_register_rejects_invalid_part_counts() {
        for parts in [0, 3] {
            let result = RegistryBuilder::new().register_factory(2023, 1, parts, noop_factory);
            assert!(matches!(
                result,
                Err(RegistrationError::InvalidPartCount { parts: p, .. }) if p == parts
            ));
        }
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = RegistryBuilder::new()
            .register::<Echo>(2023, 1)
            .unwrap()
            .register_factory(2023, 1, 1, noop_factory);
        assert!(matches!(result, Err(RegistrationError::DuplicateSolver(2023, 1))));
    }

    #[test]
    fn test_auto_submit_bits() {
        let registry = RegistryBuilder::new()
            .register::<Echo>(2023, 1)
            .unwrap()
            .auto_submit(2023, 1, &[2])
            .unwrap()
            .build();

        assert!(!registry.is_auto_submit(2023, 1, 1));
        assert!(registry.is_auto_submit(2023, 1, 2));
        assert!(!registry.is_auto_submit(2023, 1, 0));
        assert!(!registry.is_auto_submit(2023, 1, 9));
        assert!(!registry.is_auto_submit(2023, 2, 1));
    }

    #[test]
    fn test_auto_submit_validation() {
        let result = RegistryBuilder::new().auto_submit(2023, 1, &[1]);
        assert!(matches!(result, Err(RegistrationError::UnknownSolver(2023, 1))));

        let result = RegistryBuilder::new()
            .register_factory(2023, 1, 1, noop_factory)
            .unwrap()
            .auto_submit(2023, 1, &[2]);
        assert!(matches!(
            result,
            Err(RegistrationError::InvalidPart { part: 2, .. })
        ));
    }

    #[test]
    fn test_info_is_ascending() {
        let registry = RegistryBuilder::new()
            .register::<Echo>(2023, 5)
            .unwrap()
            .register_factory(2016, 9, 1, noop_factory)
            .unwrap()
            .register::<Echo>(2023, 1)
            .unwrap()
            .build();

        let order: Vec<_> = registry.iter_info().map(|i| (i.year, i.day)).collect();
        assert_eq!(order, vec![(2016, 9), (2023, 1), (2023, 5)]);
        assert_eq!(
            registry.get_info(2016, 9),
            Some(SolverInfo {
                year: 2016,
                day: 9,
                parts: 1
            })
        );
        assert_eq!(registry.get_info(2016, 10), None);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_create_solver() {
        let registry = RegistryBuilder::new().register::<Echo>(2023, 1).unwrap().build();

        let mut solver = registry.create_solver(2023, 1, "abc").unwrap();
        assert_eq!(solver.solve(2).unwrap(), "abc:2");
        assert_eq!((solver.year(), solver.day(), solver.parts()), (2023, 1, 2));
        assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));

        assert!(matches!(
            registry.create_solver(2023, 2, "abc"),
            Err(SolverError::NotFound(2023, 2))
        ));
        assert!(matches!(
            registry.create_solver(2023, 1, ""),
            Err(SolverError::ParseError(ParseError::MissingData(_)))
        ));
    }
}
