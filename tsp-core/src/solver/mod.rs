//! Contains exact solvers for the traveling salesman problem and a facade to run and compare them.
//!
//! All solvers share the same contract: given a validated [`CostMatrix`], they return a
//! [`TourResult`] with the minimum cost tour which starts and ends at [`START_CITY`]. A matrix
//! without any finite-cost tour results in [`TourResult::unsolvable`], not in an error.

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

use crate::models::*;
use crate::utils::*;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

mod backtracking;
pub use self::backtracking::BacktrackingSolver;

mod brute_force;
pub use self::brute_force::BruteForceSolver;

mod held_karp;
pub use self::held_karp::HeldKarpSolver;

mod permutations;
pub use self::permutations::Permutations;

mod validation;
pub use self::validation::cross_validate;

/// Specifies an exact solver for the traveling salesman problem.
pub trait TspSolver {
    /// Returns a solver name.
    fn name(&self) -> &str;

    /// Finds a minimum cost tour. Returns an error only when the matrix exceeds solver's capacity.
    fn solve(&self, matrix: &CostMatrix) -> GenericResult<TourResult>;
}

/// Lists available solver types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SolverKind {
    /// Exhaustive enumeration of all tours.
    BruteForce,
    /// Dynamic programming over subsets.
    HeldKarp,
    /// Depth first search with pruning.
    Backtracking,
}

impl SolverKind {
    /// Returns all solver kinds.
    pub fn all() -> Vec<SolverKind> {
        vec![SolverKind::BruteForce, SolverKind::HeldKarp, SolverKind::Backtracking]
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SolverKind::BruteForce => "brute-force",
            SolverKind::HeldKarp => "held-karp",
            SolverKind::Backtracking => "backtracking",
        };

        write!(f, "{name}")
    }
}

impl FromStr for SolverKind {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "brute-force" => Ok(SolverKind::BruteForce),
            "held-karp" => Ok(SolverKind::HeldKarp),
            "backtracking" => Ok(SolverKind::Backtracking),
            _ => Err(format!("unknown solver: '{value}'").into()),
        }
    }
}

/// Creates a solver of the given kind.
pub fn create_solver(kind: SolverKind) -> Arc<dyn TspSolver + Send + Sync> {
    match kind {
        SolverKind::BruteForce => Arc::new(BruteForceSolver),
        SolverKind::HeldKarp => Arc::new(HeldKarpSolver),
        SolverKind::Backtracking => Arc::new(BacktrackingSolver),
    }
}

/// Keeps a solver result together with information about the run.
#[derive(Clone, Debug)]
pub struct SolverReport {
    /// A solver kind.
    pub kind: SolverKind,
    /// A found tour.
    pub result: TourResult,
    /// Time spent.
    pub duration: Duration,
}

/// Runs a solver of specific kind and reports about its work through the environment logger.
pub struct Solver {
    kind: SolverKind,
    environment: Arc<Environment>,
}

impl Solver {
    /// Creates a new instance of `Solver`.
    pub fn new(kind: SolverKind, environment: Arc<Environment>) -> Self {
        Self { kind, environment }
    }

    /// Solves the problem defined by the cost matrix.
    pub fn solve(&self, matrix: &CostMatrix) -> GenericResult<SolverReport> {
        let solver = create_solver(self.kind);
        let (result, duration) = Timer::measure_duration(|| solver.solve(matrix));

        let result = result.map_err(|err| GenericError::from(format!("{} failed: {err}", solver.name())))?;

        (self.environment.logger)(&format!(
            "[{}] cities: {}, {}, took {}ms",
            solver.name(),
            matrix.size(),
            result,
            duration.as_millis()
        ));

        Ok(SolverReport { kind: self.kind, result, duration })
    }
}

/// Solves the same problem with multiple solvers in parallel. Reports are returned in the order
/// of the given kinds.
pub fn compare_solvers(
    matrix: &CostMatrix,
    kinds: &[SolverKind],
    environment: Arc<Environment>,
) -> GenericResult<Vec<SolverReport>> {
    parallel_collect(kinds, |&kind| Solver::new(kind, environment.clone()).solve(matrix)).into_iter().collect()
}
