//! This module reimports commonly used types.

pub use crate::models::{City, Cost, CostMatrix, MatrixError, NO_EDGE, START_CITY, Tour, TourResult};

pub use crate::solver::{BacktrackingSolver, BruteForceSolver, HeldKarpSolver};
pub use crate::solver::{Solver, SolverKind, SolverReport, TspSolver};
pub use crate::solver::{compare_solvers, create_solver, cross_validate};

pub use crate::utils::{DefaultRandom, Environment, InfoLogger, Random};
pub use crate::utils::{Float, GenericError, GenericResult};
