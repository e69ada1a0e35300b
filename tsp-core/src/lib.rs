//! Core crate contains exact algorithms to solve the ***Traveling Salesman Problem*** over a cost matrix.
//!
//! Three solvers are provided, all of them return the same optimal cost for the same matrix:
//!
//! - **brute force**: enumerates every tour, an oracle for small problems
//! - **Held-Karp**: dynamic programming over subsets, tractable up to about twenty cities
//! - **backtracking**: depth-first search with cost based pruning
//!
//! # Examples
//!
//! ```
//! use tsp_core::prelude::*;
//!
//! let matrix = CostMatrix::new(vec![
//!     vec![0., 10., 15., 20.],
//!     vec![10., 0., 35., 25.],
//!     vec![15., 35., 0., 30.],
//!     vec![20., 25., 30., 0.],
//! ])
//! .expect("valid matrix");
//!
//! let result = BacktrackingSolver.solve(&matrix).expect("cannot solve");
//!
//! assert_eq!(result.cost(), 80.);
//! assert_eq!(result.tour().cities(), &[0, 1, 3, 2, 0]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
