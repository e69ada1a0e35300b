//! Scientific crate contains logic to read and write benchmark problems used to evaluate exact
//! traveling salesman solvers.
//!
//!
//! # Supported formats
//!
//! - **tsplib** subset of TSPLIB95 format: `TSP` and `ATSP` problems with either explicit full
//!   matrix weights or `EUC_2D` node coordinates

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

pub use tsp_core as core;

pub mod common;
pub mod tsplib;
