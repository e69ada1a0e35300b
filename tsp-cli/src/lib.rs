//! A command line interface to exact *Traveling Salesman Problem* solvers.
//!
//! The library part exposes readers and writers used by the `tsp-cli` binary, so the same logic
//! can be embedded into another application.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
mod helpers;

#[cfg(test)]
#[path = "../tests/unit/lib_test.rs"]
mod lib_test;

pub use tsp_core;
pub use tsp_scientific;

pub mod extensions;

use crate::extensions::solve::formats::write_solutions_json;
use crate::extensions::solve::{SolveSettings, solve_matrix};
use std::io::BufWriter;
use tsp_core::prelude::{CostMatrix, GenericError};

/// Solves the matrix with the solvers from settings and returns solutions serialized as json.
pub fn get_solutions_serialized(matrix: &CostMatrix, settings: &SolveSettings) -> Result<String, GenericError> {
    let reports = solve_matrix(matrix, settings, settings.create_environment())?;

    let mut buffer = Vec::new();
    write_solutions_json(&reports, BufWriter::new(&mut buffer))?;

    String::from_utf8(buffer).map_err(|err| err.to_string().into())
}
