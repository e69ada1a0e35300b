//! A helper module which contains functionality to generate random problems.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/generate/generate_test.rs"]
mod generate_test;

use tsp_core::models::generate_matrix;
use tsp_core::prelude::*;

/// Specifies a shape of the generated problem.
#[derive(Clone, Debug)]
pub struct GenerateSettings {
    /// Amount of cities.
    pub size: usize,
    /// Min and max cost of an edge.
    pub cost_range: (Float, Float),
    /// A probability of an edge to be missing.
    pub no_edge_ratio: Float,
    /// Whether costs are the same in both directions.
    pub is_symmetric: bool,
    /// Whether costs are rounded to the nearest integer.
    pub is_rounded: bool,
    /// A random seed for repeatable generation.
    pub seed: Option<u64>,
}

/// Generates a random cost matrix.
pub fn generate_problem(settings: &GenerateSettings) -> Result<CostMatrix, GenericError> {
    if settings.size == 0 {
        return Err("problem size should be positive".into());
    }

    let random = settings.seed.map_or_else(DefaultRandom::default, DefaultRandom::new_repeatable);
    let matrix =
        generate_matrix(settings.size, settings.cost_range, settings.no_edge_ratio, settings.is_symmetric, &random)?;

    if settings.is_rounded {
        let values = matrix.rows().flat_map(|row| row.iter().map(|cost| cost.round())).collect::<Vec<_>>();
        Ok(CostMatrix::from_flat(settings.size, values)?)
    } else {
        Ok(matrix)
    }
}
