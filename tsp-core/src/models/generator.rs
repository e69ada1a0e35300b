#[cfg(test)]
#[path = "../../tests/unit/models/generator_test.rs"]
mod generator_test;

use super::*;
use crate::utils::{Float, GenericResult, Random};

/// Generates a random cost matrix of the given size.
///
/// Off-diagonal costs are drawn uniformly from `cost_range`. Each edge is dropped (replaced with
/// [`NO_EDGE`]) with `no_edge_ratio` probability. When `symmetric` is set, the cost of `(i, j)` mirrors `(j, i)`.
pub fn generate_matrix(
    size: usize,
    cost_range: (Float, Float),
    no_edge_ratio: Float,
    symmetric: bool,
    random: &(dyn Random + Send + Sync),
) -> GenericResult<CostMatrix> {
    let (min, max) = cost_range;
    if min < 0. || min > max || !max.is_finite() {
        return Err(format!("invalid cost range: [{min}, {max}]").into());
    }

    if !(0. ..=1.).contains(&no_edge_ratio) {
        return Err(format!("no edge ratio must be in [0, 1], got {no_edge_ratio}").into());
    }

    let mut values = vec![0.; size * size];
    for row in 0..size {
        for col in 0..size {
            if row == col || (symmetric && col < row) {
                continue;
            }

            let value = if random.is_hit(no_edge_ratio) { NO_EDGE } else { random.uniform_real(min, max) };

            values[row * size + col] = value;
            if symmetric {
                values[col * size + row] = value;
            }
        }
    }

    Ok(CostMatrix::from_flat(size, values)?)
}
