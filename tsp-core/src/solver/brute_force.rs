#[cfg(test)]
#[path = "../../tests/unit/solver/brute_force_test.rs"]
mod brute_force_test;

use super::*;

/// Finds an optimal tour by checking every ordering of non-start cities.
///
/// Takes `O(n! * n)` time, so it is only practical for around ten cities. On ties, the first tour
/// in lexicographic order wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct BruteForceSolver;

impl TspSolver for BruteForceSolver {
    fn name(&self) -> &str {
        "brute-force"
    }

    fn solve(&self, matrix: &CostMatrix) -> GenericResult<TourResult> {
        let mut permutations = Permutations::new((1..matrix.size()).collect());
        let mut best: Option<(Cost, Vec<City>)> = None;

        while let Some(interior) = permutations.advance() {
            let cost = get_closed_cost(matrix, interior);
            let best_cost = best.as_ref().map_or(NO_EDGE, |(best_cost, _)| *best_cost);

            if cost < best_cost {
                best = Some((cost, interior.to_vec()));
            }
        }

        Ok(best.map_or_else(TourResult::unsolvable, |(cost, interior)| TourResult::new(cost, Tour::closed(interior))))
    }
}

fn get_closed_cost(matrix: &CostMatrix, interior: &[City]) -> Cost {
    let (last, cost) = interior
        .iter()
        .fold((START_CITY, 0.), |(previous, cost), &city| (city, cost + matrix.cost(previous, city)));

    cost + matrix.cost(last, START_CITY)
}
