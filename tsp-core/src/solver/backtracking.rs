#[cfg(test)]
#[path = "../../tests/unit/solver/backtracking_test.rs"]
mod backtracking_test;

use super::*;

/// Finds an optimal tour using depth-first search which abandons partial tours as soon as
/// their cost reaches the best complete tour found so far.
///
/// The worst case is the same as for [`BruteForceSolver`], but most branches are cut early. Cities
/// are explored in increasing index order, so ties resolve exactly like in the brute force solver.
#[derive(Clone, Copy, Debug, Default)]
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    /// Max amount of cities supported by the visited mask.
    pub const MAX_SIZE: usize = u64::BITS as usize;
}

impl TspSolver for BacktrackingSolver {
    fn name(&self) -> &str {
        "backtracking"
    }

    fn solve(&self, matrix: &CostMatrix) -> GenericResult<TourResult> {
        let size = matrix.size();

        if size > Self::MAX_SIZE {
            return Err(format!("backtracking supports up to {} cities, got {size}", Self::MAX_SIZE).into());
        }

        let search = Search { matrix, full_mask: u64::MAX >> (Self::MAX_SIZE - size) };
        let mut incumbent = Incumbent { cost: NO_EDGE, tour: None };
        let mut path = Vec::with_capacity(size + 1);
        path.push(START_CITY);

        search.explore(&mut path, 0., 1, &mut incumbent);

        Ok(match incumbent.tour {
            Some(tour) => TourResult::new(incumbent.cost, tour),
            None => TourResult::unsolvable(),
        })
    }
}

/// The best complete tour found so far.
struct Incumbent {
    cost: Cost,
    tour: Option<Tour>,
}

struct Search<'a> {
    matrix: &'a CostMatrix,
    full_mask: u64,
}

impl Search<'_> {
    fn explore(&self, path: &mut Vec<City>, cost: Cost, visited: u64, incumbent: &mut Incumbent) {
        let last = path.last().copied().unwrap_or(START_CITY);

        if visited == self.full_mask {
            let total = cost + self.matrix.cost(last, START_CITY);
            if total < incumbent.cost {
                incumbent.cost = total;
                incumbent.tour = Some(Tour::new(path.iter().copied().chain(std::iter::once(START_CITY)).collect()));
            }
            return;
        }

        // costs are non-negative, so no extension can beat the incumbent
        if cost >= incumbent.cost {
            return;
        }

        for next in (0..self.matrix.size()).filter(|&city| visited & (1 << city) == 0) {
            path.push(next);
            self.explore(path, cost + self.matrix.cost(last, next), visited | (1 << next), incumbent);
            path.pop();
        }
    }
}
