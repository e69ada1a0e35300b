#[cfg(test)]
#[path = "../../tests/unit/solver/held_karp_test.rs"]
mod held_karp_test;

use super::*;

/// Finds an optimal tour using Held-Karp dynamic programming over subsets of visited cities.
///
/// Takes `O(n^2 * 2^n)` time and `O(n * 2^n)` memory. Each state `(mask, last)` stores the minimum
/// cost of a path which starts at the start city, visits exactly the cities in `mask` and ends at
/// `last`, together with the predecessor of `last` on that path.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeldKarpSolver;

impl HeldKarpSolver {
    /// Max amount of cities supported: the state tables grow as `n * 2^n`.
    pub const MAX_SIZE: usize = 20;
}

impl TspSolver for HeldKarpSolver {
    fn name(&self) -> &str {
        "held-karp"
    }

    fn solve(&self, matrix: &CostMatrix) -> GenericResult<TourResult> {
        let size = matrix.size();

        if size > Self::MAX_SIZE {
            return Err(format!("held-karp supports up to {} cities, got {size}", Self::MAX_SIZE).into());
        }

        if size == 1 {
            return Ok(TourResult::new(0., Tour::closed(std::iter::empty())));
        }

        let table = fill_table(matrix);
        let full_mask = (1_usize << size) - 1;

        let (cost, last) = (1..size).fold((NO_EDGE, None), |(best_cost, best_last), last| {
            let cost = table.cost(full_mask, last) + matrix.cost(last, START_CITY);
            if cost < best_cost { (cost, Some(last)) } else { (best_cost, best_last) }
        });

        match last {
            Some(last) => Ok(TourResult::new(cost, table.reconstruct(full_mask, last)?)),
            None => Ok(TourResult::unsolvable()),
        }
    }
}

/// Marks a state which has not been reached.
const NO_PARENT: u8 = u8::MAX;

/// Flat memo and predecessor tables indexed by `mask * size + last`.
struct StateTable {
    size: usize,
    costs: Vec<Cost>,
    parents: Vec<u8>,
}

impl StateTable {
    fn new(size: usize) -> Self {
        let capacity = (1_usize << size) * size;

        Self { size, costs: vec![NO_EDGE; capacity], parents: vec![NO_PARENT; capacity] }
    }

    #[inline]
    fn index(&self, mask: usize, last: City) -> usize {
        mask * self.size + last
    }

    #[inline]
    fn cost(&self, mask: usize, last: City) -> Cost {
        self.costs[self.index(mask, last)]
    }

    fn set(&mut self, mask: usize, last: City, cost: Cost, parent: City) {
        let index = self.index(mask, last);
        self.costs[index] = cost;
        self.parents[index] = parent as u8;
    }

    /// Walks predecessor links back from `(mask, last)` to the start city.
    fn reconstruct(&self, mask: usize, last: City) -> GenericResult<Tour> {
        let mut interior = Vec::with_capacity(self.size - 1);
        let (mut mask, mut city) = (mask, last);

        while city != START_CITY {
            interior.push(city);

            let parent = self.parents[self.index(mask, city)];
            if parent == NO_PARENT {
                return Err(format!("no predecessor recorded for city {city} in state {mask:#b}").into());
            }

            mask ^= 1 << city;
            city = parent as City;
        }

        interior.reverse();

        Ok(Tour::closed(interior))
    }
}

fn fill_table(matrix: &CostMatrix) -> StateTable {
    let size = matrix.size();
    let mut table = StateTable::new(size);

    for city in 1..size {
        table.set(1 | (1 << city), city, matrix.cost(START_CITY, city), START_CITY);
    }

    for subset_size in 3..=size {
        // odd masks always contain the start city
        for mask in (1..1_usize << size).step_by(2).filter(|mask| mask.count_ones() as usize == subset_size) {
            for last in (1..size).filter(|&city| mask & (1 << city) != 0) {
                let previous_mask = mask ^ (1 << last);
                let mut best: Option<(Cost, City)> = None;

                for previous in (1..size).filter(|&city| city != last && previous_mask & (1 << city) != 0) {
                    let previous_cost = table.cost(previous_mask, previous);
                    if previous_cost.is_infinite() {
                        continue;
                    }

                    let cost = previous_cost + matrix.cost(previous, last);
                    if cost < best.map_or(NO_EDGE, |(best_cost, _)| best_cost) {
                        best = Some((cost, previous));
                    }
                }

                if let Some((cost, previous)) = best {
                    table.set(mask, last, cost, previous);
                }
            }
        }
    }

    table
}
