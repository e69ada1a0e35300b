#[cfg(test)]
#[path = "../../tests/unit/solver/permutations_test.rs"]
mod permutations_test;

use crate::models::City;

/// A lazy and restartable sequence of all orderings of the given cities.
///
/// Orderings are produced in lexicographic order, starting from the sorted input, so each of
/// `k!` orderings of `k` distinct cities appears exactly once.
pub struct Permutations {
    initial: Vec<City>,
    current: Vec<City>,
    state: State,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    NotStarted,
    Running,
    Exhausted,
}

impl Permutations {
    /// Creates a new instance of `Permutations`.
    pub fn new(cities: Vec<City>) -> Self {
        let mut initial = cities;
        initial.sort_unstable();

        Self { current: initial.clone(), initial, state: State::NotStarted }
    }

    /// Moves to the next ordering and returns it, `None` when all orderings are consumed.
    pub fn advance(&mut self) -> Option<&[City]> {
        match self.state {
            State::Exhausted => return None,
            State::NotStarted => self.state = State::Running,
            State::Running => {
                if !next_permutation(self.current.as_mut_slice()) {
                    self.state = State::Exhausted;
                    return None;
                }
            }
        }

        Some(self.current.as_slice())
    }

    /// Restarts the sequence from the first ordering.
    pub fn reset(&mut self) {
        self.current.clone_from(&self.initial);
        self.state = State::NotStarted;
    }
}

impl Iterator for Permutations {
    type Item = Vec<City>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(<[City]>::to_vec)
    }
}

/// Rearranges items into the lexicographically next ordering. Returns false if items are
/// already in the last ordering.
fn next_permutation(items: &mut [City]) -> bool {
    let Some(pivot) = (1..items.len()).rev().find(|&idx| items[idx - 1] < items[idx]).map(|idx| idx - 1) else {
        return false;
    };

    let successor = (pivot + 1..items.len()).rev().find(|&idx| items[idx] > items[pivot]).unwrap_or(pivot + 1);

    items.swap(pivot, successor);
    items[pivot + 1..].reverse();

    true
}
