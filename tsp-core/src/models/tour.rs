#[cfg(test)]
#[path = "../../tests/unit/models/tour_test.rs"]
mod tour_test;

use super::*;
use std::fmt;
use std::ops::Deref;

/// A closed path which starts at [`START_CITY`], visits every other city exactly once and
/// returns back to the start.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tour(Vec<City>);

impl Tour {
    /// Creates a tour from cities in visit order, the start city is expected on both ends.
    pub fn new(cities: Vec<City>) -> Self {
        Self(cities)
    }

    /// Creates a closed tour wrapping given interior cities with the start city.
    pub fn closed(interior: impl IntoIterator<Item = City>) -> Self {
        Self(std::iter::once(START_CITY).chain(interior).chain(std::iter::once(START_CITY)).collect())
    }

    /// Returns cities in visit order.
    pub fn cities(&self) -> &[City] {
        self.0.as_slice()
    }

    /// Checks whether the tour is a Hamiltonian cycle over `size` cities anchored at the start city.
    pub fn is_valid_for(&self, size: usize) -> bool {
        if size == 0 || self.0.len() != size + 1 {
            return false;
        }

        if self.0.first() != Some(&START_CITY) || self.0.last() != Some(&START_CITY) {
            return false;
        }

        let mut seen = vec![false; size];
        self.0[..size].iter().all(|&city| city < size && !std::mem::replace(&mut seen[city], true))
    }
}

impl Deref for Tour {
    type Target = [City];

    fn deref(&self) -> &Self::Target {
        self.cities()
    }
}

impl From<Tour> for Vec<City> {
    fn from(tour: Tour) -> Self {
        tour.0
    }
}

/// A result of solving: minimum tour cost together with the tour which achieves it.
///
/// When there is no tour with finite cost, the cost is infinite and the tour is empty.
#[derive(Clone, Debug, PartialEq)]
pub struct TourResult {
    cost: Cost,
    tour: Tour,
}

impl TourResult {
    /// Creates a new instance of `TourResult`.
    pub fn new(cost: Cost, tour: Tour) -> Self {
        Self { cost, tour }
    }

    /// Creates a result which signals that no finite-cost tour exists.
    pub fn unsolvable() -> Self {
        Self { cost: NO_EDGE, tour: Tour::default() }
    }

    /// Returns a total tour cost.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Returns the tour.
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Returns true if a finite-cost tour was found.
    pub fn is_solvable(&self) -> bool {
        self.cost.is_finite() && !self.tour.is_empty()
    }
}

impl fmt::Display for TourResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_solvable() {
            write!(f, "cost: {}, tour: {:?}", self.cost, self.tour.cities())
        } else {
            write!(f, "no tour exists")
        }
    }
}
