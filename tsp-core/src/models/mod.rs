//! A collection of models which describe a traveling salesman problem and its solution.

mod matrix;
pub use self::matrix::*;

mod tour;
pub use self::tour::*;

mod generator;
pub use self::generator::generate_matrix;

/// Specifies a city identifier: an index in the cost matrix.
pub type City = usize;

/// Specifies a travel cost between two cities or a total cost of the tour.
pub type Cost = crate::utils::Float;

/// A sentinel value which marks a missing (unreachable) edge between two cities.
pub const NO_EDGE: Cost = Cost::INFINITY;

/// A city where every tour starts and ends.
pub const START_CITY: City = 0;
