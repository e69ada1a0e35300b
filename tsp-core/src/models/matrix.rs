#[cfg(test)]
#[path = "../../tests/unit/models/matrix_test.rs"]
mod matrix_test;

use super::*;
use crate::utils::{GenericError, GenericResult};
use std::fmt;

/// Describes why a cost matrix cannot be created from the given data.
#[derive(Clone, Debug, PartialEq)]
pub enum MatrixError {
    /// Data is not a square matrix or it is empty.
    Shape {
        /// Amount of rows.
        rows: usize,
        /// Index of the first row with unexpected length, if any.
        row: Option<usize>,
        /// Length of that row.
        columns: usize,
    },
    /// An off-diagonal cost is negative or not a number.
    Domain {
        /// Row index of the offending cell.
        row: usize,
        /// Column index of the offending cell.
        col: usize,
        /// The value itself.
        value: Cost,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::Shape { rows: 0, .. } => write!(f, "shape error: matrix has no cities"),
            MatrixError::Shape { rows, row: Some(row), columns } => {
                write!(f, "shape error: matrix has {rows} rows, but row {row} has {columns} columns")
            }
            MatrixError::Shape { rows, row: None, columns } => {
                write!(f, "shape error: expected {rows}x{rows} values, got {columns}")
            }
            MatrixError::Domain { row, col, value } => {
                write!(f, "domain error: cost at ({row}, {col}) must be non-negative, got {value}")
            }
        }
    }
}

impl std::error::Error for MatrixError {}

impl From<MatrixError> for GenericError {
    fn from(value: MatrixError) -> Self {
        value.to_string().into()
    }
}

/// A validated square matrix of non-negative travel costs between cities.
///
/// Asymmetric costs are allowed. A missing edge is encoded with [`NO_EDGE`]. Diagonal values are
/// ignored and always read as zero.
#[derive(Clone, Debug, PartialEq)]
pub struct CostMatrix {
    size: usize,
    values: Vec<Cost>,
}

impl CostMatrix {
    /// Creates a new instance of `CostMatrix` from rows.
    pub fn new(rows: Vec<Vec<Cost>>) -> Result<Self, MatrixError> {
        let size = rows.len();

        if size == 0 {
            return Err(MatrixError::Shape { rows: 0, row: None, columns: 0 });
        }

        if let Some((row, columns)) = rows.iter().enumerate().find(|(_, row)| row.len() != size) {
            return Err(MatrixError::Shape { rows: size, row: Some(row), columns: columns.len() });
        }

        Self::from_flat(size, rows.into_iter().flatten().collect())
    }

    /// Creates a new instance of `CostMatrix` from values stored in row-major order.
    pub fn from_flat(size: usize, values: Vec<Cost>) -> Result<Self, MatrixError> {
        if size == 0 || size.checked_mul(size).is_none_or(|expected| expected != values.len()) {
            return Err(MatrixError::Shape { rows: size, row: None, columns: values.len() });
        }

        let mut values = values;
        for (idx, value) in values.iter_mut().enumerate() {
            let (row, col) = (idx / size, idx % size);

            if row == col {
                *value = 0.;
            } else if value.is_nan() || *value < 0. {
                return Err(MatrixError::Domain { row, col, value: *value });
            }
        }

        Ok(Self { size, values })
    }

    /// Returns amount of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns a travel cost from one city to another.
    #[inline]
    pub fn cost(&self, from: City, to: City) -> Cost {
        self.values[from * self.size + to]
    }

    /// Checks whether there is a direct edge between two cities.
    pub fn has_edge(&self, from: City, to: City) -> bool {
        self.cost(from, to).is_finite()
    }

    /// Iterates over matrix rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cost]> + '_ {
        self.values.chunks(self.size)
    }

    /// Returns a total cost of the path which visits given cities in order. Returns infinity
    /// if any traversed edge is missing.
    pub fn tour_cost(&self, cities: &[City]) -> Cost {
        cities.windows(2).map(|pair| self.cost(pair[0], pair[1])).sum()
    }

    /// Returns a new matrix with every finite cost multiplied by the given positive factor.
    pub fn scale(&self, factor: Cost) -> GenericResult<Self> {
        if !factor.is_finite() || factor <= 0. {
            return Err(format!("scale factor must be a positive finite number, got {factor}").into());
        }

        let values = self.values.iter().map(|&value| if value.is_finite() { value * factor } else { value }).collect();

        Ok(Self { size: self.size, values })
    }
}
