#[cfg(test)]
#[path = "../../tests/unit/common/routing_test.rs"]
mod routing_test;

use tsp_core::models::CostMatrix;
use tsp_core::utils::{Float, GenericResult};

/// Keeps city coordinates in city index order.
#[derive(Clone, Default)]
pub struct CoordIndex {
    /// City locations.
    pub locations: Vec<(Float, Float)>,
}

impl CoordIndex {
    /// Adds a city location, returns its index.
    pub fn collect(&mut self, location: (Float, Float)) -> usize {
        self.locations.push(location);
        self.locations.len() - 1
    }

    /// Creates a cost matrix with euclidean distances between all cities.
    pub fn create_matrix(&self, is_rounded: bool) -> GenericResult<CostMatrix> {
        let values = self
            .locations
            .iter()
            .flat_map(|&(x1, y1)| {
                self.locations.iter().map(move |&(x2, y2)| {
                    let value = (x1 - x2).hypot(y1 - y2);

                    if is_rounded { value.round() } else { value }
                })
            })
            .collect::<Vec<Float>>();

        Ok(CostMatrix::from_flat(self.locations.len(), values)?)
    }
}
