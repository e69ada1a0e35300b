#[cfg(test)]
#[path = "../../tests/unit/tsplib/reader_test.rs"]
mod reader_test;

use crate::common::*;
use rustc_hash::FxHashMap;
use std::io::{BufReader, Read};
use tsp_core::models::CostMatrix;
use tsp_core::utils::{Float, GenericError};

/// A trait to read tsplib95 problem. Please note that it is very basic implementation of the format specification.
pub trait TsplibProblem {
    /// Reads tsplib95 problem as a cost matrix. Euclidean distances are rounded when `is_rounded` is set.
    fn read_tsplib(self, is_rounded: bool) -> Result<CostMatrix, GenericError>;
}

impl<R: Read> TsplibProblem for BufReader<R> {
    fn read_tsplib(self, is_rounded: bool) -> Result<CostMatrix, GenericError> {
        TsplibReader::new(self).read_problem(is_rounded)
    }
}

impl TsplibProblem for String {
    fn read_tsplib(self, is_rounded: bool) -> Result<CostMatrix, GenericError> {
        TsplibReader::new(BufReader::new(self.as_bytes())).read_problem(is_rounded)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum EdgeWeightType {
    Explicit,
    Euclidean2D,
}

#[derive(Debug, PartialEq)]
enum Section {
    EdgeWeights,
    NodeCoords,
}

struct TsplibReader<R: Read> {
    buffer: String,
    reader: BufReader<R>,
    dimension: Option<usize>,
    edge_weight_type: Option<EdgeWeightType>,
    is_full_matrix: bool,
}

impl<R: Read> TsplibReader<R> {
    fn new(reader: BufReader<R>) -> Self {
        Self { buffer: String::new(), reader, dimension: None, edge_weight_type: None, is_full_matrix: false }
    }

    fn read_problem(&mut self, is_rounded: bool) -> Result<CostMatrix, GenericError> {
        let section = self.read_meta()?;
        let dimension = self.dimension.ok_or_else(|| GenericError::from("missing DIMENSION"))?;

        let matrix = match (self.edge_weight_type, section) {
            (Some(EdgeWeightType::Explicit), Section::EdgeWeights) => {
                if !self.is_full_matrix {
                    return Err("EXPLICIT edge weights require 'FULL_MATRIX' as EDGE_WEIGHT_FORMAT".into());
                }
                CostMatrix::from_flat(dimension, self.read_edge_weights(dimension)?)?
            }
            (Some(EdgeWeightType::Euclidean2D), Section::NodeCoords) => {
                self.read_coord_index(dimension)?.create_matrix(is_rounded)?
            }
            (None, _) => return Err("missing EDGE_WEIGHT_TYPE".into()),
            (Some(edge_type), section) => {
                return Err(format!("unexpected section {section:?} for edge weight type {edge_type:?}").into());
            }
        };

        self.read_eof()?;

        Ok(matrix)
    }

    /// Reads specification part till the first data section.
    fn read_meta(&mut self) -> Result<Section, GenericError> {
        loop {
            if self.read_line()? == 0 {
                return Err("unexpected end of file: no data section found".into());
            }

            let line = self.buffer.trim().to_string();
            match line.as_str() {
                "" => continue,
                "EDGE_WEIGHT_SECTION" => return Ok(Section::EdgeWeights),
                "NODE_COORD_SECTION" => return Ok(Section::NodeCoords),
                _ => {}
            }

            let (key, value) = line
                .split_once(':')
                .map(|(key, value)| (key.trim(), value.trim()))
                .ok_or_else(|| GenericError::from(format!("expected colon separated string, got: '{line}'")))?;

            match key {
                "TYPE" => {
                    if value != "TSP" && value != "ATSP" {
                        return Err(format!("expecting 'TSP' or 'ATSP' as TYPE, got '{value}'").into());
                    }
                }
                "DIMENSION" => {
                    let dimension = parse_usize(value, "cannot parse DIMENSION")?;
                    if dimension.checked_mul(dimension).is_none() {
                        return Err(format!("DIMENSION is too large: '{value}'").into());
                    }
                    self.dimension = Some(dimension);
                }
                "EDGE_WEIGHT_TYPE" => self.edge_weight_type = Some(parse_edge_weight_type(value)?),
                "EDGE_WEIGHT_FORMAT" => {
                    if value != "FULL_MATRIX" {
                        return Err(format!("expecting 'FULL_MATRIX' as EDGE_WEIGHT_FORMAT, got '{value}'").into());
                    }
                    self.is_full_matrix = true;
                }
                // other keys, such as NAME or COMMENT, do not influence the matrix
                _ => {}
            }
        }
    }

    fn read_edge_weights(&mut self, dimension: usize) -> Result<Vec<Float>, GenericError> {
        let expected = dimension
            .checked_mul(dimension)
            .ok_or_else(|| GenericError::from(format!("DIMENSION is too large: '{dimension}'")))?;
        // NOTE capacity is not reserved up front from the declared dimension
        let mut values = Vec::new();

        while values.len() < expected {
            if self.read_line()? == 0 {
                return Err(format!("expecting {expected} edge weights, got {}", values.len()).into());
            }

            for token in self.buffer.split_whitespace() {
                values.push(parse_float(token, "cannot parse edge weight")?);
            }
        }

        if values.len() != expected {
            return Err(format!("expecting {expected} edge weights, got {}", values.len()).into());
        }

        Ok(values)
    }

    fn read_coord_index(&mut self, dimension: usize) -> Result<CoordIndex, GenericError> {
        let mut coordinates = FxHashMap::default();

        while coordinates.len() < dimension {
            if self.read_line()? == 0 {
                return Err(format!("expecting {dimension} coordinates, got {}", coordinates.len()).into());
            }

            let line = self.buffer.trim();
            if line.is_empty() {
                continue;
            }

            let data = line.split_whitespace().collect::<Vec<_>>();
            if data.len() != 3 {
                return Err(format!("unexpected coord data: '{line}'").into());
            }

            let id = parse_usize(data[0], "cannot parse id")?;
            if id == 0 || id > dimension {
                return Err(format!("node id {id} is out of range 1..={dimension}").into());
            }

            let coord = (parse_float(data[1], "cannot parse coord.0")?, parse_float(data[2], "cannot parse coord.1")?);
            if coordinates.insert(id, coord).is_some() {
                return Err(format!("duplicate node id: {id}").into());
            }
        }

        let mut coord_index = CoordIndex::default();
        (1..=dimension).filter_map(|id| coordinates.get(&id)).for_each(|&coord| {
            coord_index.collect(coord);
        });

        Ok(coord_index)
    }

    fn read_eof(&mut self) -> Result<(), GenericError> {
        while self.read_line()? != 0 {
            match self.buffer.trim() {
                "" | "EOF" => continue,
                line => return Err(format!("expecting EOF, got: '{line}'").into()),
            }
        }

        Ok(())
    }

    fn read_line(&mut self) -> Result<usize, GenericError> {
        read_line(&mut self.reader, &mut self.buffer)
    }
}

fn parse_edge_weight_type(value: &str) -> Result<EdgeWeightType, GenericError> {
    match value {
        "EXPLICIT" => Ok(EdgeWeightType::Explicit),
        "EUC_2D" => Ok(EdgeWeightType::Euclidean2D),
        _ => Err(format!("expecting 'EXPLICIT' or 'EUC_2D' as EDGE_WEIGHT_TYPE, got '{value}'").into()),
    }
}
