//! Contains format readers and writers.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/formats_test.rs"]
mod formats_test;

extern crate csv;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use tsp_core::prelude::*;
use tsp_scientific::tsplib::TsplibProblem;

/// A reader for problem.
pub struct ProblemReader(pub Box<dyn Fn(File) -> Result<CostMatrix, GenericError>>);

type FormatMap<'a> = HashMap<&'a str, ProblemReader>;

/// Gets available format readers. Euclidean distances are rounded when `is_rounded` is set.
pub fn get_formats<'a>(is_rounded: bool) -> FormatMap<'a> {
    let mut formats = FormatMap::default();

    formats.insert("json", ProblemReader(Box::new(|problem: File| read_json_matrix(BufReader::new(problem)))));
    formats.insert("csv", ProblemReader(Box::new(|problem: File| read_csv_matrix(BufReader::new(problem)))));
    formats.insert(
        "tsplib",
        ProblemReader(Box::new(move |problem: File| BufReader::new(problem).read_tsplib(is_rounded))),
    );

    formats
}

type JsonRows = Vec<Vec<Option<Float>>>;

/// A json matrix: either bare rows or rows wrapped into an object. `null` means that there is no edge.
#[derive(Deserialize, Serialize)]
#[serde(untagged)]
enum JsonMatrix {
    Plain(JsonRows),
    Wrapped { matrix: JsonRows },
}

/// Reads a cost matrix from json.
pub fn read_json_matrix<R: Read>(reader: BufReader<R>) -> Result<CostMatrix, GenericError> {
    let matrix = serde_json::from_reader::<_, JsonMatrix>(reader)
        .map_err(|err| format!("cannot deserialize matrix: '{err}'"))?;

    let rows = match matrix {
        JsonMatrix::Plain(matrix) | JsonMatrix::Wrapped { matrix } => matrix,
    };

    let rows: Vec<Vec<Cost>> =
        rows.into_iter().map(|row| row.into_iter().map(|cost| cost.unwrap_or(NO_EDGE)).collect()).collect();

    Ok(CostMatrix::new(rows)?)
}

/// Writes a cost matrix as json object, missing edges are written as `null`.
pub fn write_json_matrix<W: Write>(matrix: &CostMatrix, writer: BufWriter<W>) -> Result<(), GenericError> {
    let matrix = JsonMatrix::Wrapped {
        matrix: matrix.rows().map(|row| row.iter().map(|&cost| cost.is_finite().then_some(cost)).collect()).collect(),
    };

    serde_json::to_writer_pretty(writer, &matrix).map_err(|err| format!("cannot serialize matrix: '{err}'").into())
}

/// Reads a cost matrix from headerless csv. An empty cell or `inf` means that there is no edge.
pub fn read_csv_matrix<R: Read>(reader: BufReader<R>) -> Result<CostMatrix, GenericError> {
    let mut reader =
        csv::ReaderBuilder::new().has_headers(false).flexible(true).trim(csv::Trim::All).from_reader(reader);

    let mut rows = vec![];
    for (row_idx, record) in reader.records().enumerate() {
        let record = record.map_err(|err| format!("cannot read csv: '{err}'"))?;

        let row = record
            .iter()
            .enumerate()
            .map(|(col_idx, field)| match field {
                "" => Ok(NO_EDGE),
                field => field
                    .parse::<Float>()
                    .map_err(|err| format!("cannot parse cost at ({row_idx}, {col_idx}): '{field}', error: '{err}'")),
            })
            .collect::<Result<Vec<_>, _>>()?;

        rows.push(row);
    }

    Ok(CostMatrix::new(rows)?)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SolutionEntry {
    solver: String,
    cost: Option<Float>,
    tour: Vec<City>,
    duration_ms: u64,
}

#[derive(Serialize)]
struct SolutionsOutput {
    solutions: Vec<SolutionEntry>,
}

/// Writes solver reports as json. Cost is `null` and tour is empty when there is no tour.
pub fn write_solutions_json<W: Write>(reports: &[SolverReport], writer: BufWriter<W>) -> Result<(), GenericError> {
    let output = SolutionsOutput {
        solutions: reports
            .iter()
            .map(|report| SolutionEntry {
                solver: report.kind.to_string(),
                cost: report.result.is_solvable().then(|| report.result.cost()),
                tour: report.result.tour().cities().to_vec(),
                duration_ms: report.duration.as_millis() as u64,
            })
            .collect(),
    };

    serde_json::to_writer_pretty(writer, &output).map_err(|err| format!("cannot serialize solutions: '{err}'").into())
}
