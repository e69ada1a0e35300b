use super::*;
use crate::helpers::get_test_resource;
use std::io::Read;
use tsp_core::prelude::*;

fn get_resource_string(path: &str) -> String {
    let mut buffer = "".to_string();

    get_test_resource(path).expect("cannot open file").read_to_string(&mut buffer).expect("cannot read file");

    buffer
}

fn get_explicit_problem_string() -> String {
    get_resource_string("../../data/tsplib/four_cities.tsp")
}

fn get_euclidean_problem_string() -> String {
    get_resource_string("../../data/tsplib/pentagon.tsp")
}

#[test]
fn can_read_explicit_full_matrix() {
    let matrix = BufReader::new(get_test_resource("../../data/tsplib/four_cities.tsp").expect("cannot open file"))
        .read_tsplib(false)
        .expect("cannot read problem");

    assert_eq!(matrix.size(), 4);
    assert_eq!(matrix.cost(1, 2), 35.);
    assert_eq!(HeldKarpSolver.solve(&matrix).expect("cannot solve").cost(), 80.);
}

#[test]
fn can_read_euclidean_coordinates() {
    let matrix = get_euclidean_problem_string().read_tsplib(false).expect("cannot read problem");

    assert_eq!(matrix.size(), 5);
    assert_eq!(matrix.cost(0, 2), 5.);
    assert!((matrix.cost(1, 4) - 8_f64.sqrt()).abs() < 1E-9);
}

#[test]
fn can_read_rounded_euclidean_coordinates() {
    let matrix = get_euclidean_problem_string().read_tsplib(true).expect("cannot read problem");

    assert_eq!(matrix.cost(1, 4), 3.);
    assert_eq!(matrix.cost(0, 4), 5.);

    let result = BacktrackingSolver.solve(&matrix).expect("cannot solve");
    assert_eq!(result.cost(), 16.);
    assert_eq!(result.tour().cities(), &[0, 1, 4, 2, 3, 0]);
}

#[test]
fn can_read_weights_split_across_lines() {
    let content = "DIMENSION: 3\nEDGE_WEIGHT_TYPE: EXPLICIT\nEDGE_WEIGHT_FORMAT: FULL_MATRIX\nEDGE_WEIGHT_SECTION\n0 1 2 3\n0 4 5 6 0\n";

    let matrix = content.to_string().read_tsplib(false).expect("cannot read problem");

    assert_eq!(matrix.cost(0, 2), 2.);
    assert_eq!(matrix.cost(1, 0), 3.);
    assert_eq!(matrix.cost(2, 1), 6.);
}

#[test]
fn can_read_asymmetric_problem() {
    let content = get_explicit_problem_string().replace("TYPE : TSP", "TYPE : ATSP").replace("10  0 35 25", "11  0 35 25");

    let matrix = content.read_tsplib(false).expect("cannot read problem");

    assert_eq!(matrix.cost(0, 1), 10.);
    assert_eq!(matrix.cost(1, 0), 11.);
}

parameterized_test! {can_read_meta_errors, (from, to, error), {
    let content = get_explicit_problem_string().replace(from, to);

    let result = content.read_tsplib(false);

    assert_eq!(result, Err(error.into()));
}}

can_read_meta_errors! {
    case_01_type: ("TYPE : TSP", "TYPE : CVRP", "expecting 'TSP' or 'ATSP' as TYPE, got 'CVRP'"),
    case_02_dimension: ("DIMENSION : 4", "DIMENSION : asd", "cannot parse DIMENSION: 'invalid float literal'"),
    case_03_edge_type: ("EDGE_WEIGHT_TYPE : EXPLICIT", "EDGE_WEIGHT_TYPE : GEO", "expecting 'EXPLICIT' or 'EUC_2D' as EDGE_WEIGHT_TYPE, got 'GEO'"),
    case_04_edge_format: ("FULL_MATRIX", "UPPER_ROW", "expecting 'FULL_MATRIX' as EDGE_WEIGHT_FORMAT, got 'UPPER_ROW'"),
    case_05_no_colon: ("NAME : four_cities", "NAME four_cities", "expected colon separated string, got: 'NAME four_cities'"),
    case_06_missing_dimension: ("DIMENSION : 4", "", "missing DIMENSION"),
    case_07_missing_edge_type: ("EDGE_WEIGHT_TYPE : EXPLICIT", "", "missing EDGE_WEIGHT_TYPE"),
    case_08_missing_section: ("EDGE_WEIGHT_SECTION", "", "expected colon separated string, got: '0 10 15 20'"),
}

parameterized_test! {can_read_data_errors, (content, error), {
    assert_eq!(content.to_string().read_tsplib(false), Err(error.into()));
}}

can_read_data_errors! {
    case_01_too_few_weights: (
        "DIMENSION: 2\nEDGE_WEIGHT_TYPE: EXPLICIT\nEDGE_WEIGHT_FORMAT: FULL_MATRIX\nEDGE_WEIGHT_SECTION\n0 1 2\n",
        "expecting 4 edge weights, got 3"
    ),
    case_02_too_many_weights: (
        "DIMENSION: 2\nEDGE_WEIGHT_TYPE: EXPLICIT\nEDGE_WEIGHT_FORMAT: FULL_MATRIX\nEDGE_WEIGHT_SECTION\n0 1 2 0 5\n",
        "expecting 4 edge weights, got 5"
    ),
    case_03_negative_weight: (
        "DIMENSION: 2\nEDGE_WEIGHT_TYPE: EXPLICIT\nEDGE_WEIGHT_FORMAT: FULL_MATRIX\nEDGE_WEIGHT_SECTION\n0 -1\n2 0\n",
        "domain error: cost at (0, 1) must be non-negative, got -1"
    ),
    case_04_missing_format: (
        "DIMENSION: 2\nEDGE_WEIGHT_TYPE: EXPLICIT\nEDGE_WEIGHT_SECTION\n0 1\n2 0\n",
        "EXPLICIT edge weights require 'FULL_MATRIX' as EDGE_WEIGHT_FORMAT"
    ),
    case_05_wrong_section: (
        "DIMENSION: 2\nEDGE_WEIGHT_TYPE: EUC_2D\nEDGE_WEIGHT_SECTION\n0 1\n2 0\n",
        "unexpected section EdgeWeights for edge weight type Euclidean2D"
    ),
    case_06_bad_coord: (
        "DIMENSION: 2\nEDGE_WEIGHT_TYPE: EUC_2D\nNODE_COORD_SECTION\n1 0 0\n2 1\n",
        "unexpected coord data: '2 1'"
    ),
    case_07_duplicate_node: (
        "DIMENSION: 2\nEDGE_WEIGHT_TYPE: EUC_2D\nNODE_COORD_SECTION\n1 0 0\n1 1 1\n",
        "duplicate node id: 1"
    ),
    case_08_node_out_of_range: (
        "DIMENSION: 2\nEDGE_WEIGHT_TYPE: EUC_2D\nNODE_COORD_SECTION\n1 0 0\n3 1 1\n",
        "node id 3 is out of range 1..=2"
    ),
    case_09_trailing_data: (
        "DIMENSION: 1\nEDGE_WEIGHT_TYPE: EUC_2D\nNODE_COORD_SECTION\n1 0 0\n2 1 1\nEOF\n",
        "expecting EOF, got: '2 1 1'"
    ),
    case_10_no_section: ("DIMENSION: 2\nEDGE_WEIGHT_TYPE: EUC_2D\n", "unexpected end of file: no data section found"),
    case_11_overflowing_dimension: (
        "TYPE: ATSP\nDIMENSION: 5000000000\nEDGE_WEIGHT_TYPE: EXPLICIT\nEDGE_WEIGHT_FORMAT: FULL_MATRIX\nEDGE_WEIGHT_SECTION\n0 1\n1 0\nEOF\n",
        "DIMENSION is too large: '5000000000'"
    ),
    case_12_huge_dimension: (
        "DIMENSION: 100000\nEDGE_WEIGHT_TYPE: EXPLICIT\nEDGE_WEIGHT_FORMAT: FULL_MATRIX\nEDGE_WEIGHT_SECTION\n0 1\n1 0\nEOF\n",
        "cannot parse edge weight: 'invalid float literal'"
    ),
}
