use super::*;
use std::time::Duration;

fn read_json(content: &str) -> Result<CostMatrix, GenericError> {
    read_json_matrix(BufReader::new(content.as_bytes()))
}

fn read_csv(content: &str) -> Result<CostMatrix, GenericError> {
    read_csv_matrix(BufReader::new(content.as_bytes()))
}

#[test]
fn can_read_json_matrix_in_both_forms() {
    let plain = read_json("[[0, 1, 2], [3, 0, 4], [5, 6, 0]]").unwrap();
    let wrapped = read_json(r#"{ "matrix": [[0, 1, 2], [3, 0, 4], [5, 6, 0]] }"#).unwrap();

    assert_eq!(plain, wrapped);
    assert_eq!(plain.cost(1, 2), 4.);
    assert_eq!(plain.cost(2, 0), 5.);
}

#[test]
fn can_read_json_missing_edges() {
    let matrix = read_json("[[0, null], [2.5, 0]]").unwrap();

    assert!(!matrix.has_edge(0, 1));
    assert_eq!(matrix.cost(1, 0), 2.5);
}

#[test]
fn can_read_json_sample_files() {
    let matrix = read_json_matrix(BufReader::new(File::open("../data/matrices/five_cities.json").unwrap())).unwrap();
    assert_eq!(matrix.size(), 5);

    let matrix = read_json_matrix(BufReader::new(File::open("../data/matrices/directed_cycle.json").unwrap())).unwrap();
    assert_eq!(matrix.tour_cost(&[0, 1, 2, 3, 0]), 4.);
}

parameterized_test! {can_propagate_json_errors, (content, expected), {
    let err = read_json(content).unwrap_err().to_string();

    assert!(err.starts_with(expected), "unexpected error: {err}");
}}

can_propagate_json_errors! {
    case_01_not_json: ("matrix", "cannot deserialize matrix"),
    case_02_wrong_key: (r#"{ "costs": [[0]] }"#, "cannot deserialize matrix"),
    case_03_empty: ("[]", "shape error: matrix has no cities"),
    case_04_not_square: ("[[0, 1], [1]]", "shape error"),
    case_05_negative: ("[[0, -1], [1, 0]]", "domain error: cost at (0, 1)"),
}

#[test]
fn can_read_csv_matrix() {
    let matrix = read_csv("0, 1,\n, 0, 1\n1, inf, 0\n").unwrap();

    assert_eq!(matrix.size(), 3);
    assert_eq!(matrix.cost(0, 1), 1.);
    assert!(!matrix.has_edge(0, 2));
    assert!(!matrix.has_edge(1, 0));
    assert!(!matrix.has_edge(2, 1));
    assert_eq!(matrix.tour_cost(&[0, 1, 2, 0]), 3.);
}

#[test]
fn can_read_csv_sample_file() {
    let matrix = read_csv_matrix(BufReader::new(File::open("../data/matrices/ring.csv").unwrap())).unwrap();

    assert_eq!(matrix.size(), 4);
    assert_eq!(matrix.cost(0, 2), 2.);
}

parameterized_test! {can_propagate_csv_errors, (content, expected), {
    let err = read_csv(content).unwrap_err().to_string();

    assert!(err.starts_with(expected), "unexpected error: {err}");
}}

can_propagate_csv_errors! {
    case_01_not_number: ("0,1\nx,0\n", "cannot parse cost at (1, 0): 'x'"),
    case_02_ragged: ("0,1\n1\n", "shape error: matrix has 2 rows, but row 1 has 1 columns"),
    case_03_empty: ("", "shape error: matrix has no cities"),
    case_04_negative_infinity: ("0,-inf\n1,0\n", "domain error: cost at (0, 1)"),
}

#[test]
fn can_write_json_matrix_with_nulls() {
    let matrix = read_json("[[0, null], [2, 0]]").unwrap();
    let mut buffer = Vec::new();

    write_json_matrix(&matrix, BufWriter::new(&mut buffer)).unwrap();

    let content = String::from_utf8(buffer).unwrap();
    assert!(content.contains("null"));
    assert_eq!(read_json(content.as_str()).unwrap(), matrix);
}

#[test]
fn can_write_solutions_json() {
    let reports = vec![
        SolverReport {
            kind: SolverKind::HeldKarp,
            result: TourResult::new(12., Tour::new(vec![0, 1, 0])),
            duration: Duration::from_millis(3),
        },
        SolverReport { kind: SolverKind::Backtracking, result: TourResult::unsolvable(), duration: Duration::ZERO },
    ];
    let mut buffer = Vec::new();

    write_solutions_json(reports.as_slice(), BufWriter::new(&mut buffer)).unwrap();

    let content = String::from_utf8(buffer).unwrap().replace([' ', '\n'], "");
    assert_eq!(
        content,
        r#"{"solutions":[{"solver":"held-karp","cost":12.0,"tour":[0,1,0],"durationMs":3},{"solver":"backtracking","cost":null,"tour":[],"durationMs":0}]}"#
    );
}
