use super::*;
use crate::helpers::models::*;

#[test]
fn can_create_matrix_from_rows() {
    let matrix = create_four_cities_matrix();

    assert_eq!(matrix.size(), 4);
    assert_eq!(matrix.cost(1, 3), 25.);
    assert_eq!(matrix.cost(3, 1), 25.);
    assert_eq!(matrix.rows().count(), 4);
    assert_eq!(matrix.rows().nth(2), Some([15., 35., 0., 30.].as_slice()));
}

#[test]
fn can_create_single_city_matrix() {
    let matrix = CostMatrix::new(vec![vec![42.]]).expect("cannot create matrix");

    assert_eq!(matrix.size(), 1);
    assert_eq!(matrix.cost(0, 0), 0.);
}

#[test]
fn can_ignore_diagonal_values() {
    let matrix = CostMatrix::new(vec![vec![-1., 2.], vec![3., Cost::NAN]]).expect("cannot create matrix");

    assert_eq!(matrix.cost(0, 0), 0.);
    assert_eq!(matrix.cost(1, 1), 0.);
    assert_eq!(matrix.cost(0, 1), 2.);
    assert_eq!(matrix.cost(1, 0), 3.);
}

#[test]
fn can_keep_asymmetric_costs() {
    let matrix = create_matrix(&[&[0., 1.], &[7., 0.]]);

    assert_eq!(matrix.cost(0, 1), 1.);
    assert_eq!(matrix.cost(1, 0), 7.);
}

#[test]
fn can_accept_missing_edges() {
    let matrix = create_matrix(&[&[0., X], &[1., 0.]]);

    assert!(!matrix.has_edge(0, 1));
    assert!(matrix.has_edge(1, 0));
    assert_eq!(matrix.cost(0, 1), NO_EDGE);
}

parameterized_test! {can_detect_shape_errors, (rows, expected), {
    can_detect_shape_errors_impl(rows, expected);
}}

can_detect_shape_errors! {
    case_01_empty: (vec![], MatrixError::Shape { rows: 0, row: None, columns: 0 }),
    case_02_short_row: (vec![vec![0., 1.], vec![1.]], MatrixError::Shape { rows: 2, row: Some(1), columns: 1 }),
    case_03_long_row: (vec![vec![0., 1., 2.], vec![1., 0.]], MatrixError::Shape { rows: 2, row: Some(0), columns: 3 }),
    case_04_empty_row: (vec![vec![]], MatrixError::Shape { rows: 1, row: Some(0), columns: 0 }),
    case_05_not_square: (
        vec![vec![0., 1.], vec![1., 0.], vec![2., 2.]],
        MatrixError::Shape { rows: 3, row: Some(0), columns: 2 }
    ),
}

fn can_detect_shape_errors_impl(rows: Vec<Vec<Cost>>, expected: MatrixError) {
    let result = CostMatrix::new(rows);

    assert_eq!(result, Err(expected));
}

parameterized_test! {can_detect_domain_errors, (value, expected_value_is_nan), {
    can_detect_domain_errors_impl(value, expected_value_is_nan);
}}

can_detect_domain_errors! {
    case_01_negative: (-1., false),
    case_02_negative_zero_fraction: (-0.001, false),
    case_03_negative_infinity: (Cost::NEG_INFINITY, false),
    case_04_nan: (Cost::NAN, true),
}

fn can_detect_domain_errors_impl(value: Cost, expected_value_is_nan: bool) {
    let result = CostMatrix::new(vec![vec![0., 1., 1.], vec![1., 0., 1.], vec![1., value, 0.]]);

    match result {
        Err(MatrixError::Domain { row, col, value: actual }) => {
            assert_eq!((row, col), (2, 1));
            assert_eq!(actual.is_nan(), expected_value_is_nan);
            if !expected_value_is_nan {
                assert_eq!(actual, value);
            }
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn can_detect_shape_error_in_flat_data() {
    assert_eq!(CostMatrix::from_flat(2, vec![0., 1., 1.]), Err(MatrixError::Shape { rows: 2, row: None, columns: 3 }));
    assert_eq!(CostMatrix::from_flat(0, vec![]), Err(MatrixError::Shape { rows: 0, row: None, columns: 0 }));
}

#[test]
fn can_reject_flat_values_with_overflowing_size() {
    let size = usize::MAX / 2;

    let result = CostMatrix::from_flat(size, vec![0., 1.]);

    assert_eq!(result, Err(MatrixError::Shape { rows: size, row: None, columns: 2 }));
    assert_eq!(result.unwrap_err().to_string(), format!("shape error: expected {size}x{size} values, got 2"));
}

#[test]
fn can_convert_matrix_error_to_generic_error() {
    let error: GenericError = MatrixError::Domain { row: 0, col: 1, value: -2. }.into();

    assert_eq!(error.to_string(), "domain error: cost at (0, 1) must be non-negative, got -2");
}

#[test]
fn can_calculate_tour_cost() {
    let matrix = create_four_cities_matrix();

    assert_eq!(matrix.tour_cost(&[0, 1, 3, 2, 0]), 80.);
    assert_eq!(matrix.tour_cost(&[0, 1, 2, 3, 0]), 95.);
    assert_eq!(matrix.tour_cost(&[0, 0]), 0.);
}

#[test]
fn can_calculate_infinite_tour_cost_with_missing_edge() {
    let matrix = create_matrix(&[&[0., 1., X], &[1., 0., 1.], &[1., 1., 0.]]);

    assert_eq!(matrix.tour_cost(&[0, 1, 2, 0]), 3.);
    assert_eq!(matrix.tour_cost(&[0, 2, 1, 0]), NO_EDGE);
}

#[test]
fn can_scale_matrix() {
    let matrix = create_matrix(&[&[0., 2., X], &[4., 0., 1.], &[3., 5., 0.]]);

    let scaled = matrix.scale(2.5).expect("cannot scale");

    assert_eq!(scaled.cost(0, 1), 5.);
    assert_eq!(scaled.cost(1, 0), 10.);
    assert_eq!(scaled.cost(0, 2), NO_EDGE);
    assert_eq!(scaled.cost(2, 2), 0.);
}

#[test]
fn can_reject_non_positive_scale_factor() {
    let matrix = create_ring_matrix();

    for factor in [0., -1., Cost::NAN, Cost::INFINITY] {
        assert_eq!(
            matrix.scale(factor),
            Err(format!("scale factor must be a positive finite number, got {factor}").into())
        );
    }
}
