use super::*;

/// Checks that reports produced by different solvers for the same matrix agree with each other:
/// every found tour is a valid closed tour with the reported cost, and all costs are equal within
/// the given tolerance.
pub fn cross_validate(matrix: &CostMatrix, reports: &[SolverReport], tolerance: Float) -> GenericResult<()> {
    let mut errors = reports.iter().filter_map(|report| check_report(matrix, report, tolerance)).collect::<Vec<_>>();

    if let Some((first, others)) = reports.split_first() {
        errors.extend(
            others
                .iter()
                .filter(|other| !is_close(first.result.cost(), other.result.cost(), tolerance))
                .map(|other| GenericError::from(format!(
                    "cost mismatch: {} reported {}, {} reported {}",
                    first.kind,
                    first.result.cost(),
                    other.kind,
                    other.result.cost()
                ))),
        );
    }

    if errors.is_empty() { Ok(()) } else { Err(GenericError::join_many(&errors, "\n").into()) }
}

fn check_report(matrix: &CostMatrix, report: &SolverReport, tolerance: Float) -> Option<GenericError> {
    let result = &report.result;

    if !result.is_solvable() {
        return (!result.tour().is_empty() || result.cost().is_finite())
            .then(|| format!("{}: unsolvable result must have infinite cost and empty tour", report.kind).into());
    }

    if !result.tour().is_valid_for(matrix.size()) {
        return Some(format!("{}: invalid tour {:?}", report.kind, result.tour().cities()).into());
    }

    let actual = matrix.tour_cost(result.tour());
    if !is_close(actual, result.cost(), tolerance) {
        return Some(format!("{}: reported cost {} differs from tour cost {actual}", report.kind, result.cost()).into());
    }

    None
}
