//! Contains logic to run solvers over a problem read from one of the supported formats.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/settings_test.rs"]
mod settings_test;

pub mod config;
pub mod formats;

use self::config::Config;
use std::sync::Arc;
use tsp_core::prelude::*;

/// Default tolerance used when costs reported by different solvers are compared.
pub const DEFAULT_TOLERANCE: Float = 1E-6;

/// Max problem size for which brute force runs when solvers are not specified explicitly.
pub const BRUTE_FORCE_DEFAULT_MAX_SIZE: usize = 11;

/// Specifies how the problem should be solved.
#[derive(Clone, Debug)]
pub struct SolveSettings {
    /// Solvers to run. If not set, they are selected by problem size.
    pub kinds: Option<Vec<SolverKind>>,
    /// A tolerance for cost comparison.
    pub tolerance: Float,
    /// Whether solver progress should be logged.
    pub is_logging: bool,
}

impl Default for SolveSettings {
    fn default() -> Self {
        Self { kinds: None, tolerance: DEFAULT_TOLERANCE, is_logging: false }
    }
}

impl SolveSettings {
    /// Creates settings from the optional config. Explicitly passed values take precedence over
    /// the config ones.
    pub fn new(
        config: Option<&Config>,
        kinds: Option<Vec<SolverKind>>,
        tolerance: Option<Float>,
        is_logging: bool,
    ) -> Result<Self, GenericError> {
        let defaults = Self::default();

        let kinds = kinds.or(config.map(|config| config.get_solver_kinds()).transpose()?.flatten());

        if kinds.as_ref().is_some_and(|kinds| kinds.is_empty()) {
            return Err("at least one solver should be specified".into());
        }

        let tolerance = tolerance
            .or_else(|| config.and_then(|config| config.validation.as_ref()?.tolerance))
            .unwrap_or(defaults.tolerance);

        if !tolerance.is_finite() || tolerance < 0. {
            return Err(format!("tolerance must be a non-negative number, got {tolerance}").into());
        }

        let is_logging = is_logging
            || config
                .and_then(|config| config.telemetry.as_ref())
                .and_then(|telemetry| telemetry.logging.as_ref())
                .is_some_and(|logging| logging.enabled);

        Ok(Self { kinds, tolerance, is_logging })
    }

    /// Returns solvers to run for the problem of given size. Brute force is left out of the default
    /// selection when the problem has more than `BRUTE_FORCE_DEFAULT_MAX_SIZE` cities.
    pub fn get_kinds(&self, size: usize) -> Vec<SolverKind> {
        match &self.kinds {
            Some(kinds) => kinds.clone(),
            None => SolverKind::all()
                .into_iter()
                .filter(|&kind| kind != SolverKind::BruteForce || size <= BRUTE_FORCE_DEFAULT_MAX_SIZE)
                .collect(),
        }
    }

    /// Creates an environment which logs to stdout only when logging is enabled.
    pub fn create_environment(&self) -> Arc<Environment> {
        Arc::new(if self.is_logging { Environment::default() } else { Environment::new_quiet() })
    }
}

/// Runs all solvers from settings and cross validates their results.
pub fn solve_matrix(
    matrix: &CostMatrix,
    settings: &SolveSettings,
    environment: Arc<Environment>,
) -> Result<Vec<SolverReport>, GenericError> {
    let kinds = settings.get_kinds(matrix.size());

    if !kinds.contains(&SolverKind::BruteForce) && settings.kinds.is_none() {
        (environment.logger)(&format!(
            "{} is skipped for {} cities, specify it explicitly to run it",
            SolverKind::BruteForce,
            matrix.size()
        ));
    }

    let reports = compare_solvers(matrix, kinds.as_slice(), environment)?;

    cross_validate(matrix, reports.as_slice(), settings.tolerance)
        .map_err(|err| GenericError::from(format!("solvers disagree:\n{err}")))?;

    Ok(reports)
}
