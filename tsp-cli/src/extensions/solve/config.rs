//! Solver configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

extern crate serde_json;

use serde::Deserialize;
use std::io::{BufReader, Read};
use tsp_core::prelude::{Float, GenericError, SolverKind};

/// A solver configuration.
#[derive(Clone, Deserialize, Debug, Default)]
pub struct Config {
    /// Specifies which solvers should be run, e.g. `held-karp`.
    pub solvers: Option<Vec<String>>,
    /// Specifies how results of different solvers are compared.
    pub validation: Option<ValidationConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
}

/// A validation configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct ValidationConfig {
    /// Max allowed difference between costs. Default is 1e-6.
    pub tolerance: Option<Float>,
}

/// A telemetry configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct TelemetryConfig {
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
}

/// A logging configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled. Default is false.
    pub enabled: bool,
}

impl Config {
    /// Returns solver kinds listed in the config, if any.
    pub fn get_solver_kinds(&self) -> Result<Option<Vec<SolverKind>>, GenericError> {
        self.solvers
            .as_ref()
            .map(|solvers| solvers.iter().map(|solver| solver.parse::<SolverKind>()).collect::<Result<Vec<_>, _>>())
            .transpose()
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, GenericError> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}
