#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;

use clap::{Arg, ArgAction, Command};
use std::io::BufReader;
use std::path::Path;
use tsp_cli::extensions::solve::config::read_config;
use tsp_cli::extensions::solve::formats::{get_formats, write_solutions_json};
use tsp_cli::extensions::solve::{SolveSettings, solve_matrix};
use tsp_core::prelude::*;
use tsp_core::utils::Timer;
use tsp_scientific::tsplib::TsplibSolution;

const FORMAT_ARG_NAME: &str = "FORMAT";
const PROBLEM_ARG_NAME: &str = "PROBLEM";
const SOLVER_ARG_NAME: &str = "solver";
const CONFIG_ARG_NAME: &str = "config";
const TOLERANCE_ARG_NAME: &str = "tolerance";
const ROUNDED_ARG_NAME: &str = "round";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const OUT_TOUR_ARG_NAME: &str = "out-tour";
const LOG_ARG_NAME: &str = "log";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Solves Traveling Salesman Problem with exact solvers")
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies the problem format")
                .required(true)
                .value_parser(["json", "csv", "tsplib"])
                .index(1),
        )
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem file to use").required(true).index(2))
        .arg(
            Arg::new(SOLVER_ARG_NAME)
                .help("Specifies solver to run, can be used multiple times. All solvers are used by default")
                .short('s')
                .long(SOLVER_ARG_NAME)
                .required(false)
                .value_parser(["brute-force", "held-karp", "backtracking"])
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to solver configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TOLERANCE_ARG_NAME)
                .help("Specifies max allowed difference between costs found by different solvers")
                .short('t')
                .long(TOLERANCE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(ROUNDED_ARG_NAME)
                .help("Specifies whether euclidean distances of tsplib problem should be rounded")
                .long(ROUNDED_ARG_NAME)
                .required(false)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_TOUR_ARG_NAME)
                .help("Specifies path to file for the best tour output in tsplib format")
                .long(OUT_TOUR_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .required(false)
                .action(ArgAction::SetTrue),
        )
}

/// Runs solver commands.
pub fn run_solve(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), GenericError> {
    let timer = Timer::start();

    // required
    let problem_format = matches.get_one::<String>(FORMAT_ARG_NAME).ok_or("problem format is not specified")?;
    let problem_path = matches.get_one::<String>(PROBLEM_ARG_NAME).ok_or("problem path is not specified")?;
    let problem_file = open_file(problem_path, "problem");

    // optional
    let config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| read_config(BufReader::new(open_file(path, "config"))))
        .transpose()?;
    let kinds = matches
        .get_many::<String>(SOLVER_ARG_NAME)
        .map(|kinds| kinds.map(|kind| kind.parse::<SolverKind>()).collect::<Result<Vec<_>, _>>())
        .transpose()?;
    let tolerance = parse_float_value::<Float>(matches, TOLERANCE_ARG_NAME, "tolerance")?;
    let is_rounded = matches.get_flag(ROUNDED_ARG_NAME);
    let is_logging = matches.get_flag(LOG_ARG_NAME);
    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));
    let out_tour = matches.get_one::<String>(OUT_TOUR_ARG_NAME).map(|path| create_file(path, "out tour"));

    let settings = SolveSettings::new(config.as_ref(), kinds, tolerance, is_logging)?;
    let environment = settings.create_environment();
    let logger = environment.logger.clone();

    let formats = get_formats(is_rounded);
    let problem_reader =
        formats.get(problem_format.as_str()).ok_or_else(|| format!("unknown format: '{problem_format}'"))?;

    let matrix = Timer::measure_duration_with_callback(
        || problem_reader.0(problem_file),
        |duration| (logger)(&format!("problem read in {}ms", duration.as_millis())),
    )
    .map_err(|err| format!("cannot read {problem_format} problem from '{problem_path}': {err}"))?;

    let reports = solve_matrix(&matrix, &settings, environment)?;

    write_solutions_json(reports.as_slice(), out_writer_func(out_result))?;

    if let Some(out_tour) = out_tour {
        let name = Path::new(problem_path).file_stem().and_then(|stem| stem.to_str()).unwrap_or("tour");
        // all reports agree on cost after cross validation
        let report = reports.first().ok_or("no solver reports")?;
        report.result.write_tsplib(name, BufWriter::new(out_tour))?;
    }

    (logger)(&format!("total time: {}ms", timer.elapsed_millis()));

    Ok(())
}
