#[cfg(test)]
#[path = "../../tests/unit/commands/generate_test.rs"]
mod generate_test;

use super::*;

use clap::{Arg, ArgAction, Command};
use tsp_cli::extensions::generate::{GenerateSettings, generate_problem};
use tsp_cli::extensions::solve::formats::write_json_matrix;
use tsp_core::prelude::{Float, GenericError};

const SIZE_ARG_NAME: &str = "size";
const MIN_COST_ARG_NAME: &str = "min-cost";
const MAX_COST_ARG_NAME: &str = "max-cost";
const NO_EDGE_RATIO_ARG_NAME: &str = "no-edge-ratio";
const SYMMETRIC_ARG_NAME: &str = "symmetric";
const ROUNDED_ARG_NAME: &str = "round";
const SEED_ARG_NAME: &str = "seed";
const OUT_RESULT_ARG_NAME: &str = "out-result";

const DEFAULT_MIN_COST: Float = 1.;
const DEFAULT_MAX_COST: Float = 100.;

pub fn get_generate_app() -> Command {
    Command::new("generate")
        .about("Provides the way to generate random problems for testing")
        .arg(
            Arg::new(SIZE_ARG_NAME)
                .help("Amount of cities in generated problem")
                .short('n')
                .long(SIZE_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(MIN_COST_ARG_NAME)
                .help("Specifies min edge cost, default is 1")
                .long(MIN_COST_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(MAX_COST_ARG_NAME)
                .help("Specifies max edge cost, default is 100")
                .long(MAX_COST_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(NO_EDGE_RATIO_ARG_NAME)
                .help("Specifies probability of an edge to be missing, default is 0")
                .long(NO_EDGE_RATIO_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(SYMMETRIC_ARG_NAME)
                .help("Specifies whether costs are the same in both directions")
                .long(SYMMETRIC_ARG_NAME)
                .required(false)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(ROUNDED_ARG_NAME)
                .help("Specifies whether costs are rounded to integers")
                .long(ROUNDED_ARG_NAME)
                .required(false)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Specifies randomization seed to get repeatable results")
                .long(SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_generate(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), GenericError> {
    let settings = get_settings_from_args(matches)?;

    let matrix = generate_problem(&settings).map_err(|err| format!("cannot generate problem: '{err}'"))?;

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));

    write_json_matrix(&matrix, out_writer_func(out_result))
}

fn get_settings_from_args(matches: &ArgMatches) -> Result<GenerateSettings, String> {
    let size = parse_int_value::<usize>(matches, SIZE_ARG_NAME, "size")?.ok_or("size is not specified")?;
    let min_cost = parse_float_value::<Float>(matches, MIN_COST_ARG_NAME, "min cost")?.unwrap_or(DEFAULT_MIN_COST);
    let max_cost = parse_float_value::<Float>(matches, MAX_COST_ARG_NAME, "max cost")?.unwrap_or(DEFAULT_MAX_COST);
    let no_edge_ratio = parse_float_value::<Float>(matches, NO_EDGE_RATIO_ARG_NAME, "no edge ratio")?.unwrap_or(0.);
    let seed = parse_int_value::<u64>(matches, SEED_ARG_NAME, "seed")?;

    Ok(GenerateSettings {
        size,
        cost_range: (min_cost, max_cost),
        no_edge_ratio,
        is_symmetric: matches.get_flag(SYMMETRIC_ARG_NAME),
        is_rounded: matches.get_flag(ROUNDED_ARG_NAME),
        seed,
    })
}
