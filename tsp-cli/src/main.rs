//! A command line interface to exact *Traveling Salesman Problem* solvers.
//!
//! ## Usage
//!
//! - solve a problem defined by a json cost matrix with all available solvers:
//!
//!     `tsp-cli solve json four_cities.json`
//!
//! - solve a tsplib problem with a single solver writing result to the file:
//!
//!     `tsp-cli solve tsplib pentagon.tsp --solver held-karp -o result.json`
//!
//! - generate a random symmetric problem with 10 cities:
//!
//!     `tsp-cli generate --size 10 --symmetric --seed 42`
//!
//! For more details, simply run
//!
//!     tsp-cli --help

mod commands;

use self::commands::generate::{get_generate_app, run_generate};
use self::commands::solve::{get_solve_app, run_solve};
use self::commands::create_write_buffer;
use clap::Command;
use std::process;
use tsp_core::prelude::GenericError;

fn main() {
    let matches = Command::new("Traveling Salesman Problem Solver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to exact Traveling Salesman Problem solvers")
        .subcommand(get_solve_app())
        .subcommand(get_generate_app())
        .get_matches();

    let result: Result<(), GenericError> = match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches, create_write_buffer),
        Some(("generate", generate_matches)) => run_generate(generate_matches, create_write_buffer),
        Some((name, _)) => Err(format!("unknown subcommand: '{name}'").into()),
        None => Err("no subcommand was used. Use -h to print help information.".into()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
