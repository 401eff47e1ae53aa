//! Thin demonstration binary: solve a board given on the command line.
//!
//! Not part of the library's public contract — a worked example of
//! wiring the facade together.

use std::env;
use std::process::ExitCode;

use taquin_solve::{solve, PdbConfig};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("usage: solve_cli <n> <board string>");
        eprintln!(r#"example: solve_cli 3 "1 2 3 4 5 6 7 8 0""#);
        return ExitCode::FAILURE;
    }

    let n: usize = match args[1].parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("invalid board size: {}", args[1]);
            return ExitCode::FAILURE;
        }
    };

    let config = PdbConfig::from_env();
    match solve(&args[2], n, &config) {
        Ok(moves) => {
            for m in moves {
                println!("{m:?}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
