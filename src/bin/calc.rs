//! `calc numero <operacao> numero`
use std::env;
use std::process::ExitCode;

use optscan::arith::{self, Expression};
use optscan::config::Config;
use optscan::error::Error;
use optscan::{logging, report};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let program = report::program_name(&args, "calc");

    if let Err(error) = logging::init(Config::default().log_level) {
        report::error(&error);
    }

    let result = Expression::from_args(args.get(1..).unwrap_or_default())
        .and_then(|expr| expr.evaluate());

    match result {
        Ok(evaluation) => {
            println!("{}", evaluation);
            ExitCode::SUCCESS
        }
        Err(Error::InvalidArgumentCount { .. }) => {
            eprintln!("{}", arith::usage(&program));
            ExitCode::FAILURE
        }
        Err(error) => {
            report::error(&error);
            ExitCode::FAILURE
        }
    }
}
