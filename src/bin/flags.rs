//! Recognizes the plain flags `-a`, `-b` and `-C`, reporting each one as it
//! is seen.
use std::env;
use std::process::ExitCode;

use optscan::config::Config;
use optscan::error::Result;
use optscan::spec::{Arg, OptionSpec};
use optscan::{logging, report, scanner};

fn option_spec() -> Result<OptionSpec> {
    OptionSpec::new()
        .add_flag('a', Arg::None, "Identifica a opcao a")?
        .add_flag('b', Arg::None, "Identifica a opcao b")?
        .add_flag('C', Arg::None, "Identifica a opcao C")
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let program = report::program_name(&args, "flags");

    if let Err(error) = logging::init(Config::default().log_level) {
        report::error(&error);
    }

    let spec = match option_spec() {
        Ok(spec) => spec,
        Err(error) => {
            report::error(&error);
            return ExitCode::FAILURE;
        }
    };

    let matches = match scanner::scan(&spec, args.get(1..).unwrap_or_default()) {
        Ok(matches) => matches,
        Err(error) => {
            report::usage_error(&error, &spec, &program);
            return ExitCode::FAILURE;
        }
    };

    for flag in matches.occurrences() {
        println!("A opcao {} foi identificada", flag.short());
    }

    ExitCode::SUCCESS
}
