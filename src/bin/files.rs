//! Takes a file name through `-a` and another through `-b`, then reports
//! what was given for each.
use std::env;
use std::process::ExitCode;

use optscan::config::Config;
use optscan::error::Result;
use optscan::matches::Matches;
use optscan::spec::{Arg, OptionSpec};
use optscan::{logging, report, scanner};

const NOT_GIVEN: &str = "(nao informada)";

fn option_spec() -> Result<OptionSpec> {
    OptionSpec::new()
        .add_flag('a', Arg::Required, "Arquivo A")?
        .add_flag('b', Arg::Required, "Arquivo B")
}

fn summary(matches: &Matches, short: char) -> String {
    format!(
        "Informacao indicada para a opcao {}: {}",
        short.to_ascii_uppercase(),
        matches.value(short).unwrap_or(NOT_GIVEN)
    )
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let program = report::program_name(&args, "files");

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
        println!("A opcao {} foi identificada.", flag.short());
        if let Some(value) = flag.arg().raw() {
            println!("Argumento da opcao {}: {}", flag.short(), value);
        }
    }

    println!("{}", summary(&matches, 'a'));
    println!("{}", summary(&matches, 'b'));

    ExitCode::SUCCESS
}
