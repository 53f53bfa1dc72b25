use std::env;
use std::process::ExitCode;

use clap::{arg, command, ArgAction};
use log::info;
use optscan::config::Config;
use optscan::error::Error;
use optscan::matches::Matches;
use optscan::scanner::Scanner;
use optscan::spec::{OptionSpec, Ordering};
use optscan::{logging, report};

/// exit status for a bad option string, the same as clap's own usage errors
const SPEC_ERROR: u8 = 2;

fn print_list(matches: &Matches) {
    for flag in matches.occurrences() {
        match flag.arg().raw() {
            Some(value) => println!("-{} {}", flag.short(), value),
            None => println!("-{}", flag.short()),
        }
    }
    println!("--");
    for operand in matches.operands() {
        println!("{}", operand.value());
    }
}

fn main() -> ExitCode {
    let argv: Vec<String> = env::args().collect();
    let program = report::program_name(&argv, "optscan");

    let flags = command!()
        .arg(
            arg!(-v --verbose ... "Log what the scanner does; repeat for more detail")
                .action(ArgAction::Count),
        )
        .arg(
            arg!(-p --posix "Stop scanning options at the first operand")
                .action(ArgAction::SetTrue),
        )
        .arg(
            arg!(-l --list "Print one flag per line instead of shell-quoted output")
                .action(ArgAction::SetTrue),
        )
        .arg(arg!(<OPTSTRING> "getopt option string, e.g. 'a:b:'"))
        .arg(
            arg!([ARGS] ... "Arguments to scan; put them after '--'")
                .trailing_var_arg(true)
                .allow_hyphen_values(true),
        )
        .get_matches();

    let ordering = flags
        .get_flag("posix")
        .then_some(Ordering::RequireOrder);
    let config = Config::new(Config::level_for_verbosity(flags.get_count("verbose")), ordering);

    if let Err(error) = logging::init(config.log_level) {
        report::error(&error);
        return ExitCode::from(SPEC_ERROR);
    }

    let optstring = flags
        .get_one::<String>("OPTSTRING")
        .map(String::as_str)
        .unwrap_or_default();
    let args: Vec<String> = flags
        .get_many::<String>("ARGS")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let spec = match OptionSpec::parse(optstring) {
        Ok(spec) => spec,
        Err(error) => {
            report::error(&error);
            return ExitCode::from(SPEC_ERROR);
        }
    };
    info!("Scanning {:?} with option string '{}'", args, spec);

    let mut scanner = Scanner::new(&spec, args.as_slice());
    if let Some(ordering) = config.ordering {
        scanner = scanner.with_ordering(ordering);
    }

    match scanner.scan() {
        Ok(matches) => {
            if flags.get_flag("list") {
                print_list(&matches);
            } else {
                println!("{}", matches);
            }
            ExitCode::SUCCESS
        }
        Err(error @ (Error::UnrecognizedOption(_) | Error::MissingOptionValue(_))) => {
            report::usage_error(&error, &spec, &program);
            ExitCode::FAILURE
        }
        Err(error) => {
            report::error(&error);
            ExitCode::FAILURE
        }
    }
}
