use std::fmt::Display;
use std::path::Path;

use colored::Colorize;

use crate::spec::OptionSpec;

/// Name the program was started as, without its directory
pub fn program_name(args: &[String], fallback: &str) -> String {
    args.first()
        .and_then(|arg0| Path::new(arg0).file_name())
        .and_then(|name| name.to_str())
        .unwrap_or(fallback)
        .to_owned()
}

/// Print an error line to stderr
pub fn error(err: &dyn Display) {
    eprintln!("{} {}", "error:".bright_red().bold(), err);
}

/// Print an error followed by the usage line and flag help to stderr
pub fn usage_error(err: &dyn Display, spec: &OptionSpec, program: &str) {
    error(err);
    eprintln!("{}", spec.usage(program));
    eprint!("{}", spec.help("  "));
}
