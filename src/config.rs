use log::LevelFilter;

use crate::spec::Ordering;

/// Program configuration. Build this from the command line and hand it to
/// logging::init and the scanner.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Config {
    /// most verbose log level that is emitted
    pub log_level: LevelFilter,
    /// ordering mode forced on the scanner, if any
    pub ordering: Option<Ordering>,
}

impl Config {
    /// Create a new config object
    pub fn new(log_level: LevelFilter, ordering: Option<Ordering>) -> Config {
        Config {
            log_level,
            ordering,
        }
    }

    /// Map a `-v` count onto a log level; Warn when not verbose.
    pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
        match verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

impl Default for Config {
    fn default() -> Config {
        Config::new(LevelFilter::Warn, None)
    }
}
