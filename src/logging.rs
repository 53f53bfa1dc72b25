use log::LevelFilter;
use simplelog::{ColorChoice, Config as SLConfig, TermLogger, TerminalMode};

use crate::error::{Error, Result};

/// Initialize logging utilities. This uses the simplelog and log crates and
/// must be called once at the beginning of the program. Once it is done,
/// log macros such as `trace!()` and `warn!()` may be used anywhere in the
/// crate.
///
/// Records go to stderr so they never mix with program output.
///
/// # Errors
///
/// * `Error::LoggerInitFailed` - a global logger is already installed
pub fn init(level_filter: LevelFilter) -> Result<()> {
    TermLogger::init(
        level_filter,
        SLConfig::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .map_err(|e| Error::LoggerInitFailed(format!("{:?}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_refused() {
        // only this test installs a logger in the unit test binary
        let _ = init(LevelFilter::Warn);

        assert!(matches!(
            init(LevelFilter::Trace),
            Err(Error::LoggerInitFailed(_))
        ));
    }
}
